// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod logging;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod specs;

pub use error::{Result, ScrapeError};

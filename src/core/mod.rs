// src/core/mod.rs

pub mod html;
pub mod link;
pub mod net;

pub use html::{Lookup, Page};
pub use net::{Fetch, HttpFetcher};

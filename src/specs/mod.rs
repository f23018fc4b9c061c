// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of the dashboard's HTML. Each spec covers one kind of
//! page and encodes *where the data lives* and *how to read it*:
//!
//! - `listing` – the dashboard page: anchors under `.panel-body li`, resolved to
//!   absolute detail-page URLs in document order.
//! - `project` – a project detail page: four labels addressed by fixed
//!   `ContentPlaceHolder1_*` element ids.
//!
//! ## What does **not** live here
//! - **Networking.** Specs take an already parsed `core::Page`; the caller
//!   (`scrape::collect_projects`) decides what to fetch and when.
//! - **Output formatting.** See `report`.
//!
//! ## Conventions
//! - Specs are pure functions of the document (plus options), so they are tested
//!   offline against inline fixtures.
//! - A missing detail field is not an error. A listing that cannot be read
//!   (bad selector, unresolvable href) is.
pub mod listing;
pub mod project;

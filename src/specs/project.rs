// src/specs/project.rs
//! Scraping *spec* for a project detail page.
//!
//! Each field is a single element looked up by id. Found → its text content,
//! trimmed. Absent → the placeholder. Contents are not validated (a malformed
//! GSTIN is returned as-is).

use crate::core::html::{Lookup, Page};
use crate::data::{Field, ProjectRecord};

pub struct Extraction {
    pub record: ProjectRecord,
    /// Fields that fell back to the placeholder, in `Field::ALL` order.
    pub missing: Vec<Field>,
}

/// One id lookup per field; the record and the missing list come from the same pass.
pub fn extract_checked(page: &Page, placeholder: &str) -> Extraction {
    let mut missing = Vec::new();
    let record = ProjectRecord::from_fn(|field| match page.lookup_id(field.element_id()) {
        Lookup::Found(text) => text,
        Lookup::Absent => {
            missing.push(field);
            s!(placeholder)
        }
    });
    Extraction { record, missing }
}

pub fn extract(page: &Page, placeholder: &str) -> ProjectRecord {
    extract_checked(page, placeholder).record
}

// src/report.rs
// Rendering a ProjectList. Text for humans, CSV/TSV for spreadsheets.

use std::io::{self, Write};

use crate::config::options::OutputFormat;
use crate::csv;
use crate::data::ProjectList;

/// One block per project:
///
/// ```text
/// Project 1:
/// GSTIN: 27ABCDE1234F1Z5
/// PAN: ABCDE1234F
/// Name: Lake View Residency
/// Permanent Address: Plot 4, Sector 9
///
/// ```
pub fn write_text<W: Write>(mut w: W, projects: &ProjectList) -> io::Result<()> {
    for (i, record) in projects.iter().enumerate() {
        writeln!(w, "Project {}:", i + 1)?;
        for (label, value) in record.fields() {
            writeln!(w, "{label}: {value}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

pub fn write<W: Write>(w: W, projects: &ProjectList, format: OutputFormat) -> io::Result<()> {
    match format.delim() {
        None => write_text(w, projects),
        Some(sep) => csv::write_dataset(w, &projects.to_dataset(), sep),
    }
}

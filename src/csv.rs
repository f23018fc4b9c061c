// src/csv.rs
use std::io::{self, Write};

use crate::data::DataSet;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header row (if any) followed by every data row.
pub fn write_dataset<W: Write>(mut w: W, ds: &DataSet, sep: char) -> io::Result<()> {
    if let Some(h) = &ds.headers {
        write_row(&mut w, h, sep)?;
    }
    for r in &ds.rows {
        write_row(&mut w, r, sep)?;
    }
    Ok(())
}

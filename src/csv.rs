// src/csv.rs
use std::io::{self, Write};

use crate::dataset::{FacilityTankRecord, Field};
use crate::group::FacilityGroup;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
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

/* ---------------- Result tables ---------------- */

/// Every column key, dataset order.
pub fn export_headers() -> Vec<&'static str> {
    Field::ALL.iter().map(|f| f.key()).collect()
}

/// One flat row per record. Missing values stay empty (no "N/A" in files).
pub fn record_row(record: &FacilityTankRecord) -> Vec<&str> {
    Field::ALL
        .iter()
        .map(|&f| record.get(f).unwrap_or_default())
        .collect()
}

/// Tanks in group order: facility by facility, tanks in input order.
pub fn group_rows<'a>(groups: &[FacilityGroup<'a>]) -> Vec<Vec<&'a str>> {
    groups
        .iter()
        .flat_map(|g| g.tanks.iter().map(|&t| record_row(t)))
        .collect()
}

/// Header line + one line per tank, ready for clipboard or file.
pub fn to_export_string(groups: &[FacilityGroup<'_>], sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let _ = write_row(&mut buf, &export_headers(), sep);
    for r in group_rows(groups) {
        let _ = write_row(&mut buf, &r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

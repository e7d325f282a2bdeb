// src/file.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::to_export_string;
use crate::group::FacilityGroup;

/// Write grouped results to `export.out_path()` in the chosen format.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    groups: &[FacilityGroup<'_>],
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    write_export_to(&path, groups, export.delimiter())?;
    Ok(path)
}

/// Same, to an explicit path.
pub fn write_export_to(
    path: &Path,
    groups: &[FacilityGroup<'_>],
    sep: char,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, to_export_string(groups, sep))?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

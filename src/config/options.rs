// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub data: DataOptions,
    pub export: ExportOptions,
}

/// Where the two dataset files live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataOptions {
    pub facilities: PathBuf,
    pub owners: PathBuf,
}

impl Default for DataOptions {
    fn default() -> Self {
        Self {
            facilities: PathBuf::from(DEFAULT_DATA_FILE),
            owners: PathBuf::from(DEFAULT_OWNERS_FILE),
        }
    }
}

impl DataOptions {
    /// Defaults, overridden by `UST_DATA` / `UST_OWNERS` when set and non-empty.
    pub fn from_env() -> Self {
        let mut opts = Self::default();
        if let Some(p) = env_path(ENV_DATA_FILE) {
            opts.facilities = p;
        }
        if let Some(p) = env_path(ENV_OWNERS_FILE) {
            opts.owners = p;
        }
        opts
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`, unless the user typed their own extension.
    pub fn out_path(&self) -> PathBuf {
        let stem = self.out_path.file_stem.to_string_lossy();
        let file_name = match &self.out_path.ext {
            Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
            None => format!("{stem}.{}", self.format.ext()),
        };
        self.out_path.dir.join(file_name)
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());

        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    /// Replace only the file name stem; dir and extension stay.
    pub fn set_file_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }

    pub fn delimiter(&self) -> char {
        self.format.delim()
    }

    /// True while the path still follows the format (no user extension).
    pub fn follows_format(&self) -> bool {
        self.out_path.ext.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,  // without extension
    ext: Option<OsString>, // user-typed extension wins over format
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

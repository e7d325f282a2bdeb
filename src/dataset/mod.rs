// src/dataset/mod.rs
//! The two static tables: facility/tank rows and owner contacts.
//!
//! Both are read once, up front, into a [`Dataset`] that is never mutated
//! afterwards. Everything downstream (filter, group, owner lookup) borrows it.

mod fields;
mod owner;
mod scalar;

use std::{fs, io, path::{Path, PathBuf}};

use serde::de::DeserializeOwned;

pub use fields::{FacilityTankRecord, Field, TANK_TABLE_FIELDS};
pub use owner::OwnerRecord;

use crate::config::options::DataOptions;
use crate::core::sanitize::or_na;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    pub facilities: Vec<FacilityTankRecord>,
    pub owners: Vec<OwnerRecord>,
}

impl Dataset {
    pub fn new(facilities: Vec<FacilityTankRecord>, owners: Vec<OwnerRecord>) -> Self {
        Self { facilities, owners }
    }

    /// Read both tables from the paths in `opts`.
    pub fn load(opts: &DataOptions) -> Result<Self, DataError> {
        let facilities = read_table(&opts.facilities)?;
        let owners = read_table(&opts.owners)?;
        logf!(
            "Data: Loaded facilities={} owners={}",
            facilities.len(),
            owners.len()
        );
        Ok(Self { facilities, owners })
    }

    /// Parse both tables from in-memory JSON text.
    pub fn from_json(facilities: &str, owners: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            facilities: serde_json::from_str(facilities)?,
            owners: serde_json::from_str(owners)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// The one place "N/A" gets substituted for a missing or empty value.
pub fn field_or_default(record: &FacilityTankRecord, field: Field) -> &str {
    or_na(record.get(field))
}

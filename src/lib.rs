// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod log;

pub mod dataset;
pub mod filter;
pub mod group;
pub mod maps;
pub mod owner;
pub mod session;

pub mod csv;
pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use dataset::{Dataset, DataError, FacilityTankRecord, Field, OwnerRecord, field_or_default};
pub use filter::{Category, Mode};
pub use group::FacilityGroup;
pub use session::Session;

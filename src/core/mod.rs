// src/core/mod.rs

pub mod number;
pub mod sanitize;

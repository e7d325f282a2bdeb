// src/maps.rs
//! Coordinate → external map link.
//!
//! Argument order is (latitude, longitude) everywhere in this crate; the
//! link is `…/maps?q=<lat>,<lon>`.

use crate::config::consts::{COORDS_UNAVAILABLE, MAP_URL_BASE};
use crate::core::number::parse_float;
use crate::dataset::{FacilityTankRecord, Field};

/// Either coordinate missing or not a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", COORDS_UNAVAILABLE)]
pub struct CoordinatesUnavailable;

pub fn map_url(latitude: Option<&str>, longitude: Option<&str>) -> Result<String, CoordinatesUnavailable> {
    let lat = latitude.and_then(parse_float).map(unsigned_zero).ok_or(CoordinatesUnavailable)?;
    let lon = longitude.and_then(parse_float).map(unsigned_zero).ok_or(CoordinatesUnavailable)?;
    Ok(format!("{MAP_URL_BASE}?q={lat},{lon}"))
}

// "-0" prints as "0" in the link.
fn unsigned_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Map link for a facility's representative row.
pub fn facility_map_url(facility: &FacilityTankRecord) -> Result<String, CoordinatesUnavailable> {
    map_url(facility.get(Field::Latitude), facility.get(Field::Longitude))
}

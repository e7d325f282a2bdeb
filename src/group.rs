// src/group.rs
use std::collections::HashMap;

use crate::dataset::{FacilityTankRecord, Field};

/// All tanks of one facility, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct FacilityGroup<'a> {
    /// First row seen for this facility; supplies name, address, county, coordinates.
    pub facility: &'a FacilityTankRecord,
    pub tanks: Vec<&'a FacilityTankRecord>,
}

impl<'a> FacilityGroup<'a> {
    pub fn id(&self) -> Option<&'a str> {
        self.facility.get(Field::AiId)
    }
}

/// Bucket rows by `AI_ID`, facilities in first-seen order. Rows without an
/// id share one bucket. No sorting anywhere.
pub fn group_by_facility<'a, I>(rows: I) -> Vec<FacilityGroup<'a>>
where
    I: IntoIterator<Item = &'a FacilityTankRecord>,
{
    let mut slot: HashMap<Option<&'a str>, usize> = HashMap::new();
    let mut groups: Vec<FacilityGroup<'a>> = Vec::new();

    for row in rows {
        let key = row.get(Field::AiId);
        let ix = *slot.entry(key).or_insert_with(|| {
            groups.push(FacilityGroup { facility: row, tanks: Vec::new() });
            groups.len() - 1
        });
        groups[ix].tanks.push(row);
    }

    groups
}

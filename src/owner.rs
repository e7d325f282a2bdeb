// src/owner.rs
use crate::core::sanitize::eq_ci;
use crate::dataset::OwnerRecord;

/// First owner whose name equals `name` ignoring case. No trimming.
pub fn find_owner<'a>(owners: &'a [OwnerRecord], name: &str) -> Option<&'a OwnerRecord> {
    owner_position(owners, name).map(|ix| &owners[ix])
}

/// Same lookup, as an index into `owners`.
pub fn owner_position(owners: &[OwnerRecord], name: &str) -> Option<usize> {
    owners
        .iter()
        .position(|o| o.name.as_deref().is_some_and(|n| eq_ci(n, name)))
}

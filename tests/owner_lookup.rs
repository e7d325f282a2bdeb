// tests/owner_lookup.rs
mod common;

use ust_lookup::owner::{find_owner, owner_position};

#[test]
fn case_insensitive_first_match_wins() {
    let ds = common::dataset();
    let owner = find_owner(&ds.owners, "bluegrass FUEL co").unwrap();
    assert_eq!(owner.addr1.as_deref(), Some("200 E Vine St"));
    assert_eq!(owner.zip.as_deref(), Some("40507"));
    assert_eq!(owner_position(&ds.owners, "BLUEGRASS FUEL CO"), Some(0));
}

#[test]
fn unknown_or_padded_name_not_found() {
    let ds = common::dataset();
    assert!(find_owner(&ds.owners, "Nobody Petroleum").is_none());
    assert!(find_owner(&ds.owners, " Bluegrass Fuel Co").is_none());
    // the nameless owner entry never matches, not even the empty name
    assert!(find_owner(&ds.owners, "").is_none());
}

#[test]
fn detail_lines_fill_missing_with_na() {
    let ds = common::dataset();
    let owner = find_owner(&ds.owners, "Capital Petroleum LLC").unwrap();
    let lines = owner.detail_lines();
    assert_eq!(lines[0], ("Name", "Capital Petroleum LLC"));
    assert_eq!(lines[1], ("Address 1", "N/A"));
    assert_eq!(lines[2], ("City", "Frankfort"));
    assert_eq!(lines[5], ("Phone", "N/A"));
}

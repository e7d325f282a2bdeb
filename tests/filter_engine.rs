// tests/filter_engine.rs
//
// Filter engine behavior per category, against the shared fixture.
mod common;

use ust_lookup::dataset::{Field, field_or_default};
use ust_lookup::filter::{self, Category};

fn ids(rows: &[&ust_lookup::FacilityTankRecord]) -> Vec<String> {
    rows.iter().map(|r| field_or_default(r, Field::SubjectItemId).to_string()).collect()
}

#[test]
fn ai_id_exact_match_keeps_dataset_order() {
    let ds = common::dataset();
    let rows = filter::filter(&ds.facilities, Some(Category::AiId), "100");
    assert_eq!(rows.len(), 2);
    assert_eq!(ids(&rows), vec!["1", "3"]);
    assert!(rows.iter().all(|r| r.get(Field::AiId) == Some("100")));
}

#[test]
fn ai_id_requires_exact_text() {
    let ds = common::dataset();
    assert!(filter::filter(&ds.facilities, Some(Category::AiId), "10").is_empty());
    assert!(filter::filter(&ds.facilities, Some(Category::AiId), "100 ").is_empty());
}

#[test]
fn name_substring_any_case_and_trimmed() {
    let ds = common::dataset();
    let rows = filter::filter(&ds.facilities, Some(Category::AiName), "  corner MARKET ");
    assert_eq!(ids(&rows), vec!["1", "3"]);

    let rows = filter::filter(&ds.facilities, Some(Category::AiName), "stop");
    assert_eq!(ids(&rows), vec!["2", "6"]);
}

#[test]
fn address_substring_skips_rows_without_address() {
    let ds = common::dataset();
    let rows = filter::filter(&ds.facilities, Some(Category::Address), "ridge");
    assert_eq!(ids(&rows), vec!["4"]);

    // empty term matches every row that has an address at all
    let rows = filter::filter(&ds.facilities, Some(Category::Address), "   ");
    assert_eq!(rows.len(), 5);
}

#[test]
fn county_values_are_distinct_sorted_and_defaulted() {
    let ds = common::dataset();
    let values = filter::unique_values(&ds.facilities, Some(Category::County));
    assert_eq!(values, vec!["Adair", "boone", "Fayette", "Franklin", "N/A"]);

    let mut deduped = values.clone();
    deduped.dedup();
    assert_eq!(deduped, values);
}

#[test]
fn selecting_each_county_returns_only_that_county() {
    let ds = common::dataset();
    for value in filter::unique_values(&ds.facilities, Some(Category::County)) {
        let rows = filter::filter(&ds.facilities, Some(Category::County), &value);
        assert!(rows.iter().all(|r| field_or_default(r, Field::County) == value));
    }
    let rows = filter::filter(&ds.facilities, Some(Category::County), "Fayette");
    assert_eq!(ids(&rows), vec!["1", "3"]);
}

#[test]
fn owner_dropdown_defaults_missing_owner() {
    let ds = common::dataset();
    let values = filter::unique_values(&ds.facilities, Some(Category::Owner));
    assert_eq!(
        values,
        vec!["bluegrass fuel co", "Bluegrass Fuel Co", "Capital Petroleum LLC", "Green River Oil", "N/A"]
    );
    let rows = filter::filter(&ds.facilities, Some(Category::Owner), "N/A");
    assert_eq!(ids(&rows), vec!["4", "6"]);
}

#[test]
fn no_category_runs_no_query() {
    let ds = common::dataset();
    assert!(filter::filter(&ds.facilities, None, "100").is_empty());
    assert_eq!(Category::from_key("--Select--"), None);
}

// tests/session_flow.rs
//
// End-to-end interaction flows through `Session`.
mod common;

use ust_lookup::config::consts::{COORDS_UNAVAILABLE, PLACEHOLDER};
use ust_lookup::{Category, Mode, Session};

fn session() -> Session {
    Session::new(common::dataset())
}

#[test]
fn fresh_session_shows_placeholder() {
    let s = session();
    assert_eq!(s.category(), None);
    assert!(!s.has_results());
    assert!(s.groups().is_empty());
    assert_eq!(s.placeholder(), PLACEHOLDER);
    assert!(s.owner().is_none());
    assert!(s.notice().is_none());
}

#[test]
fn search_by_id_groups_results() {
    let mut s = session();
    s.set_category(Some(Category::AiId));
    assert_eq!(s.mode(), Some(Mode::Search));
    assert!(s.unique_values().is_empty());

    s.set_search_term("100");
    s.search();
    assert_eq!(s.result_indices(), &[0, 2]);

    let groups = s.groups();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].tanks.len(), 2);
}

#[test]
fn search_with_dropdown_category_matches_nothing() {
    let mut s = session();
    s.set_category(Some(Category::County));
    s.set_search_term("Fayette");
    s.search();
    assert!(!s.has_results());
}

#[test]
fn dropdown_flow_and_category_switch() {
    let mut s = session();
    s.set_category(Some(Category::County));
    assert_eq!(s.mode(), Some(Mode::Dropdown));
    assert_eq!(s.unique_values().len(), 5);

    s.select_value("Franklin");
    assert_eq!(s.selected_value(), Some("Franklin"));
    assert_eq!(s.result_indices(), &[1]);

    // switching clears the selection and rebuilds the list, results remain
    s.set_category(Some(Category::Owner));
    assert_eq!(s.selected_value(), None);
    assert!(s.unique_values().contains(&"Green River Oil".to_string()));
    assert_eq!(s.result_indices(), &[1]);

    s.select_value("");
    assert_eq!(s.selected_value(), None);
    assert!(!s.has_results());
}

#[test]
fn owner_overlay_holds_one_owner() {
    let mut s = session();
    s.show_owner(Some("capital petroleum llc"));
    assert_eq!(s.owner().and_then(|o| o.city.as_deref()), Some("Frankfort"));

    s.show_owner(Some("Bluegrass Fuel Co"));
    assert_eq!(s.owner().and_then(|o| o.phone.as_deref()), Some("859-555-0100"));

    s.show_owner(Some("Green River Oil"));
    assert!(s.owner().is_none());

    s.show_owner(Some("Bluegrass Fuel Co"));
    s.close_owner();
    assert!(s.owner().is_none());
}

#[test]
fn map_link_or_notice() {
    let mut s = session();
    assert_eq!(
        s.open_map(Some("38.0"), Some("-84.0")).as_deref(),
        Some("https://www.google.com/maps?q=38,-84")
    );
    assert!(s.notice().is_none());

    assert_eq!(s.open_map(Some("abc"), Some("-84.8")), None);
    assert_eq!(s.notice(), Some(COORDS_UNAVAILABLE));

    s.dismiss_notice();
    assert!(s.notice().is_none());
}

#[test]
fn empty_dataset_has_no_values_or_results() {
    let mut s = Session::new(ust_lookup::Dataset::new(Vec::new(), Vec::new()));
    s.set_category(Some(Category::Owner));
    assert!(s.unique_values().is_empty());
    s.select_value("N/A");
    assert!(!s.has_results());
    s.show_owner(Some("anyone"));
    assert!(s.owner().is_none());
}

#[test]
fn tank_without_owner_name_never_matches_blank_owner() {
    let ds = ust_lookup::Dataset::from_json(
        r#"[{"AI_ID": 1, "OWNER_NAME": ""}, {"AI_ID": 2}]"#,
        r#"[{"OWNER_NAME": "", "OWNER_ADDR1": "blank-named owner"}]"#,
    )
    .unwrap();
    let mut s = Session::new(ds);

    s.show_owner(None);
    assert!(s.owner().is_none());

    let blank = s.dataset().facilities[0].owner_name.clone();
    s.show_owner(blank.as_deref());
    assert!(s.owner().is_none());
}

#[test]
fn select_value_ignores_search_categories() {
    let mut s = session();
    s.set_category(Some(Category::AiName));
    s.select_value("quick");
    assert!(!s.has_results());

    s.set_category(None);
    s.select_value("Fayette");
    assert!(!s.has_results());
}

// tests/export_file.rs
mod common;

use std::{fs, path::PathBuf};

use ust_lookup::config::options::{ExportFormat, ExportOptions};
use ust_lookup::csv::{export_headers, to_export_string};
use ust_lookup::file::write_export;
use ust_lookup::filter::{Category, filter};
use ust_lookup::group::group_by_facility;

#[test]
fn default_path_follows_format() {
    let mut opts = ExportOptions::default();
    assert_eq!(opts.out_path(), PathBuf::from("out").join("facilities.csv"));
    assert!(opts.follows_format());

    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), PathBuf::from("out").join("facilities.tsv"));
    assert_eq!(opts.delimiter(), '\t');
}

#[test]
fn typed_extension_wins() {
    let mut opts = ExportOptions::default();
    opts.set_path("reports/fayette.txt");
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), PathBuf::from("reports").join("fayette.txt"));
    assert!(!opts.follows_format());

    opts.set_file_stem("boone");
    assert_eq!(opts.out_path(), PathBuf::from("reports").join("boone.txt"));
}

#[test]
fn export_string_has_header_and_one_line_per_tank() {
    let ds = common::dataset();
    let rows = filter(&ds.facilities, Some(Category::County), "Fayette");
    let groups = group_by_facility(rows);
    let text = to_export_string(&groups, ',');

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], export_headers().join(","));
    assert!(lines[1].starts_with("100,Corner Market #12,112 Main St,"));
    // missing values stay empty in files
    assert!(lines[2].contains(",,"));
}

#[test]
fn cells_with_separator_are_quoted() {
    let ds = common::dataset();
    let rows = filter(&ds.facilities, Some(Category::AiId), "300");
    let groups = group_by_facility(rows);

    let tsv = to_export_string(&groups, '\t');
    assert!(tsv.contains("\tHilltop Gas & Go\t"));

    let mut ds2 = ds.clone();
    ds2.facilities[3].ai_name = Some("Hill, Gas \"&\" Go".into());
    let rows = filter(&ds2.facilities, Some(Category::AiId), "300");
    let csv = to_export_string(&group_by_facility(rows), ',');
    assert!(csv.contains(",\"Hill, Gas \"\"&\"\" Go\","));
}

#[test]
fn write_export_creates_directory() {
    let dir = std::env::temp_dir().join(format!("ust_lookup_export_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);

    let mut opts = ExportOptions::default();
    opts.set_path(&dir.join("nested").join("results").to_string_lossy());

    let ds = common::dataset();
    let groups = group_by_facility(&ds.facilities);
    let written = write_export(&opts, &groups).unwrap();

    assert_eq!(written, dir.join("nested").join("results.csv"));
    let text = fs::read_to_string(&written).unwrap();
    assert_eq!(text.lines().count(), ds.facilities.len() + 1);

    fs::remove_dir_all(&dir).ok();
}

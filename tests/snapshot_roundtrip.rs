// tests/snapshot_roundtrip.rs
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use ghdb_scrape::store::{load_snapshot, save_snapshot};
use ghdb_scrape::DorkRecord;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("ghdb_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> Vec<DorkRecord> {
    vec![
        DorkRecord::new("2024-01-01", r#"intitle:"index of" "parent directory""#, "Sensitive Directories", "alice"),
        DorkRecord::new("2024-01-02", "site:*.gov filetype:xls", "Files Containing Juicy Info", "Bob"),
        DorkRecord::new("2024-01-03", "inurl:/wp-admin/", "Pages Containing Login Portals", "Zoë Ångström"),
    ]
}

#[test]
fn records_come_back_identical_and_in_order() {
    let dir = tmp_dir("roundtrip");
    let now = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap().and_hms_opt(8, 9, 10).unwrap();

    let path = save_snapshot(&dir, &sample(), &now).unwrap().unwrap();
    assert!(path.ends_with("google_dorks_20250607_080910.json"));

    let snap = load_snapshot(&path).unwrap();
    assert_eq!(snap.timestamp, "20250607_080910");
    assert_eq!(snap.total_dorks, 3);
    assert_eq!(snap.dorks, sample());
}

#[test]
fn file_is_pretty_utf8_with_literal_non_ascii() {
    let dir = tmp_dir("layout");
    let now = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();

    let path = save_snapshot(&dir, &sample(), &now).unwrap().unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains("Zoë Ångström"));
    assert!(!text.contains("\\u"));
    assert!(text.starts_with("{\n    \"timestamp\": \"20240102_030405\",\n    \"total_dorks\": 3,\n    \"dorks\": ["));
    assert!(text.contains("\n            \"date\": \"2024-01-01\","));
}

#[test]
fn empty_result_set_leaves_dir_untouched() {
    let dir = tmp_dir("empty");
    let now = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap();

    assert!(save_snapshot(&dir, &[], &now).unwrap().is_none());
    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
}

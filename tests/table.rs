use chrono::NaiveDate;
use tempfile::TempDir;

use panos_scanner::correlate::{Precision, check_date};
use panos_scanner::table::{ParseError, load_version_table};

#[test]
fn load_version_table_feeds_correlation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version-table.txt");
    std::fs::write(
        &path,
        "9.0.6 Feb 11 2020\n9.1.2 Feb 11 2020\n8.1.13 Feb 12 2020\n9.0.7 Mar 02 2020\n",
    )
    .unwrap();

    let table = load_version_table(&path).unwrap();
    let matches = check_date(&table, NaiveDate::from_ymd_opt(2020, 2, 11).unwrap());

    assert_eq!(matches.exact.precision, Precision::Exact);
    assert_eq!(matches.exact.matched_versions, vec!["9.0.6", "9.1.2"]);
    assert_eq!(matches.approximate.matched_versions, vec!["8.1.13"]);
}

#[test]
fn load_version_table_rejects_malformed_record() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("version-table.txt");
    std::fs::write(&path, "9.0.6 Feb 11 2020\n9.1.2 Feb 2020\n").unwrap();

    let result = load_version_table(&path);

    assert!(matches!(
        result,
        Err(ParseError::MissingFields { line: 2, .. })
    ));
}

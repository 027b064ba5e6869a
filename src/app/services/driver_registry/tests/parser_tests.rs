//! Tests for driver metadata parsing

use super::*;
use crate::Error;
use crate::app::services::driver_registry::parser::{load_registry, parse_driver_line};
use tempfile::TempDir;

#[test]
fn test_load_registry_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = write_metadata_file(&dir, "drivers.csv", "44,HAM,Lewis Hamilton,Mercedes\n");

    let (registry, stats) = load_registry(&path).unwrap();

    assert_eq!(stats.lines_parsed, 1);
    assert_eq!(stats.drivers_loaded, 1);
    assert_eq!(stats.duplicates_replaced, 0);

    let driver = registry.get("HAM").unwrap();
    assert_eq!(driver.id, "44");
    assert_eq!(driver.name, "Lewis Hamilton");
    assert_eq!(driver.car, "Mercedes");
}

#[test]
fn test_load_registry_keeps_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_metadata_file(&dir, "drivers.csv", TEST_METADATA);

    let (registry, stats) = load_registry(&path).unwrap();
    assert_eq!(stats.drivers_loaded, 3);

    let codes: Vec<&str> = registry.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["HAM", "VER", "LEC"]);
}

#[test]
fn test_load_registry_last_record_wins_on_duplicate_code() {
    let dir = TempDir::new().unwrap();
    let path = write_metadata_file(
        &dir,
        "drivers.csv",
        "44,HAM,Lewis Hamilton,Mercedes\n1,VER,Max Verstappen,Red Bull\n63,HAM,Wrong Hamilton,Ferrari\n",
    );

    let (registry, stats) = load_registry(&path).unwrap();

    assert_eq!(stats.drivers_loaded, 2);
    assert_eq!(stats.duplicates_replaced, 1);

    // The later record replaces the earlier one...
    let driver = registry.get("HAM").unwrap();
    assert_eq!(driver.id, "63");
    assert_eq!(driver.car, "Ferrari");

    // ...but keeps the first record's display position.
    let codes: Vec<&str> = registry.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["HAM", "VER"]);
}

#[test]
fn test_load_registry_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.csv");

    let result = load_registry(&path);
    assert!(matches!(result.unwrap_err(), Error::FileNotFound { .. }));
}

#[test]
fn test_load_registry_short_line_is_error_not_skip() {
    let dir = TempDir::new().unwrap();
    let path = write_metadata_file(
        &dir,
        "drivers.csv",
        "44,HAM,Lewis Hamilton,Mercedes\n1,VER,Max Verstappen\n",
    );

    let result = load_registry(&path);
    match result.unwrap_err() {
        Error::MetadataFormat { line, message, .. } => {
            assert_eq!(line, 2);
            assert!(message.contains("got 3"));
        }
        other => panic!("expected MetadataFormat, got {:?}", other),
    }
}

#[test]
fn test_load_registry_blank_interior_line_is_error() {
    let dir = TempDir::new().unwrap();
    let path = write_metadata_file(
        &dir,
        "drivers.csv",
        "44,HAM,Lewis Hamilton,Mercedes\n\n1,VER,Max Verstappen,Red Bull\n",
    );

    let result = load_registry(&path);
    assert!(matches!(
        result.unwrap_err(),
        Error::MetadataFormat { line: 2, .. }
    ));
}

#[test]
fn test_parse_driver_line_trims_fields() {
    let driver = parse_driver_line(" 44 , HAM , Lewis Hamilton , Mercedes ", "t.csv", 1).unwrap();
    assert_eq!(driver.id, "44");
    assert_eq!(driver.code, "HAM");
    assert_eq!(driver.name, "Lewis Hamilton");
    assert_eq!(driver.car, "Mercedes");
}

#[test]
fn test_parse_driver_line_ignores_extra_fields() {
    let driver = parse_driver_line("44,HAM,Lewis Hamilton,Mercedes,extra", "t.csv", 1).unwrap();
    assert_eq!(driver.car, "Mercedes");
}

#[test]
fn test_parse_driver_line_rejects_empty_code() {
    let result = parse_driver_line("44,,Lewis Hamilton,Mercedes", "t.csv", 3);
    assert!(matches!(
        result.unwrap_err(),
        Error::MetadataFormat { line: 3, .. }
    ));
}

//! Integration tests for the session pipeline: lap log and metadata files
//! on disk through parsing into the in-memory mappings.

use lap_analyzer::Error;
use lap_analyzer::app::services::driver_registry::load_registry;
use lap_analyzer::app::services::session_loader::load_session;
use std::fs;
use tempfile::TempDir;

/// Parse a complete lap log and verify grouping, order and location
#[test]
fn test_session_load_end_to_end() {
    let dir = TempDir::new().unwrap();
    let laps_path = dir.path().join("monza.txt");
    fs::write(&laps_path, "Monza\nHAM91.234\nVER90.876\nHAM92.001\n").unwrap();

    let session = load_session(&laps_path).unwrap();

    assert_eq!(session.location, "Monza");
    assert_eq!(session.laps.driver_count(), 2);
    assert_eq!(session.laps.times("HAM").unwrap(), &[91.234, 92.001]);
    assert_eq!(session.laps.times("VER").unwrap(), &[90.876]);

    let codes: Vec<&str> = session.laps.driver_codes().collect();
    assert_eq!(codes, vec!["HAM", "VER"]);
}

/// Load a metadata file and verify the code-keyed registry round-trip
#[test]
fn test_registry_load_end_to_end() {
    let dir = TempDir::new().unwrap();
    let metadata_path = dir.path().join("drivers.csv");
    fs::write(
        &metadata_path,
        "44,HAM,Lewis Hamilton,Mercedes\n1,VER,Max Verstappen,Red Bull\n",
    )
    .unwrap();

    let (registry, stats) = load_registry(&metadata_path).unwrap();

    assert_eq!(stats.drivers_loaded, 2);
    let hamilton = registry.get("HAM").unwrap();
    assert_eq!(hamilton.id, "44");
    assert_eq!(hamilton.name, "Lewis Hamilton");
    assert_eq!(hamilton.car, "Mercedes");
}

/// A missing lap log is reported as FileNotFound with the path as entered
#[test]
fn test_missing_files_are_file_not_found() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    match load_session(&missing).unwrap_err() {
        Error::FileNotFound { path } => assert!(path.ends_with("nope.txt")),
        other => panic!("expected FileNotFound, got {:?}", other),
    }

    assert!(matches!(
        load_registry(&missing).unwrap_err(),
        Error::FileNotFound { .. }
    ));
}

/// Format errors carry the file name and the 1-based line number
#[test]
fn test_format_errors_name_the_line() {
    let dir = TempDir::new().unwrap();

    let laps_path = dir.path().join("bad_laps.txt");
    fs::write(&laps_path, "Imola\nLEC95.001\nbroken\n").unwrap();
    match load_session(&laps_path).unwrap_err() {
        Error::LapFormat { file, line, .. } => {
            assert!(file.ends_with("bad_laps.txt"));
            assert_eq!(line, 3);
        }
        other => panic!("expected LapFormat, got {:?}", other),
    }

    let metadata_path = dir.path().join("bad_drivers.csv");
    fs::write(&metadata_path, "16,LEC,Charles Leclerc,Ferrari\njust-one-field\n").unwrap();
    match load_registry(&metadata_path).unwrap_err() {
        Error::MetadataFormat { file, line, .. } => {
            assert!(file.ends_with("bad_drivers.csv"));
            assert_eq!(line, 2);
        }
        other => panic!("expected MetadataFormat, got {:?}", other),
    }
}

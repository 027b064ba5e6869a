//! Shared test utilities and fixtures for driver registry tests

use crate::app::models::Driver;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub mod parser_tests;

/// Create a test driver record
pub fn create_test_driver(id: &str, code: &str, name: &str, car: &str) -> Driver {
    Driver::new(id, code, name, car).unwrap()
}

/// Write a driver metadata file with the given contents and return its path
pub fn write_metadata_file(dir: &TempDir, filename: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, contents).expect("failed to write test metadata file");
    path
}

/// Standard three-driver metadata file used across tests
pub const TEST_METADATA: &str = "\
44,HAM,Lewis Hamilton,Mercedes
1,VER,Max Verstappen,Red Bull
16,LEC,Charles Leclerc,Ferrari
";

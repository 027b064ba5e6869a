//! Shared test utilities and fixtures for session loader tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;


/// Write a lap log file with the given contents and return its path
pub fn write_lap_log(dir: &TempDir, filename: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, contents).expect("failed to write test lap log");
    path
}

/// Standard two-driver log used across tests
pub const MONZA_LOG: &str = "Monza\nHAM91.234\nVER90.876\nHAM92.001\n";

/// Assert a path does not exist without consuming it
pub fn assert_missing(path: &Path) {
    assert!(!path.exists(), "expected '{}' to be absent", path.display());
}

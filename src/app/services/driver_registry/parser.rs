//! Driver metadata file parsing
//!
//! Each line carries `id,code,name,car`. There is no header row. Lines
//! with extra comma-separated fields keep their first four; lines with
//! fewer than four fields are reported as parse failures, never skipped.

use super::{DriverRegistry, LoadStats};
use crate::app::models::Driver;
use crate::constants::METADATA_FIELD_COUNT;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Load a driver metadata file into a [`DriverRegistry`]
///
/// Fails with [`Error::FileNotFound`] if the path does not exist and with
/// [`Error::MetadataFormat`] on the first line that cannot supply four
/// fields. Duplicate codes follow last-record-wins semantics.
pub fn load_registry(path: &Path) -> Result<(DriverRegistry, LoadStats)> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read driver metadata '{}'", file_name), e))?;

    let mut registry = DriverRegistry::new();
    let mut stats = LoadStats::default();

    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        let driver = parse_driver_line(line, &file_name, line_no)?;
        stats.lines_parsed += 1;

        if registry.insert(driver) {
            stats.duplicates_replaced += 1;
            warn!(
                "Duplicate driver code on line {} of '{}': keeping the later record",
                line_no, file_name
            );
        }
    }

    stats.drivers_loaded = registry.driver_count();

    debug!(
        "Loaded driver metadata '{}': {} drivers from {} lines",
        file_name, stats.drivers_loaded, stats.lines_parsed
    );

    Ok((registry, stats))
}

/// Parse one metadata line into a [`Driver`]
///
/// The first four comma-separated fields are id, code, name and car;
/// fields are trimmed and any extra fields are ignored.
pub fn parse_driver_line(line: &str, file: &str, line_no: usize) -> Result<Driver> {
    let fields: Vec<&str> = line.split(',').map(|field| field.trim()).collect();

    if fields.len() < METADATA_FIELD_COUNT {
        return Err(Error::metadata_format(
            file,
            line_no,
            format!(
                "expected {} comma-separated fields (id,code,name,car), got {}",
                METADATA_FIELD_COUNT,
                fields.len()
            ),
        ));
    }

    Driver::new(fields[0], fields[1], fields[2], fields[3]).map_err(|e| {
        Error::metadata_format(file, line_no, format!("invalid driver record: {}", e))
    })
}

//! Lap-time log parsing
//!
//! The log format is a race-location line followed by one record per lap:
//! a fixed-width driver code immediately followed by the lap time in
//! seconds, with no separator (`HAM91.234`).

use super::{LapTimeSet, RaceSession};
use crate::constants::DRIVER_CODE_WIDTH;
use crate::{Error, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load and parse a lap-time log file into a [`RaceSession`]
///
/// Fails with [`Error::FileNotFound`] if the path does not exist, and with
/// [`Error::LapFormat`] on the first malformed record; format errors are
/// propagated, not recovered. Blank lines after the location line are
/// skipped.
pub fn load_session(path: &Path) -> Result<RaceSession> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read lap log '{}'", file_name), e))?;

    let mut lines = contents.lines();
    let location = lines
        .next()
        .ok_or_else(|| Error::lap_format(&file_name, 1, "missing race location line"))?
        .trim()
        .to_string();

    let mut laps = LapTimeSet::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        // Location is line 1, so lap records start at line 2.
        let line_no = index + 2;
        let (code, time) = parse_lap_line(line, &file_name, line_no)?;
        laps.record(code, time);
    }

    debug!(
        "Parsed lap log '{}': location '{}', {} drivers, {} laps",
        file_name,
        location,
        laps.driver_count(),
        laps.total_laps()
    );

    Ok(RaceSession { location, laps })
}

/// Split one lap record into its driver code and lap time
///
/// The leading `DRIVER_CODE_WIDTH` characters are the driver code; the
/// remainder of the line must parse as a finite lap time in seconds.
pub fn parse_lap_line<'a>(line: &'a str, file: &str, line_no: usize) -> Result<(&'a str, f64)> {
    let line = line.trim_end();

    if line.len() <= DRIVER_CODE_WIDTH || !line.is_char_boundary(DRIVER_CODE_WIDTH) {
        return Err(Error::lap_format(
            file,
            line_no,
            format!(
                "expected a {}-character driver code followed by a lap time, got '{}'",
                DRIVER_CODE_WIDTH, line
            ),
        ));
    }

    let (code, raw_time) = line.split_at(DRIVER_CODE_WIDTH);

    let time: f64 = raw_time.parse().map_err(|_| {
        Error::lap_format(
            file,
            line_no,
            format!("invalid lap time '{}' for driver '{}'", raw_time, code),
        )
    })?;

    if !time.is_finite() {
        return Err(Error::lap_format(
            file,
            line_no,
            format!("non-finite lap time '{}' for driver '{}'", raw_time, code),
        ));
    }

    Ok((code, time))
}

//! Head-to-head comparison and single-driver detail lookups

use crate::app::models::{DriverComparison, DriverDetail};
use crate::app::services::driver_registry::DriverRegistry;
use crate::app::services::session_loader::LapTimeSet;

/// Outcome of comparing two drivers' best laps
///
/// Missing lap data is an expected condition of the report, not a
/// failure, so it is modeled as an outcome rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    /// Both drivers have recorded laps; their best laps can be compared
    Compared(DriverComparison),

    /// At least one driver has no recorded laps; codes kept in call order
    MissingLapTimes { first: String, second: String },
}

/// Outcome of a single-driver detail lookup
#[derive(Debug, Clone, PartialEq)]
pub enum DriverLookup {
    /// Metadata and lap times both found
    Found(DriverDetail),

    /// No metadata record for the code
    UnknownDriver { code: String },

    /// Metadata exists but the lap log holds no laps for the code
    NoLapTimes { code: String },
}

/// Compare two drivers' best laps
///
/// If either driver has no recorded laps, the outcome names both codes
/// in call order and no further computation happens.
pub fn compare_drivers(first: &str, second: &str, laps: &LapTimeSet) -> ComparisonOutcome {
    let first_times = laps.times(first);
    let second_times = laps.times(second);

    match (first_times, second_times) {
        (Some(first_times), Some(second_times)) => {
            ComparisonOutcome::Compared(DriverComparison {
                first_code: first.to_string(),
                second_code: second.to_string(),
                first_best: best_lap(first_times),
                second_best: best_lap(second_times),
            })
        }
        _ => ComparisonOutcome::MissingLapTimes {
            first: first.to_string(),
            second: second.to_string(),
        },
    }
}

/// Look up one driver's metadata joined with their lap statistics
///
/// Metadata is checked first: an unknown code reports `UnknownDriver`
/// even when the lap log has times for it. A known driver without laps
/// reports `NoLapTimes`.
pub fn driver_detail(code: &str, registry: &DriverRegistry, laps: &LapTimeSet) -> DriverLookup {
    let Some(driver) = registry.get(code) else {
        return DriverLookup::UnknownDriver {
            code: code.to_string(),
        };
    };

    let Some(times) = laps.times(code) else {
        return DriverLookup::NoLapTimes {
            code: code.to_string(),
        };
    };

    DriverLookup::Found(DriverDetail {
        driver: driver.clone(),
        fastest: best_lap(times),
        average: times.iter().sum::<f64>() / times.len() as f64,
        laps: times.len(),
    })
}

/// Minimum of a non-empty lap sequence
fn best_lap(times: &[f64]) -> f64 {
    times.iter().copied().fold(f64::INFINITY, f64::min)
}

//! Shared test fixtures for analysis tests

use crate::app::services::session_loader::LapTimeSet;

pub mod stats_tests;

/// Build a lap-time set from (code, laps) slices in the given order
pub fn lap_set(entries: &[(&str, &[f64])]) -> LapTimeSet {
    let mut set = LapTimeSet::new();
    for (code, laps) in entries {
        for &time in *laps {
            set.record(code, time);
        }
    }
    set
}

/// The Monza example session: HAM appears first, VER has the best lap
pub fn monza_set() -> LapTimeSet {
    lap_set(&[("HAM", &[91.234, 92.001]), ("VER", &[90.876])])
}

//! Descriptive statistics over the lap-time mapping

use crate::app::models::RankingEntry;
use crate::app::services::session_loader::LapTimeSet;
use crate::{Error, Result};
use std::collections::HashMap;

/// Find the driver with the single fastest lap of the session
///
/// Scans per-driver minima with a strict `<` comparison over
/// first-appearance order, so the first driver in the log wins ties.
/// Fails with [`Error::EmptySession`] when the set holds no drivers.
pub fn fastest_driver(laps: &LapTimeSet) -> Result<(String, f64)> {
    let mut best: Option<(&str, f64)> = None;

    for (code, times) in laps.iter() {
        let driver_best = min_time(times);
        match best {
            Some((_, current)) if driver_best >= current => {}
            _ => best = Some((code, driver_best)),
        }
    }

    best.map(|(code, time)| (code.to_string(), time))
        .ok_or_else(|| Error::empty_session("no drivers recorded, cannot find the fastest"))
}

/// Arithmetic mean lap time per driver
pub fn average_lap_times(laps: &LapTimeSet) -> HashMap<String, f64> {
    laps.iter()
        .map(|(code, times)| (code.to_string(), mean(times)))
        .collect()
}

/// Arithmetic mean over the concatenation of all drivers' lap times
///
/// Order-independent. Fails with [`Error::EmptySession`] when no lap
/// times exist at all.
pub fn overall_average(laps: &LapTimeSet) -> Result<f64> {
    let total_laps = laps.total_laps();
    if total_laps == 0 {
        return Err(Error::empty_session(
            "no lap times recorded, cannot compute an overall average",
        ));
    }

    let sum: f64 = laps.iter().flat_map(|(_, times)| times).sum();
    Ok(sum / total_laps as f64)
}

/// Rank all drivers by fastest lap, descending
///
/// The ordering is deliberately counter-intuitive and part of the report
/// contract: the driver whose best lap was *least* good appears first,
/// and the session's fastest driver appears last. Callers wanting a
/// best-first view must reverse the returned sequence. The sort is
/// stable, so drivers with equal fastest laps keep first-appearance
/// order.
pub fn rank_drivers(laps: &LapTimeSet) -> Vec<RankingEntry> {
    let mut rankings: Vec<RankingEntry> = laps
        .iter()
        .map(|(code, times)| RankingEntry {
            code: code.to_string(),
            fastest: min_time(times),
            average: mean(times),
        })
        .collect();

    rankings.sort_by(|a, b| b.fastest.total_cmp(&a.fastest));
    rankings
}

/// Minimum of a non-empty lap sequence
fn min_time(times: &[f64]) -> f64 {
    times.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Mean of a non-empty lap sequence
fn mean(times: &[f64]) -> f64 {
    times.iter().sum::<f64>() / times.len() as f64
}

//! Session loader service for lap-time log files
//!
//! This module owns the in-memory lap-time mapping and the parser that
//! builds it from a flat log file: one race-location line followed by
//! code-prefixed lap records.

use std::collections::HashMap;

pub mod parser;

#[cfg(test)]
pub mod tests;

pub use parser::load_session;

/// Mapping from driver code to that driver's recorded lap times
///
/// Drivers iterate in the order they first appeared in the log file, and
/// each driver's lap times keep file order. A code present in the set
/// always carries at least one lap time; `record` is the only way to
/// insert a key, and it always pushes a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LapTimeSet {
    /// Lap times keyed by driver code
    times: HashMap<String, Vec<f64>>,

    /// Driver codes in first-appearance order
    order: Vec<String>,
}

impl LapTimeSet {
    /// Create an empty lap-time set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one lap time for a driver, registering the code on first sight
    pub fn record(&mut self, code: &str, time: f64) {
        match self.times.get_mut(code) {
            Some(laps) => laps.push(time),
            None => {
                self.order.push(code.to_string());
                self.times.insert(code.to_string(), vec![time]);
            }
        }
    }

    /// Get a driver's lap times in file order, if the driver appears in the log
    pub fn times(&self, code: &str) -> Option<&[f64]> {
        self.times.get(code).map(|laps| laps.as_slice())
    }

    /// Check whether a driver has any recorded laps
    pub fn contains(&self, code: &str) -> bool {
        self.times.contains_key(code)
    }

    /// Number of distinct drivers in the set
    pub fn driver_count(&self) -> usize {
        self.order.len()
    }

    /// Check whether the set holds no drivers at all
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of laps recorded across all drivers
    pub fn total_laps(&self) -> usize {
        self.times.values().map(|laps| laps.len()).sum()
    }

    /// Iterate over (code, lap times) pairs in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.order.iter().map(|code| {
            let laps = self
                .times
                .get(code)
                .expect("ordered code must exist in the map");
            (code.as_str(), laps.as_slice())
        })
    }

    /// Driver codes in first-appearance order
    pub fn driver_codes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|code| code.as_str())
    }
}

/// A fully parsed lap-time log: the race location and every recorded lap
///
/// Built once per run by [`load_session`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceSession {
    /// Free-text race location from the first line of the log
    pub location: String,

    /// All recorded lap times, grouped by driver
    pub laps: LapTimeSet,
}

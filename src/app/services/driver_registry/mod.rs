//! Driver registry service for code-keyed driver metadata lookups
//!
//! This module loads driver metadata from a comma-separated file and
//! indexes it by driver code for O(1) access. The registry is loaded
//! independently of the lap-time log; the two are correlated only at
//! display time, so mismatched code sets are tolerated.

use crate::app::models::Driver;
use std::collections::HashMap;

pub mod parser;

#[cfg(test)]
pub mod tests;

pub use parser::load_registry;

/// Driver metadata registry providing O(1) lookups by driver code
///
/// Duplicate codes in the source file follow last-record-wins semantics:
/// the later record replaces the earlier one but keeps the earlier
/// record's position in display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverRegistry {
    /// Driver metadata indexed by code
    drivers: HashMap<String, Driver>,

    /// Driver codes in first-appearance order, for display
    order: Vec<String>,
}

/// Statistics collected while loading a driver metadata file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of lines parsed from the file
    pub lines_parsed: usize,

    /// Number of distinct drivers in the resulting registry
    pub drivers_loaded: usize,

    /// Number of records that replaced an earlier record with the same code
    pub duplicates_replaced: usize,
}

impl DriverRegistry {
    /// Create a new empty driver registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a driver record, replacing any earlier record with the same code
    ///
    /// Returns `true` if an earlier record was replaced.
    pub fn insert(&mut self, driver: Driver) -> bool {
        let code = driver.code.clone();
        let replaced = self.drivers.insert(code.clone(), driver).is_some();
        if !replaced {
            self.order.push(code);
        }
        replaced
    }

    /// Get driver metadata by code (O(1) lookup)
    pub fn get(&self, code: &str) -> Option<&Driver> {
        self.drivers.get(code)
    }

    /// Check if a driver code exists in the registry
    pub fn contains(&self, code: &str) -> bool {
        self.drivers.contains_key(code)
    }

    /// Number of drivers in the registry
    pub fn driver_count(&self) -> usize {
        self.order.len()
    }

    /// Check whether the registry holds no drivers
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over drivers in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &Driver> {
        self.order.iter().map(|code| {
            self.drivers
                .get(code)
                .expect("ordered code must exist in the map")
        })
    }
}

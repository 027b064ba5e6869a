//! Data models for lap analysis
//!
//! This module contains the core data structures for representing driver
//! metadata and the derived statistics reported by the analysis service.

use crate::{Error, Result};

// =============================================================================
// Driver Metadata Structure
// =============================================================================

/// A single driver's metadata record
///
/// One record per driver, keyed in the registry by `code`. The registry is
/// loaded independently of the lap-time log and correlated with it only at
/// display time, so a code may exist in either mapping without the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    /// Race number or other identifier (e.g. "44")
    pub id: String,

    /// Short fixed-length driver code used as the join key (e.g. "HAM")
    pub code: String,

    /// Full driver name (e.g. "Lewis Hamilton")
    pub name: String,

    /// Car or team name (e.g. "Mercedes")
    pub car: String,
}

impl Driver {
    /// Create a new Driver with validation
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        car: impl Into<String>,
    ) -> Result<Self> {
        let driver = Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            car: car.into(),
        };

        driver.validate()?;
        Ok(driver)
    }

    /// Validate that the identifying fields are present
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(Error::configuration(
                "Driver code cannot be empty".to_string(),
            ));
        }

        if self.id.trim().is_empty() {
            return Err(Error::configuration(format!(
                "Driver id cannot be empty for code '{}'",
                self.code
            )));
        }

        Ok(())
    }

    /// One-line summary used by the driver table's details column
    pub fn summary(&self) -> String {
        format!("ID: {}, Name: {}, CAR: {}", self.id, self.name, self.car)
    }
}

// =============================================================================
// Derived Statistics Structures
// =============================================================================

/// One row of the driver ranking: code plus best and mean lap time
///
/// Derived fresh from the lap-time set on each request, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingEntry {
    /// Driver code
    pub code: String,

    /// Minimum lap time recorded for the driver, in seconds
    pub fastest: f64,

    /// Arithmetic mean of the driver's lap times, in seconds
    pub average: f64,
}

/// Head-to-head comparison of two drivers' best laps
///
/// Codes are kept in call order for the report text; the gap itself is
/// order-independent.
#[derive(Debug, Clone, PartialEq)]
pub struct DriverComparison {
    /// First driver code, as passed by the caller
    pub first_code: String,

    /// Second driver code, as passed by the caller
    pub second_code: String,

    /// First driver's best lap, in seconds
    pub first_best: f64,

    /// Second driver's best lap, in seconds
    pub second_best: f64,
}

impl DriverComparison {
    /// Absolute gap between the two best laps, in seconds
    pub fn delta(&self) -> f64 {
        (self.first_best - self.second_best).abs()
    }
}

/// A driver's metadata joined with their lap statistics
#[derive(Debug, Clone, PartialEq)]
pub struct DriverDetail {
    /// The driver's metadata record
    pub driver: Driver,

    /// Minimum lap time recorded, in seconds
    pub fastest: f64,

    /// Arithmetic mean lap time, in seconds
    pub average: f64,

    /// Number of laps completed
    pub laps: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_new_valid() {
        let driver = Driver::new("44", "HAM", "Lewis Hamilton", "Mercedes").unwrap();
        assert_eq!(driver.id, "44");
        assert_eq!(driver.code, "HAM");
        assert_eq!(driver.name, "Lewis Hamilton");
        assert_eq!(driver.car, "Mercedes");
    }

    #[test]
    fn test_driver_new_rejects_empty_code() {
        let result = Driver::new("44", "  ", "Lewis Hamilton", "Mercedes");
        assert!(result.is_err());
    }

    #[test]
    fn test_driver_new_rejects_empty_id() {
        let result = Driver::new("", "HAM", "Lewis Hamilton", "Mercedes");
        assert!(result.is_err());
    }

    #[test]
    fn test_driver_summary_format() {
        let driver = Driver::new("1", "VER", "Max Verstappen", "Red Bull").unwrap();
        assert_eq!(driver.summary(), "ID: 1, Name: Max Verstappen, CAR: Red Bull");
    }

    #[test]
    fn test_comparison_delta_is_order_independent() {
        let forward = DriverComparison {
            first_code: "HAM".to_string(),
            second_code: "VER".to_string(),
            first_best: 91.234,
            second_best: 90.876,
        };
        let reverse = DriverComparison {
            first_code: "VER".to_string(),
            second_code: "HAM".to_string(),
            first_best: 90.876,
            second_best: 91.234,
        };

        assert!((forward.delta() - reverse.delta()).abs() < 1e-9);
        assert!((forward.delta() - 0.358).abs() < 1e-9);
    }
}

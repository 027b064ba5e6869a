//! Statistics engine over a session's lap-time set
//!
//! Every operation here is a pure, idempotent function of its inputs:
//! nothing mutates the lap-time set or the driver registry, and derived
//! values are recomputed on each request rather than cached.

pub mod comparison;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use comparison::{ComparisonOutcome, DriverLookup, compare_drivers, driver_detail};
pub use stats::{average_lap_times, fastest_driver, overall_average, rank_drivers};

//! Application constants for the lap analyzer
//!
//! This module contains the file format constants, display defaults,
//! and chart settings used throughout the lap analyzer.

// =============================================================================
// File Format Constants
// =============================================================================

/// Width of the fixed-length driver code prefix on each lap record line
pub const DRIVER_CODE_WIDTH: usize = 3;

/// Number of comma-separated fields carried by a driver metadata line
/// (id, code, name, car)
pub const METADATA_FIELD_COUNT: usize = 4;

// =============================================================================
// Chart Settings
// =============================================================================

/// Output file name for the fastest-lap share pie chart
pub const PIE_CHART_FILENAME: &str = "fastest_lap_share.png";

/// Output file name for the laps-completed bar chart
pub const BAR_CHART_FILENAME: &str = "laps_completed.png";

/// Pixel dimensions of the pie chart bitmap
pub const PIE_CHART_SIZE: (u32, u32) = (800, 800);

/// Pixel dimensions of the bar chart bitmap
pub const BAR_CHART_SIZE: (u32, u32) = (1000, 600);

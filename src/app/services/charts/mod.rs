//! Chart rendering for session statistics
//!
//! Renders the two session charts as PNG artifacts: a pie chart of each
//! driver's fastest lap as a share of the summed fastest laps, and a bar
//! chart of laps completed per driver. Callers receive the written path.

use plotters::style::RGBColor;

pub mod bar;
pub mod pie;

#[cfg(test)]
pub mod tests;

pub use bar::render_laps_completed_bar;
pub use pie::{fastest_lap_shares, render_fastest_lap_pie};

/// Slice and bar fill colors, cycled per driver
pub(crate) const SERIES_COLORS: &[RGBColor] = &[
    RGBColor(141, 211, 199),
    RGBColor(255, 255, 179),
    RGBColor(190, 186, 218),
    RGBColor(251, 128, 114),
    RGBColor(128, 177, 211),
    RGBColor(253, 180, 98),
    RGBColor(179, 222, 105),
    RGBColor(252, 205, 229),
    RGBColor(217, 217, 217),
    RGBColor(188, 128, 189),
];

/// Pick the color for the n-th series, wrapping past the palette end
pub(crate) fn series_color(index: usize) -> RGBColor {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

//! Fastest-lap share pie chart

use super::series_color;
use crate::app::services::session_loader::LapTimeSet;
use crate::constants::{PIE_CHART_FILENAME, PIE_CHART_SIZE};
use crate::{Error, Result};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Each driver's fastest lap as a percentage of the summed fastest laps
///
/// A proportional visualization only: the percentages carry no physical
/// meaning beyond their relative sizes. Drivers keep first-appearance
/// order.
pub fn fastest_lap_shares(laps: &LapTimeSet) -> Vec<(String, f64)> {
    let fastest: Vec<(String, f64)> = laps
        .iter()
        .map(|(code, times)| {
            let best = times.iter().copied().fold(f64::INFINITY, f64::min);
            (code.to_string(), best)
        })
        .collect();

    let total: f64 = fastest.iter().map(|(_, best)| *best).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    fastest
        .into_iter()
        .map(|(code, best)| (code, best / total * 100.0))
        .collect()
}

/// Render the fastest-lap share pie chart into `chart_dir`
///
/// Returns the path of the written PNG. Fails with
/// [`Error::EmptySession`] when the set holds no drivers.
pub fn render_fastest_lap_pie(laps: &LapTimeSet, chart_dir: &Path) -> Result<PathBuf> {
    if laps.is_empty() {
        return Err(Error::empty_session("no lap data to chart"));
    }

    let shares = fastest_lap_shares(laps);
    let labels: Vec<String> = shares.iter().map(|(code, _)| code.clone()).collect();
    let sizes: Vec<f64> = shares.iter().map(|(_, share)| *share).collect();
    let colors: Vec<RGBColor> = (0..shares.len()).map(series_color).collect();

    let output = chart_dir.join(PIE_CHART_FILENAME);

    // Scope the backend so its borrow of the output path ends before the
    // path is returned.
    {
        let root = BitMapBackend::new(&output, PIE_CHART_SIZE).into_drawing_area();

        root.fill(&WHITE).map_err(|e| {
            Error::chart_render(format!("failed to fill pie chart background: {}", e))
        })?;
        root.titled(
            "Distribution of Fastest Lap Times by Driver",
            TextStyle::from(("sans-serif", 30).into_font()).color(&BLACK),
        )
        .map_err(|e| Error::chart_render(format!("failed to draw pie chart title: {}", e)))?;

        let (width, height) = root.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(90.0);
        pie.label_style(("sans-serif", 24).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 18).into_font().color(&BLACK));

        root.draw(&pie)
            .map_err(|e| Error::chart_render(format!("failed to draw pie chart: {}", e)))?;
        root.present()
            .map_err(|e| Error::chart_render(format!("failed to write pie chart: {}", e)))?;
    }

    info!("Rendered fastest-lap pie chart: {}", output.display());
    Ok(output)
}

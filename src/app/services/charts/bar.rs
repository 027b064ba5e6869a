//! Laps-completed bar chart

use super::series_color;
use crate::app::services::session_loader::LapTimeSet;
use crate::constants::{BAR_CHART_FILENAME, BAR_CHART_SIZE};
use crate::{Error, Result};
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the laps-completed bar chart into `chart_dir`
///
/// One bar per driver, in first-appearance order, showing the number of
/// laps recorded. Returns the path of the written PNG. Fails with
/// [`Error::EmptySession`] when the set holds no drivers.
pub fn render_laps_completed_bar(laps: &LapTimeSet, chart_dir: &Path) -> Result<PathBuf> {
    if laps.is_empty() {
        return Err(Error::empty_session("no lap data to chart"));
    }

    let codes: Vec<String> = laps.driver_codes().map(|code| code.to_string()).collect();
    let counts: Vec<u32> = laps.iter().map(|(_, times)| times.len() as u32).collect();
    let max_laps = counts.iter().copied().max().unwrap_or(1);

    let output = chart_dir.join(BAR_CHART_FILENAME);

    // Scope the backend so its borrow of the output path ends before the
    // path is returned.
    {
        let root = BitMapBackend::new(&output, BAR_CHART_SIZE).into_drawing_area();

        root.fill(&WHITE).map_err(|e| {
            Error::chart_render(format!("failed to fill bar chart background: {}", e))
        })?;

        let mut chart = ChartBuilder::on(&root)
            .caption(
                "Number of Laps Completed by Each Driver",
                ("sans-serif", 28),
            )
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 60)
            .set_label_area_size(LabelAreaPosition::Bottom, 50)
            .build_cartesian_2d(
                (0u32..codes.len() as u32).into_segmented(),
                0u32..max_laps + 1,
            )
            .map_err(|e| Error::chart_render(format!("failed to build bar chart axes: {}", e)))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Drivers")
            .y_desc("Number of Laps Completed")
            .axis_desc_style(("sans-serif", 18))
            .x_label_formatter(&|coord| match coord {
                SegmentValue::CenterOf(index) => {
                    codes.get(*index as usize).cloned().unwrap_or_default()
                }
                _ => String::new(),
            })
            .draw()
            .map_err(|e| Error::chart_render(format!("failed to draw bar chart mesh: {}", e)))?;

        chart
            .draw_series(counts.iter().enumerate().map(|(index, &laps_completed)| {
                let x0 = SegmentValue::Exact(index as u32);
                let x1 = SegmentValue::Exact(index as u32 + 1);
                Rectangle::new([(x0, 0), (x1, laps_completed)], series_color(index).filled())
            }))
            .map_err(|e| {
                Error::chart_render(format!("failed to draw bar chart series: {}", e))
            })?;

        root.present()
            .map_err(|e| Error::chart_render(format!("failed to write bar chart: {}", e)))?;
    }

    info!("Rendered laps-completed bar chart: {}", output.display());
    Ok(output)
}

//! Shared components for CLI commands
//!
//! This module contains the logging setup, the run statistics struct, and
//! the table renderers used by both the analyze and drivers commands.

use crate::Result;
use crate::app::models::RankingEntry;
use crate::app::services::driver_registry::DriverRegistry;
use tracing::debug;

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    /// Number of drivers with recorded laps
    pub drivers_analyzed: usize,
    /// Total number of laps recorded
    pub laps_recorded: usize,
    /// Number of metadata records loaded
    pub metadata_loaded: usize,
    /// Number of chart files rendered
    pub charts_rendered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Set up structured logging writing to stderr
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lap_analyzer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Render the three-column ranking table with three-decimal times
pub fn render_ranking_table(rankings: &[RankingEntry]) -> String {
    let mut table = String::new();
    table.push_str("Driver | Fastest Time | Average Time\n");
    table.push_str("-------|--------------|-------------\n");

    for entry in rankings {
        table.push_str(&format!(
            "{:6} | {:>12.3} | {:>12.3}\n",
            entry.code, entry.fastest, entry.average
        ));
    }

    table
}

/// Render the two-column driver table (code and metadata summary)
pub fn render_driver_table(registry: &DriverRegistry) -> String {
    let mut table = String::new();
    table.push_str("Driver Code | Details\n");
    table.push_str("------------|--------------------------------------------------\n");

    for driver in registry.iter() {
        table.push_str(&format!("{:11} | {}\n", driver.code, driver.summary()));
    }

    table
}

//! Drivers command implementation
//!
//! Loads a driver metadata file standalone and reports its contents plus
//! load statistics.

use super::shared::{AnalysisStats, render_driver_table, setup_logging};
use crate::Result;
use crate::app::services::driver_registry::load_registry;
use crate::cli::args::DriversArgs;
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Drivers command runner
pub fn run_drivers(args: DriversArgs) -> Result<AnalysisStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting driver metadata report");
    debug!("Drivers arguments: {:?}", args);

    args.validate()?;

    let (registry, load_stats) = load_registry(&args.file)?;

    info!(
        "Driver registry loaded: {} drivers from {} lines",
        load_stats.drivers_loaded, load_stats.lines_parsed
    );

    println!("{}", "Driver Details:".bold());
    println!("{}", render_driver_table(&registry));

    println!(
        "Loaded {} drivers from {}",
        load_stats.drivers_loaded.to_string().bright_white().bold(),
        args.file.display()
    );
    if load_stats.duplicates_replaced > 0 {
        println!(
            "{} duplicate driver codes were replaced by later records",
            load_stats.duplicates_replaced.to_string().bright_yellow().bold()
        );
    }

    let stats = AnalysisStats {
        metadata_loaded: load_stats.drivers_loaded,
        processing_time: start_time.elapsed(),
        ..Default::default()
    };

    info!(
        "Driver report completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

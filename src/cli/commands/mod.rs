//! Command implementations for the lap analyzer CLI
//!
//! This module contains the main command execution logic. Each command is
//! implemented in its own module:
//! - `analyze`: the session report flow (statistics, charts, detail, comparison)
//! - `drivers`: standalone driver metadata report

pub mod analyze;
pub mod drivers;
pub mod shared;

// Re-export the main types for convenience
pub use shared::AnalysisStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the lap analyzer
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<AnalysisStats> {
    match args.get_command() {
        Commands::Analyze(analyze_args) => analyze::run_analyze(analyze_args),
        Commands::Drivers(drivers_args) => drivers::run_drivers(drivers_args),
    }
}

//! Command-line argument definitions for the lap analyzer
//!
//! This module defines the complete CLI interface using the clap derive
//! API: the analyze command (main report flow) and the drivers command
//! (standalone metadata report).

use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the lap analyzer
///
/// Analyzes per-driver lap time logs from a single race session:
/// fastest lap, averages, rankings, head-to-head comparisons and charts.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "lap-analyzer",
    version,
    about = "Analyze per-driver lap time logs: fastest laps, rankings, comparisons and charts",
    long_about = "Reads a lap-time log (race location line followed by code-prefixed lap \
                  records) and reports fastest driver, overall average, and a full driver \
                  ranking. Optional stages add a fastest-lap share pie chart, a laps-completed \
                  bar chart, a driver metadata table with per-driver detail, and a head-to-head \
                  comparison of two drivers."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the lap analyzer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Analyze a lap-time log and report session statistics (main command)
    Analyze(AnalyzeArgs),
    /// Load a driver metadata file and report its contents
    Drivers(DriversArgs),
}

/// Arguments for the analyze command (main report flow)
#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Path to the lap-time log file
    ///
    /// First line is the race location; each further line is a 3-character
    /// driver code immediately followed by a lap time in seconds, e.g.
    /// HAM91.234. Prompted for interactively when omitted.
    #[arg(value_name = "LAPS_FILE", help = "Path to the lap-time log file")]
    pub laps_file: Option<PathBuf>,

    /// Driver metadata file to display alongside the analysis
    ///
    /// Comma-separated lines of id,code,name,car with no header row.
    #[arg(
        short = 'd',
        long = "drivers",
        value_name = "FILE",
        help = "Driver metadata file to display alongside the analysis"
    )]
    pub drivers_file: Option<PathBuf>,

    /// Render the fastest-lap share pie chart
    #[arg(long = "pie-chart", help = "Render the fastest-lap share pie chart")]
    pub pie_chart: bool,

    /// Render the laps-completed bar chart
    #[arg(long = "bar-chart", help = "Render the laps-completed bar chart")]
    pub bar_chart: bool,

    /// Show combined metadata and lap detail for one driver code
    ///
    /// Requires --drivers for the metadata side of the lookup.
    #[arg(
        long = "driver",
        value_name = "CODE",
        help = "Show combined detail for one driver code (requires --drivers)"
    )]
    pub detail: Option<String>,

    /// Compare two drivers' best laps
    ///
    /// Takes exactly two comma-separated driver codes, e.g. HAM,VER.
    #[arg(
        long = "compare",
        value_name = "CODES",
        help = "Compare two drivers' best laps (two comma-separated codes)"
    )]
    pub compare: Option<CodePair>,

    /// Directory for rendered chart files
    ///
    /// Defaults to the current directory. Must already exist.
    #[arg(
        long = "chart-dir",
        value_name = "DIR",
        help = "Directory for rendered chart files (default: current directory)"
    )]
    pub chart_dir: Option<PathBuf>,

    /// Collect the optional report stages through y/n prompts
    ///
    /// Walks the classic interactive flow instead of reading stage flags:
    /// charts, driver details, and comparison are each offered in turn.
    /// Only an answer of exactly "y" (after trimming, case-insensitive)
    /// selects a stage.
    #[arg(
        short = 'i',
        long = "interactive",
        help = "Collect the optional report stages through y/n prompts"
    )]
    pub interactive: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the drivers command (standalone metadata report)
#[derive(Debug, Clone, Parser)]
pub struct DriversArgs {
    /// Path to the driver metadata file
    #[arg(value_name = "FILE", help = "Path to the driver metadata file")]
    pub file: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Wrapper for parsing a comma-separated pair of driver codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePair {
    pub first: String,
    pub second: String,
}

impl FromStr for CodePair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let codes: Vec<String> = s
            .split(',')
            .map(|code| code.trim().to_string())
            .filter(|code| !code.is_empty())
            .collect();

        if codes.len() != 2 {
            return Err(Error::configuration(format!(
                "Expected exactly two comma-separated driver codes, got '{}'",
                s
            )));
        }

        let mut codes = codes.into_iter();
        Ok(CodePair {
            first: codes.next().expect("length checked above"),
            second: codes.next().expect("length checked above"),
        })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl AnalyzeArgs {
    /// Validate the analyze command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Interactive mode collects the optional stages itself
        if self.interactive
            && (self.pie_chart
                || self.bar_chart
                || self.drivers_file.is_some()
                || self.detail.is_some()
                || self.compare.is_some())
        {
            return Err(Error::configuration(
                "--interactive collects the optional stages through prompts and cannot be \
                 combined with --pie-chart, --bar-chart, --drivers, --driver or --compare"
                    .to_string(),
            ));
        }

        // The detail lookup needs metadata to join against
        if self.detail.is_some() && self.drivers_file.is_none() {
            return Err(Error::configuration(
                "--driver requires --drivers to supply the metadata file".to_string(),
            ));
        }

        // Chart directory must exist when explicitly provided
        if let Some(chart_dir) = &self.chart_dir {
            if !chart_dir.exists() {
                return Err(Error::configuration(format!(
                    "Chart directory does not exist: {}",
                    chart_dir.display()
                )));
            }

            if !chart_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Chart directory is not a directory: {}",
                    chart_dir.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl DriversArgs {
    /// Validate the drivers command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if self.file.is_dir() {
            return Err(Error::configuration(format!(
                "Metadata path is a directory, not a file: {}",
                self.file.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

//! Analyze command implementation
//!
//! Loads a lap-time log, reports the session statistics, and walks the
//! optional report stages. Prompt handling is kept apart from the pure
//! computation: every optional stage lives in a [`ReportPlan`] collected
//! up front, either from CLI flags or from y/n prompts in interactive
//! mode, and the report itself then runs as one linear pass.

use super::shared::{AnalysisStats, render_driver_table, render_ranking_table, setup_logging};
use crate::app::services::analysis::{
    ComparisonOutcome, DriverLookup, compare_drivers, driver_detail, fastest_driver,
    overall_average, rank_drivers,
};
use crate::app::services::charts::{render_fastest_lap_pie, render_laps_completed_bar};
use crate::app::services::driver_registry::{DriverRegistry, load_registry};
use crate::app::services::session_loader::{RaceSession, load_session};
use crate::Result;
use crate::cli::args::AnalyzeArgs;
use crate::cli::input;
use colored::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// The optional report stages, collected before any output is produced
///
/// Keeping the choices in one struct separates prompt handling from the
/// computation below: by the time the report runs, every branch decision
/// has already been made.
#[derive(Debug, Clone)]
pub struct ReportPlan {
    /// Render the fastest-lap share pie chart
    pub show_pie_chart: bool,

    /// Render the laps-completed bar chart
    pub show_bar_chart: bool,

    /// Driver metadata file to load and display
    pub drivers_file: Option<PathBuf>,

    /// Driver code to show combined detail for (needs `drivers_file`)
    pub detail_code: Option<String>,

    /// Pair of driver codes to compare head-to-head
    pub compare_codes: Option<(String, String)>,

    /// Directory receiving rendered chart files
    pub chart_dir: PathBuf,
}

impl ReportPlan {
    /// Build the plan straight from CLI flags
    pub fn from_args(args: &AnalyzeArgs) -> Self {
        Self {
            show_pie_chart: args.pie_chart,
            show_bar_chart: args.bar_chart,
            drivers_file: args.drivers_file.clone(),
            detail_code: args.detail.clone(),
            compare_codes: args
                .compare
                .as_ref()
                .map(|pair| (pair.first.clone(), pair.second.clone())),
            chart_dir: args
                .chart_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Build the plan by walking the classic y/n prompt sequence
    pub fn from_prompts(chart_dir: Option<PathBuf>) -> Result<Self> {
        let show_pie_chart =
            input::prompt_branch("Do you want to see the chart of fastest lap times?")?;
        let show_bar_chart =
            input::prompt_branch("Do you want to see the graph of laps completed by drivers?")?;

        let mut drivers_file = None;
        let mut detail_code = None;
        if input::prompt_branch("Do you want to see driver details?")? {
            drivers_file = Some(PathBuf::from(input::prompt_line(
                "Enter the filename for driver details",
            )?));

            if input::prompt_branch("Do you want to see details for a specific driver?")? {
                detail_code = Some(input::prompt_line("Enter the driver code")?);
            }
        }

        let mut compare_codes = None;
        if input::prompt_branch("Do you want to compare two drivers?")? {
            let first = input::prompt_line("Enter first driver code")?;
            let second = input::prompt_line("Enter second driver code")?;
            compare_codes = Some((first, second));
        }

        Ok(Self {
            show_pie_chart,
            show_bar_chart,
            drivers_file,
            detail_code,
            compare_codes,
            chart_dir: chart_dir.unwrap_or_else(|| PathBuf::from(".")),
        })
    }
}

/// Analyze command runner
pub fn run_analyze(args: AnalyzeArgs) -> Result<AnalysisStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting lap log analysis");
    debug!("Analyze arguments: {:?}", args);

    args.validate()?;

    // The log file comes from the arguments or, failing that, a prompt.
    let laps_path = match &args.laps_file {
        Some(path) => path.clone(),
        None => PathBuf::from(input::prompt_line("Enter the filename for lap times")?),
    };

    let session = load_session(&laps_path)?;
    info!(
        "Loaded session at '{}': {} drivers, {} laps",
        session.location,
        session.laps.driver_count(),
        session.laps.total_laps()
    );

    let plan = if args.interactive {
        ReportPlan::from_prompts(args.chart_dir.clone())?
    } else {
        ReportPlan::from_args(&args)
    };
    debug!("Report plan: {:?}", plan);

    let mut stats = AnalysisStats {
        drivers_analyzed: session.laps.driver_count(),
        laps_recorded: session.laps.total_laps(),
        ..Default::default()
    };

    run_report(&session, &plan, &mut stats)?;

    stats.processing_time = start_time.elapsed();
    info!(
        "Analysis completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Run the linear report over an already-loaded session
fn run_report(session: &RaceSession, plan: &ReportPlan, stats: &mut AnalysisStats) -> Result<()> {
    println!("Race Location: {}\n", session.location.bright_white().bold());

    let (fastest_code, fastest_time) = fastest_driver(&session.laps)?;
    println!(
        "Fastest Driver: {} with a time of {:.3} seconds\n",
        fastest_code.bright_green().bold(),
        fastest_time
    );

    let overall = overall_average(&session.laps)?;
    println!("Overall Average Lap Time: {:.3} seconds\n", overall);

    // Descending by fastest lap: the session's fastest driver is the
    // last row, not the first.
    let rankings = rank_drivers(&session.laps);
    println!("{}", "Driver Rankings (slowest best lap first):".bold());
    println!("{}", render_ranking_table(&rankings));

    if plan.show_pie_chart {
        let path = render_fastest_lap_pie(&session.laps, &plan.chart_dir)?;
        println!("Pie chart written to {}\n", path.display());
        stats.charts_rendered += 1;
    }

    if plan.show_bar_chart {
        let path = render_laps_completed_bar(&session.laps, &plan.chart_dir)?;
        println!("Bar chart written to {}\n", path.display());
        stats.charts_rendered += 1;
    }

    if let Some(drivers_file) = &plan.drivers_file {
        let (registry, load_stats) = load_registry(drivers_file)?;
        stats.metadata_loaded = load_stats.drivers_loaded;

        println!("{}", "Driver Details:".bold());
        println!("{}", render_driver_table(&registry));

        if let Some(code) = &plan.detail_code {
            report_driver_detail(code, &registry, session);
        }
    }

    if let Some((first, second)) = &plan.compare_codes {
        report_comparison(first, second, session);
    }

    Ok(())
}

/// Print one driver's combined metadata and lap statistics
fn report_driver_detail(code: &str, registry: &DriverRegistry, session: &RaceSession) {
    match driver_detail(code, registry, &session.laps) {
        DriverLookup::Found(detail) => {
            println!("Details for Driver {}:", detail.driver.code.bold());
            println!("ID: {}", detail.driver.id);
            println!("Name: {}", detail.driver.name);
            println!("Car: {}", detail.driver.car);
            println!("Fastest Lap Time: {:.3}", detail.fastest);
            println!("Average Lap Time: {:.3}\n", detail.average);
        }
        DriverLookup::UnknownDriver { code } => {
            println!("Driver with code {} not found in details.\n", code);
        }
        DriverLookup::NoLapTimes { code } => {
            println!("Driver with code {} has no lap times recorded.\n", code);
        }
    }
}

/// Print the head-to-head comparison of two drivers' best laps
fn report_comparison(first: &str, second: &str, session: &RaceSession) {
    match compare_drivers(first, second, &session.laps) {
        ComparisonOutcome::Compared(comparison) => {
            println!(
                "Comparison between {} and {}:",
                comparison.first_code.bold(),
                comparison.second_code.bold()
            );
            println!("{} Best Lap: {:.3}", comparison.first_code, comparison.first_best);
            println!(
                "{} Best Lap: {:.3}",
                comparison.second_code, comparison.second_best
            );
            println!("Time Difference: {:.3} seconds\n", comparison.delta());
        }
        ComparisonOutcome::MissingLapTimes { first, second } => {
            println!(
                "One or both drivers {} or {} have no lap times.\n",
                first, second
            );
        }
    }
}

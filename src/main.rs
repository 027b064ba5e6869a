use clap::Parser;
use lap_analyzer::Error;
use lap_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Single failure boundary: a missing file gets a friendly message
    // naming the path as entered, everything else a generic line.
    match commands::run(args) {
        Ok(_stats) => {
            // Success - the report has already been printed by the command
            process::exit(0);
        }
        Err(Error::FileNotFound { path }) => {
            eprintln!("Error: The file '{}' does not exist.", path);
            process::exit(1);
        }
        Err(error) => {
            eprintln!("An error occurred: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Lap Analyzer - Race Session Lap Time Reports");
    println!("============================================");
    println!();
    println!("Analyze per-driver lap time logs from a single race session:");
    println!("fastest lap, averages, rankings, head-to-head comparisons and charts.");
    println!();
    println!("USAGE:");
    println!("    lap-analyzer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze a lap-time log and report session statistics (main command)");
    println!("    drivers     Load a driver metadata file and report its contents");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Full report with both charts and a head-to-head comparison:");
    println!("    lap-analyzer analyze monza.txt --pie-chart --bar-chart --compare HAM,VER");
    println!();
    println!("    # Classic prompt-driven flow (asks before each optional stage):");
    println!("    lap-analyzer analyze --interactive");
    println!();
    println!("    # Metadata table with one driver's combined detail:");
    println!("    lap-analyzer analyze monza.txt --drivers drivers.csv --driver HAM");
    println!();
    println!("    # Standalone driver metadata report:");
    println!("    lap-analyzer drivers drivers.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    lap-analyzer <COMMAND> --help");
}

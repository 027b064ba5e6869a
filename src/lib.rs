//! Lap Analyzer Library
//!
//! A Rust library for analyzing per-driver lap time logs from a single
//! race session.
//!
//! This library provides tools for:
//! - Parsing lap-time log files (race location line plus code-prefixed lap records)
//! - Loading driver metadata from comma-separated files into a code-keyed registry
//! - Computing descriptive statistics: fastest lap, per-driver and overall
//!   averages, rankings, and head-to-head comparisons
//! - Rendering a fastest-lap-share pie chart and a laps-completed bar chart
//! - Comprehensive error handling surfaced at a single top-level boundary

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analysis;
        pub mod charts;
        pub mod driver_registry;
        pub mod session_loader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Driver, DriverComparison, DriverDetail, RankingEntry};
pub use app::services::driver_registry::DriverRegistry;
pub use app::services::session_loader::{LapTimeSet, RaceSession};

/// Result type alias for the lap analyzer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for lap analysis operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// Malformed line in a lap-time log file
    #[error("lap log format error in file '{file}', line {line}: {message}")]
    LapFormat {
        file: String,
        line: usize,
        message: String,
    },

    /// Malformed line in a driver metadata file
    #[error("driver metadata format error in file '{file}', line {line}: {message}")]
    MetadataFormat {
        file: String,
        line: usize,
        message: String,
    },

    /// A computation was requested over a session with no lap data
    #[error("empty session: {message}")]
    EmptySession { message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Chart rendering error
    #[error("chart rendering error: {message}")]
    ChartRender { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a lap log format error for a specific line
    pub fn lap_format(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::LapFormat {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a driver metadata format error for a specific line
    pub fn metadata_format(
        file: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MetadataFormat {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an empty session error
    pub fn empty_session(message: impl Into<String>) -> Self {
        Self::EmptySession {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a chart rendering error
    pub fn chart_render(message: impl Into<String>) -> Self {
        Self::ChartRender {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

//! User input utilities for interactive CLI prompts
//!
//! This module provides the two prompt shapes the analyze command's
//! interactive mode is built from: free-text prompts (filenames, driver
//! codes) and y/n branch prompts.

use crate::{Error, Result};
use std::io::{self, Write};

/// Prompt for a line of free text and return it trimmed
pub fn prompt_line(message: &str) -> Result<String> {
    print!("{}: ", message);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(input.trim().to_string())
}

/// Ask a y/n question gating an optional report stage
///
/// Only an answer that trims and lowercases to exactly "y" selects the
/// branch; every other input, including "yes" and empty input, declines.
pub fn prompt_branch(message: &str) -> Result<bool> {
    print!("{} (y/n): ", message);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout".to_string(), e))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input".to_string(), e))?;

    Ok(is_branch_selected(&input))
}

/// Branch selection rule shared by [`prompt_branch`] and its tests
fn is_branch_selected(input: &str) -> bool {
    input.trim().to_lowercase() == "y"
}

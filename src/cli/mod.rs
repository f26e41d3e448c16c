//! CLI support for atomsel
//!
//! Provides programmatic access to the atomsel CLI functionality for
//! embedding in other tools.

mod check;
mod convert;

pub use check::{CheckOptions, CheckResult, execute_check};
pub use convert::{json_to_frame, matches_to_json};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Selection parsing error
    Selection(crate::SelectionError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// The frame JSON does not describe a valid frame
    InvalidFrame(String),
    /// IO error
    Io(io::Error),
    /// No frame input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Selection(e) => write!(f, "{}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::InvalidFrame(msg) => write!(f, "Invalid frame: {}", msg),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No frame provided. Use --input or pipe JSON to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Selection(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::SelectionError> for CliError {
    fn from(e: crate::SelectionError) -> Self {
        CliError::Selection(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

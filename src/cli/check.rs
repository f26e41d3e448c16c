//! Compile selections and evaluate them against JSON frame input

use super::CliError;
use super::convert::{json_to_frame, matches_to_json};
use crate::Selection;

/// Options for the check operation
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The selection to compile
    pub selection: String,
    /// JSON frame input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Selection evaluated successfully with a JSON match report
    Success(serde_json::Value),
}

/// Compile a selection and, unless `syntax_only`, run it over the frame.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let selection = Selection::parse(&options.selection).map_err(CliError::Selection)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str).map_err(CliError::Json)?;
    let frame = json_to_frame(&json_value)?;

    let matched = selection.filter(&frame);
    Ok(CheckResult::Success(matches_to_json(&frame, &matched)))
}

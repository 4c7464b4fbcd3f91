//! Compile selections and run them against JSON frames

use super::{CliError, indices_to_json, json_to_frame};
use crate::Selection;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The selection to compile
    pub selection: String,
    /// JSON frame
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
    /// Print the compiled tree instead of evaluating
    pub tree: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Diagnostic rendering of the compiled selection
    Tree(String),
    /// Indices of the matching atoms
    Success(serde_json::Value),
}

/// Execute an atomsel check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let selection = Selection::new(&options.selection)?;

    if options.tree {
        return Ok(CheckResult::Tree(selection.to_text()));
    }
    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let frame = json_to_frame(json_value)?;

    let matches = selection.evaluate(&frame)?;
    Ok(CheckResult::Success(indices_to_json(&matches)))
}

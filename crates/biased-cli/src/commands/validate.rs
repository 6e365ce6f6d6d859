//! Validate command implementation

use std::path::Path;

use colored::Colorize;

use biased_scaffold::validate;

use crate::error::{CliError, Result};

/// Run the validate command
///
/// Any issue makes the command fail with exit code 1.
pub fn run_validate(path: &Path, json: bool) -> Result<()> {
    let report = validate(path);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid() {
        println!("{} Validation passed", "OK".green().bold());
        println!("   Project structure is valid and compliant.");
    } else {
        println!("{} Validation failed", "FAILED".red().bold());
        println!();
        println!("{}", "Issues found:".bold());
        for issue in &report.issues {
            println!("   {} {}", "x".red(), issue);
        }
        if report.missing_root {
            println!();
            println!("Run {} to create the framework structure.", "biased init".cyan());
        }
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "Validation failed with {} issue(s)",
            report.issues.len()
        )))
    }
}

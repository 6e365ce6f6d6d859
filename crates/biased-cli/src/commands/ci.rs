//! CI command implementation

use std::path::Path;

use colored::Colorize;

use biased_scaffold::{CiOutcome, emit_workflow};

use crate::error::Result;

/// Run the ci command
pub fn run_ci(path: &Path) -> Result<()> {
    match emit_workflow(path)? {
        CiOutcome::Created(file) => {
            println!("{} Generated {}", "OK".green().bold(), file.as_str().cyan());
            println!("   Customize this workflow to match your project's build process.");
        }
        CiOutcome::AlreadyExists(file) => {
            println!(
                "{} CI workflow already exists at {}. Skipping generation.",
                "WARN".yellow().bold(),
                file.as_str().cyan()
            );
        }
    }
    Ok(())
}

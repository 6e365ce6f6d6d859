//! Install-bdd command implementation

use std::path::Path;

use colored::Colorize;

use biased_scaffold::{TokioRunner, install_bdd};

use crate::error::Result;

/// Run the install-bdd command on a current-thread runtime
pub fn run_install_bdd(path: &Path) -> Result<()> {
    println!("{} Detecting project type...", "=>".blue().bold());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let report = runtime.block_on(install_bdd(path, &TokioRunner))?;

    for action in &report.actions_taken {
        println!("{} {}", "OK".green().bold(), action);
    }
    for error in &report.errors {
        println!("{} {}", "WARN".yellow().bold(), error);
    }
    if report.actions_taken.is_empty() && report.errors.is_empty() {
        println!(
            "{} {} project: add a BDD framework manually.",
            "INFO".blue().bold(),
            report.kind.display_name()
        );
    }
    for step in &report.manual_steps {
        println!("   {}", step.dimmed());
    }

    Ok(())
}

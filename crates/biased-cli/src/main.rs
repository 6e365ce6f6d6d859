//! BIASED CLI
//!
//! Scaffolds the BIASED framework into a project and keeps its knowledge
//! base in sync with the business documents.

mod cli;
mod commands;
mod error;
mod logging;
mod templates;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let root = match cli.project {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(cmd) => execute_command(cmd, root),
        None => {
            println!("{} BIASED framework CLI", "biased".green().bold());
            println!();
            println!("Run {} for available commands.", "biased --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands, root: PathBuf) -> Result<()> {
    match cmd {
        Commands::Init {
            name,
            template,
            yes,
            templates,
        } => commands::run_init(&root, name.as_deref(), &template, yes, templates.as_deref()),
        Commands::Remove { yes } => commands::run_remove(&root, yes),
        Commands::InstallBdd => commands::run_install_bdd(&root),
        Commands::UpdateKnowledge { json } => commands::run_update_knowledge(&root, json),
        Commands::Validate { json } => commands::run_validate(&root, json),
        Commands::Ci => commands::run_ci(&root),
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}

//! Init command implementation
//!
//! Adds the framework to a project: template copy, first knowledge sync and
//! CI workflow.

use std::path::Path;

use colored::Colorize;
use dialoguer::Confirm;

use biased_fs::ProjectPath;
use biased_scaffold::{Variables, copy_template, emit_workflow};

use super::knowledge::sync_knowledge;
use crate::error::Result;
use crate::templates;

const STRUCTURE: &[(&str, &str)] = &[
    ("biased/intent/", "Define project intent and goals"),
    ("biased/behavior/", "Specify expected behaviors"),
    ("biased/eval/", "Evaluation sets and metrics"),
    ("biased/architecture/", "Architecture decisions"),
    ("biased/governance/", "Governance and risk management"),
    ("biased/adoption/", "Adoption metrics and workflows"),
    ("biased/docs/", "Business documentation"),
    ("biased/metrics/", "Metrics tracking"),
    ("biased/knowledge/", "AI-ready knowledge base (auto-generated)"),
];

/// Run the init command
pub fn run_init(
    path: &Path,
    name: Option<&str>,
    template: &str,
    yes: bool,
    templates_dir: Option<&Path>,
) -> Result<()> {
    if path.join(ProjectPath::Root.as_str()).exists() {
        println!(
            "{} BIASED framework already exists in this directory.",
            "WARN".yellow().bold()
        );
        let proceed = yes
            || Confirm::new()
                .with_prompt("Overwrite existing BIASED framework?")
                .default(false)
                .interact()?;
        if !proceed {
            println!("Init cancelled.");
            return Ok(());
        }
    }

    let project_name = name
        .map(str::to_string)
        .or_else(|| {
            path.canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| "project".to_string());

    println!(
        "{} Adding BIASED framework to '{}'...",
        "=>".blue().bold(),
        project_name.cyan()
    );

    let templates_root = templates::resolve(templates_dir)?;
    let vars = Variables::from([("PROJECT_NAME".to_string(), project_name)]);
    let report = copy_template(&templates_root, template, path, &vars)?;
    println!(
        "{} BIASED framework added ({} files).",
        "OK".green().bold(),
        report.files.len()
    );

    println!();
    println!("{} Generating initial knowledge base...", "=>".blue().bold());
    sync_knowledge(path, false)?;

    emit_workflow(path)?;

    println!();
    println!("{}", "BIASED Framework Structure:".bold().blue());
    for (dir, description) in STRUCTURE {
        println!("  {:<22} {}", dir.cyan(), description);
    }
    println!();
    println!("Start by editing {}", "biased/intent/intent.md".cyan());
    println!("Run {} to add BDD testing support", "biased install-bdd".cyan());

    Ok(())
}

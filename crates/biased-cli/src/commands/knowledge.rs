//! Update-knowledge command implementation

use std::path::Path;

use colored::Colorize;

use biased_fs::NormalizedPath;
use biased_knowledge::{KnowledgeSync, SyncOutcome, SyncSummary};

use crate::error::Result;

/// Run the update-knowledge command
pub fn run_update_knowledge(path: &Path, json: bool) -> Result<()> {
    if !json {
        println!("{} Updating knowledge base...", "=>".blue().bold());
    }
    sync_knowledge(path, json)
}

/// Sync the knowledge base of `path` and report the outcome.
pub(crate) fn sync_knowledge(path: &Path, json: bool) -> Result<()> {
    let engine = KnowledgeSync::new(NormalizedPath::new(path))?;

    match engine.run()? {
        SyncOutcome::NoSources { docs_dir } => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "status": "no_sources", "docs_dir": docs_dir.as_str() })
                );
            } else {
                println!(
                    "{} No docs directory found at {}. Nothing to convert.",
                    "WARN".yellow().bold(),
                    docs_dir.as_str().cyan()
                );
            }
        }
        SyncOutcome::Completed(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary, &engine.summary_path());
            }
        }
    }

    Ok(())
}

fn print_summary(summary: &SyncSummary, summary_path: &NormalizedPath) {
    if summary.is_unchanged() && summary.failed.is_empty() {
        println!(
            "{} Knowledge base is up to date ({} documents).",
            "OK".green().bold(),
            summary.total()
        );
        println!("   Summary: {}", summary_path.as_str().dimmed());
        return;
    }

    println!(
        "{} Knowledge base updated: {} created, {} updated, {} deleted, {} unchanged",
        "OK".green().bold(),
        summary.created,
        summary.updated,
        summary.deleted,
        summary.skipped
    );

    if !summary.failed.is_empty() {
        println!(
            "{} {} document(s) could not be converted:",
            "WARN".yellow().bold(),
            summary.failed_count()
        );
        for failure in &summary.failed {
            println!("   {} {}: {}", "!".yellow(), failure.source.cyan(), failure.message);
        }
    }

    println!("   Summary: {}", summary_path.as_str().dimmed());
}

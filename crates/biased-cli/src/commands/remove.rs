//! Remove command implementation

use std::fs;
use std::path::Path;

use colored::Colorize;
use dialoguer::Confirm;

use biased_fs::ProjectPath;

use crate::error::Result;

/// Run the remove command
pub fn run_remove(path: &Path, yes: bool) -> Result<()> {
    let framework_dir = path.join(ProjectPath::Root.as_str());

    if !framework_dir.exists() {
        println!(
            "{} No BIASED framework found in this directory.",
            "WARN".yellow().bold()
        );
        return Ok(());
    }

    let proceed = yes
        || Confirm::new()
            .with_prompt("Remove the biased/ directory and everything in it?")
            .default(false)
            .interact()?;
    if !proceed {
        println!("Remove cancelled.");
        return Ok(());
    }

    fs::remove_dir_all(&framework_dir)?;
    println!("{} BIASED framework removed.", "OK".green().bold());
    Ok(())
}

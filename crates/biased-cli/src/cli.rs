//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use biased_scaffold::COMMON_TEMPLATE;

/// BIASED - scaffold the framework and keep its knowledge base in sync
#[derive(Parser, Debug)]
#[command(name = "biased")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the BIASED framework to the project
    ///
    /// Copies the template, builds the initial knowledge base and writes the
    /// CI workflow.
    ///
    /// Examples:
    ///   biased init
    ///   biased init --name shop --template react
    ///   biased init --yes --templates ./my-templates
    Init {
        /// Project name substituted for {{PROJECT_NAME}} (defaults to the directory name)
        #[arg(long)]
        name: Option<String>,

        /// Template to copy; the shared template is always overlaid
        #[arg(short, long, default_value = COMMON_TEMPLATE)]
        template: String,

        /// Overwrite an existing framework without asking
        #[arg(short, long)]
        yes: bool,

        /// Directory containing the templates
        #[arg(long, env = "BIASED_TEMPLATES", value_name = "DIR")]
        templates: Option<PathBuf>,
    },

    /// Remove the biased/ directory
    Remove {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Detect the project type and install a BDD framework
    InstallBdd,

    /// Convert biased/docs/ into the biased/knowledge/ markdown knowledge base
    #[command(alias = "updateKnowledge")]
    UpdateKnowledge {
        /// Output the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the required framework files exist and parse
    Validate {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the evaluation workflow to .github/workflows/biased-eval.yml
    Ci,

    /// Generate shell completions
    ///
    /// Examples:
    ///   biased completions bash > ~/.local/share/bash-completion/completions/biased
    ///   biased completions zsh > ~/.zfunc/_biased
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

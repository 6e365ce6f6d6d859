//! Error types for biased-scaffold

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] biased_fs::Error),

    #[error("Template not found: {name} (looked in {path})")]
    TemplateNotFound { name: String, path: PathBuf },

    #[error("Failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command}")]
    CommandFailed { command: String },

    #[error("Command not found: {command}")]
    CommandNotFound { command: String },
}

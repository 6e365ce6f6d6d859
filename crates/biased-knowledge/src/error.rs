//! Error types for biased-knowledge

use std::path::PathBuf;

/// Result type for biased-knowledge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the knowledge base
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A document extractor rejected its input
    #[error("Failed to extract {format} content from {path}: {message}")]
    Extraction {
        format: &'static str,
        path: PathBuf,
        message: String,
    },

    /// The docs and knowledge trees overlap
    #[error("Docs directory {docs} and knowledge directory {knowledge} must not contain each other")]
    OverlappingTrees { docs: PathBuf, knowledge: PathBuf },

    /// Filesystem error from biased-fs
    #[error(transparent)]
    Fs(#[from] biased_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn extraction(
        format: &'static str,
        path: impl Into<PathBuf>,
        message: impl std::fmt::Display,
    ) -> Self {
        Self::Extraction {
            format,
            path: path.into(),
            message: message.to_string(),
        }
    }
}

//! Fixed project-relative paths of the BIASED framework.

use std::path::Path;

/// Well-known locations inside a project that uses the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `biased` framework root
    Root,
    /// Business documents that feed the knowledge base
    Docs,
    /// Generated knowledge base
    Knowledge,
    /// Optional project configuration
    Config,
    /// CI workflow emitted by `biased ci`
    CiWorkflow,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "biased",
            Self::Docs => "biased/docs",
            Self::Knowledge => "biased/knowledge",
            Self::Config => "biased/config.toml",
            Self::CiWorkflow => ".github/workflows/biased-eval.yml",
        }
    }
}

/// File name of the always-regenerated knowledge summary.
pub const SUMMARY_FILE: &str = "summary.md";

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

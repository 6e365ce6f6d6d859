//! Source documents and the artifacts derived from them

use std::time::SystemTime;

use chrono::{DateTime, Utc};

use biased_fs::NormalizedPath;
use biased_fs::io::format_timestamp;

use crate::format::FormatKind;

/// Suffix appended to every source path to name its artifact.
pub const ARTIFACT_SUFFIX: &str = ".md";

/// Frontmatter key recording the checksum of the converted source bytes.
const CHECKSUM_KEY: &str = "source_checksum:";

/// One file under the source tree, discovered fresh on every sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path relative to the docs directory; the document's identity
    pub relative: NormalizedPath,
    /// Absolute path used for reading
    pub absolute: NormalizedPath,
    pub kind: FormatKind,
    pub modified: SystemTime,
    /// Size in bytes
    pub size: u64,
}

impl SourceDocument {
    /// Relative path of the knowledge artifact for this document.
    ///
    /// The suffix is appended unconditionally, so `notes.md` maps to
    /// `notes.md.md`.
    pub fn artifact_path(&self) -> NormalizedPath {
        self.relative.with_appended(ARTIFACT_SUFFIX)
    }

    /// File name used as the artifact title.
    pub fn file_name(&self) -> &str {
        self.relative.file_name().unwrap_or(self.relative.as_str())
    }
}

/// Wrap converted content in the artifact frontmatter and title heading.
pub fn render_artifact(
    source: &SourceDocument,
    checksum: &str,
    content: &str,
    now: DateTime<Utc>,
) -> String {
    format!(
        "---\nsource_file: {}\n{} {}\nlast_updated: {}\n---\n\n# {}\n\n{}\n",
        source.relative,
        CHECKSUM_KEY,
        checksum,
        format_timestamp(now),
        source.file_name(),
        content
    )
}

/// Checksum recorded in an artifact's frontmatter, if any.
pub fn recorded_checksum(artifact: &str) -> Option<&str> {
    let mut lines = artifact.lines();
    if lines.next()? != "---" {
        return None;
    }
    lines
        .take_while(|line| *line != "---")
        .find_map(|line| line.strip_prefix(CHECKSUM_KEY))
        .map(str::trim)
}

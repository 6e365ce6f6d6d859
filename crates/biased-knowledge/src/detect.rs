//! Change detection between a source document and its artifact

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use biased_fs::{NormalizedPath, checksum, io};

use crate::Result;
use crate::document::{SourceDocument, recorded_checksum};

/// State of one source/artifact pair before a sync touches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// No artifact yet; conversion creates it
    NoArtifact,
    /// Artifact is out of date; conversion overwrites it
    Stale,
    /// Artifact is current; nothing to do
    Fresh,
}

/// How freshness is decided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDetection {
    /// Artifact must be strictly newer than its source
    #[default]
    Timestamp,
    /// Artifact must record the checksum of the current source bytes
    Checksum,
}

impl ChangeDetection {
    /// Classify the pair formed by `source` and the artifact at `artifact`.
    pub fn assess(&self, source: &SourceDocument, artifact: &NormalizedPath) -> Result<Freshness> {
        if !artifact.is_file() {
            return Ok(Freshness::NoArtifact);
        }

        match self {
            Self::Timestamp => {
                let artifact_modified = io::modified_time(artifact)?;
                Ok(compare_timestamps(source.modified, artifact_modified))
            }
            Self::Checksum => {
                let body = io::read_text(artifact)?;
                let current = checksum::compute_file_checksum(&source.absolute)?;
                if recorded_checksum(&body) == Some(current.as_str()) {
                    Ok(Freshness::Fresh)
                } else {
                    Ok(Freshness::Stale)
                }
            }
        }
    }
}

/// Timestamp rule for an existing artifact: equal times reconvert.
pub fn compare_timestamps(source: SystemTime, artifact: SystemTime) -> Freshness {
    if artifact > source {
        Freshness::Fresh
    } else {
        Freshness::Stale
    }
}

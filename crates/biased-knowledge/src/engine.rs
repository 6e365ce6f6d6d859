//! The knowledge sync engine
//!
//! One [`KnowledgeSync::run`] walks the docs tree, converts every source that
//! needs it, deletes artifacts whose source is gone and rewrites
//! `summary.md`.

use std::collections::HashSet;
use std::fs;

use chrono::Utc;

use biased_fs::constants::SUMMARY_FILE;
use biased_fs::{NormalizedPath, checksum, io};

use crate::config::{self, KnowledgeConfig};
use crate::convert::convert;
use crate::detect::Freshness;
use crate::document::{SourceDocument, render_artifact};
use crate::extract::Extractors;
use crate::summary::{FailedConversion, SyncSummary};
use crate::{Result, walker};

/// Result of a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The docs directory does not exist; nothing was touched
    NoSources { docs_dir: NormalizedPath },
    /// The run finished and `summary.md` was written
    Completed(SyncSummary),
}

/// What happened to a single source during a run.
enum FileOutcome {
    Created,
    Updated,
    Skipped,
}

/// Synchronizes `biased/docs/` into `biased/knowledge/` for one project.
#[derive(Debug)]
pub struct KnowledgeSync {
    root: NormalizedPath,
    config: KnowledgeConfig,
    extractors: Extractors,
}

impl KnowledgeSync {
    /// Create an engine for the project at `root`, reading its config file.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be parsed.
    pub fn new(root: NormalizedPath) -> Result<Self> {
        let config = KnowledgeConfig::load(&root)?;
        Ok(Self::with_config(root, config))
    }

    pub fn with_config(root: NormalizedPath, config: KnowledgeConfig) -> Self {
        Self {
            root,
            config,
            extractors: Extractors::default(),
        }
    }

    /// Replace the document extractors, e.g. with fakes in tests.
    pub fn with_extractors(mut self, extractors: Extractors) -> Self {
        self.extractors = extractors;
        self
    }

    pub fn docs_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.docs_dir)
    }

    pub fn knowledge_dir(&self) -> NormalizedPath {
        self.root.join(&self.config.knowledge_dir)
    }

    pub fn summary_path(&self) -> NormalizedPath {
        self.knowledge_dir().join(SUMMARY_FILE)
    }

    /// Run one full synchronization.
    ///
    /// # Errors
    ///
    /// Per-file conversion failures are recorded in the summary and never
    /// returned. Errors creating the knowledge directory or writing the
    /// summary are returned, as is a knowledge directory that overlaps the
    /// docs directory.
    pub fn run(&self) -> Result<SyncOutcome> {
        let docs_dir = self.docs_dir();
        let knowledge_dir = self.knowledge_dir();
        config::reject_overlap(&docs_dir.to_native(), &knowledge_dir.to_native())?;

        if !docs_dir.is_dir() {
            tracing::warn!(path = %docs_dir, "docs directory not found, nothing to sync");
            return Ok(SyncOutcome::NoSources { docs_dir });
        }

        io::ensure_dir(&knowledge_dir)?;

        let mut summary = SyncSummary::new(Utc::now());
        let mut processed = HashSet::new();

        for source in walker::source_documents(&docs_dir) {
            let artifact = source.artifact_path();
            if artifact.as_str() == SUMMARY_FILE {
                tracing::warn!(
                    source = %source.relative,
                    "source would overwrite the knowledge summary, skipping"
                );
                continue;
            }

            match self.sync_document(&source, &knowledge_dir.join(artifact.as_str())) {
                Ok(FileOutcome::Created) => summary.created += 1,
                Ok(FileOutcome::Updated) => summary.updated += 1,
                Ok(FileOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    tracing::warn!(source = %source.relative, error = %e, "conversion failed");
                    summary.failed.push(FailedConversion {
                        source: source.relative.to_string(),
                        message: e.to_string(),
                    });
                }
            }

            processed.insert(artifact.to_string());
            summary.files.push(artifact.to_string());
        }

        summary.deleted = self.delete_orphans(&knowledge_dir, &processed);
        if summary.deleted > 0 {
            walker::prune_empty_dirs(&knowledge_dir);
        }

        io::write_text(&self.summary_path(), &summary.render())?;

        tracing::info!(
            total = summary.total(),
            created = summary.created,
            updated = summary.updated,
            deleted = summary.deleted,
            skipped = summary.skipped,
            failed = summary.failed_count(),
            "knowledge sync complete"
        );

        Ok(SyncOutcome::Completed(summary))
    }

    fn sync_document(
        &self,
        source: &SourceDocument,
        artifact: &NormalizedPath,
    ) -> Result<FileOutcome> {
        let freshness = self.config.change_detection.assess(source, artifact)?;
        tracing::debug!(source = %source.relative, ?freshness, kind = %source.kind, "assessed");

        let outcome = match freshness {
            Freshness::Fresh => return Ok(FileOutcome::Skipped),
            Freshness::NoArtifact => FileOutcome::Created,
            Freshness::Stale => FileOutcome::Updated,
        };

        let content = convert(source, &self.extractors)?;
        let checksum = checksum::compute_file_checksum(&source.absolute)?;
        let body = render_artifact(source, &checksum, &content, Utc::now());
        io::write_text(artifact, &body)?;

        Ok(outcome)
    }

    /// Delete markdown artifacts not produced by this run.
    fn delete_orphans(&self, knowledge_dir: &NormalizedPath, processed: &HashSet<String>) -> usize {
        let mut deleted = 0;

        for relative in walker::artifact_files(knowledge_dir) {
            if relative.as_str() == SUMMARY_FILE || processed.contains(relative.as_str()) {
                continue;
            }

            let path = knowledge_dir.join(relative.as_str()).to_native();
            match fs::remove_file(&path) {
                Ok(()) => {
                    tracing::debug!(artifact = %relative, "deleted orphaned artifact");
                    deleted += 1;
                }
                Err(e) => {
                    tracing::warn!(artifact = %relative, error = %e, "failed to delete orphan");
                }
            }
        }

        deleted
    }
}

//! The per-run summary record and its markdown rendering

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use biased_fs::io::format_timestamp;

/// A source whose conversion failed during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedConversion {
    /// Source path relative to the docs directory
    pub source: String,
    pub message: String,
}

/// Outcome counters and file list of one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    pub generated_at: DateTime<Utc>,
    pub created: usize,
    pub updated: usize,
    pub deleted: usize,
    pub skipped: usize,
    /// Artifact paths processed in this run, in walk order
    pub files: Vec<String>,
    pub failed: Vec<FailedConversion>,
}

impl SyncSummary {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            created: 0,
            updated: 0,
            deleted: 0,
            skipped: 0,
            files: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Number of documents processed, failures included.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// True when the run neither wrote nor deleted an artifact.
    pub fn is_unchanged(&self) -> bool {
        self.created == 0 && self.updated == 0 && self.deleted == 0
    }

    /// Render the `summary.md` body.
    pub fn render(&self) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "# Knowledge Base Summary\n");
        let _ = writeln!(out, "**Last Updated**: {}\n", format_timestamp(self.generated_at));
        let _ = writeln!(out, "## Statistics");
        let _ = writeln!(out, "- **Total Documents**: {}", self.total());
        let _ = writeln!(out, "- **Created**: {}", self.created);
        let _ = writeln!(out, "- **Updated**: {}", self.updated);
        let _ = writeln!(out, "- **Deleted**: {}", self.deleted);
        let _ = writeln!(out, "- **Skipped (Unchanged)**: {}", self.skipped);
        let _ = writeln!(out, "- **Failed**: {}\n", self.failed_count());
        let _ = writeln!(out, "## Files");
        for file in &self.files {
            let _ = writeln!(out, "- [{file}]({file})");
        }

        if !self.failed.is_empty() {
            let _ = writeln!(out, "\n## Failed Conversions");
            for failure in &self.failed {
                let _ = writeln!(out, "- `{}`: {}", failure.source, failure.message);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn render_lists_statistics_and_files() {
        let mut summary = SyncSummary::new(fixed_time());
        summary.created = 1;
        summary.skipped = 1;
        summary.files = vec!["a.txt.md".into(), "sub/b.md.md".into()];

        let expected = "\
# Knowledge Base Summary

**Last Updated**: 2024-03-01T12:00:00.000Z

## Statistics
- **Total Documents**: 2
- **Created**: 1
- **Updated**: 0
- **Deleted**: 0
- **Skipped (Unchanged)**: 1
- **Failed**: 0

## Files
- [a.txt.md](a.txt.md)
- [sub/b.md.md](sub/b.md.md)
";
        assert_eq!(summary.render(), expected);
    }

    #[test]
    fn render_appends_failures_when_present() {
        let mut summary = SyncSummary::new(fixed_time());
        summary.files = vec!["bad.pdf.md".into()];
        summary.failed = vec![FailedConversion {
            source: "bad.pdf".into(),
            message: "corrupt".into(),
        }];

        let rendered = summary.render();
        assert!(rendered.contains("- **Failed**: 1"));
        assert!(rendered.ends_with("## Failed Conversions\n- `bad.pdf`: corrupt\n"));
    }

    #[test]
    fn render_is_deterministic() {
        let mut summary = SyncSummary::new(fixed_time());
        summary.files = vec!["x.md.md".into()];
        assert_eq!(summary.render(), summary.clone().render());
    }

    #[test]
    fn empty_run_is_unchanged() {
        let summary = SyncSummary::new(fixed_time());
        assert!(summary.is_unchanged());
        assert_eq!(summary.total(), 0);
    }
}

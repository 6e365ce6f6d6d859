//! Structural validation of the framework files

use std::fs;
use std::path::Path;

use serde::Serialize;

use biased_fs::ProjectPath;

/// Files every framework project must contain.
pub const REQUIRED_FILES: &[&str] = &[
    "biased/intent/intent.md",
    "biased/behavior/behavior-spec.md",
    "biased/eval/eval-set.jsonl",
    "biased/metrics/metrics-hook.json",
    "biased/governance/risk-register.md",
];

const METRICS_HOOK: &str = "biased/metrics/metrics-hook.json";
const EVAL_SET: &str = "biased/eval/eval-set.jsonl";

/// Accumulated validation issues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Set when the `biased/` directory itself is missing
    pub missing_root: bool,
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate the framework structure of the project at `root`.
pub fn validate(root: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !root.join(ProjectPath::Root.as_str()).is_dir() {
        report.missing_root = true;
        report
            .issues
            .push("'biased/' directory not found. Run 'biased init' to create it.".to_string());
        return report;
    }

    for file in REQUIRED_FILES {
        if !root.join(file).exists() {
            report.issues.push(format!("Missing file: {file}"));
        }
    }

    let metrics_hook = root.join(METRICS_HOOK);
    if metrics_hook.exists() {
        let parsed = fs::read_to_string(&metrics_hook)
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok());
        if parsed.is_none() {
            report.issues.push(format!("Invalid JSON in {METRICS_HOOK}"));
        }
    }

    let eval_set = root.join(EVAL_SET);
    if eval_set.exists() {
        match fs::read_to_string(&eval_set) {
            Ok(content) => report.issues.extend(json_lines_issues(EVAL_SET, &content)),
            Err(_) => report.issues.push(format!("Invalid JSON in {EVAL_SET}")),
        }
    }

    tracing::debug!(issues = report.issues.len(), "validation finished");
    report
}

/// One issue per unparseable line. Blank lines are ignored and line numbers
/// count non-blank lines only, starting at 1.
fn json_lines_issues(file: &str, content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .filter(|(_, line)| serde_json::from_str::<serde_json::Value>(line).is_err())
        .map(|(index, _)| format!("Invalid JSON in {file} at line {}", index + 1))
        .collect()
}

//! Scenario tests for day-to-day knowledge base maintenance
//!
//! Each test walks a realistic sequence of edits to `biased/docs/` and checks
//! what the knowledge base and its summary look like afterwards.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use biased_fs::NormalizedPath;
use biased_knowledge::{
    ChangeDetection, Error, Extractors, KnowledgeConfig, KnowledgeSync, PdfExtractor, Result,
    SyncOutcome, SyncSummary,
};
use biased_scaffold::{CommandRunner, ProjectKind, install_bdd};
use biased_test_utils::TestProject;
use biased_test_utils::fixtures::docx_bytes;
use pretty_assertions::assert_eq;

/// PDF extractor that reads the bytes as UTF-8 text.
struct TextPdf;

impl PdfExtractor for TextPdf {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| Error::extraction("pdf", "<memory>", e))
    }
}

fn run(project: &TestProject, extractors: Extractors) -> SyncSummary {
    let engine = KnowledgeSync::new(NormalizedPath::new(project.root()))
        .unwrap()
        .with_extractors(extractors);
    match engine.run().unwrap() {
        SyncOutcome::Completed(summary) => summary,
        other => panic!("expected a completed run, got {other:?}"),
    }
}

fn age_all_docs(project: &TestProject) {
    for entry in walk(&project.path("biased/docs")) {
        let relative = entry
            .strip_prefix(project.root())
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        project.age(&relative, 120);
    }
}

fn walk(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}

#[test]
fn mission_mixed_document_library() {
    let project = TestProject::new();
    project.write_doc("contracts/msa.pdf", "Master services agreement");
    project.write_doc("brief.docx", docx_bytes(&["Quarterly brief", "Revenue up"]));
    project.write_doc("notes.md", "# Notes");
    project.write_doc("diagram.svg", "<svg/>");
    age_all_docs(&project);

    let summary = run(&project, Extractors::default().with_pdf(TextPdf));

    assert_eq!(summary.created, 4);
    assert_eq!(
        summary.files,
        vec![
            "brief.docx.md",
            "contracts/msa.pdf.md",
            "diagram.svg.md",
            "notes.md.md",
        ]
    );
    project.assert_file_contains("biased/knowledge/contracts/msa.pdf.md", "Master services");
    project.assert_file_contains("biased/knowledge/brief.docx.md", "Revenue up");
    project.assert_file_contains("biased/knowledge/diagram.svg.md", "image/svg+xml");
}

#[test]
fn mission_document_lifecycle() {
    let project = TestProject::new();
    project.write_doc("a.txt", "v1");
    project.write_doc("b.txt", "keep");
    age_all_docs(&project);

    let first = run(&project, Extractors::default());
    assert_eq!((first.created, first.updated, first.deleted), (2, 0, 0));

    // Edit a.txt after its artifact was written; remove b.txt
    project.write_doc("a.txt", "v2");
    let artifact_time = fs::metadata(project.path("biased/knowledge/a.txt.md"))
        .unwrap()
        .modified()
        .unwrap();
    project.set_mtime(
        "biased/docs/a.txt",
        artifact_time + std::time::Duration::from_secs(2),
    );
    fs::remove_file(project.path("biased/docs/b.txt")).unwrap();

    let second = run(&project, Extractors::default());
    assert_eq!((second.created, second.updated, second.deleted), (0, 1, 1));
    project.assert_file_contains("biased/knowledge/a.txt.md", "v2");
    project.assert_file_not_exists("biased/knowledge/b.txt.md");

    let summary_md = project.read("biased/knowledge/summary.md");
    assert!(summary_md.contains("- **Updated**: 1"));
    assert!(summary_md.contains("- **Deleted**: 1"));
}

#[test]
fn mission_checksum_mode_survives_a_checkout() {
    let project = TestProject::new();
    project.write_doc("policy.md", "Same text");
    let root = NormalizedPath::new(project.root());
    let config = KnowledgeConfig {
        change_detection: ChangeDetection::Checksum,
        ..KnowledgeConfig::default()
    };

    KnowledgeSync::with_config(root.clone(), config.clone())
        .run()
        .unwrap();
    // A fresh checkout rewrites every mtime without changing content
    project.set_mtime(
        "biased/docs/policy.md",
        std::time::SystemTime::now() + std::time::Duration::from_secs(600),
    );
    let outcome = KnowledgeSync::with_config(root, config).run().unwrap();

    match outcome {
        SyncOutcome::Completed(summary) => assert_eq!(summary.skipped, 1),
        other => panic!("expected a completed run, got {other:?}"),
    }
}

struct NoopRunner(Mutex<usize>);

#[async_trait]
impl CommandRunner for NoopRunner {
    async fn run(
        &self,
        _program: &str,
        _args: &[&str],
        _cwd: &Path,
    ) -> biased_scaffold::Result<bool> {
        *self.0.lock().unwrap() += 1;
        Ok(true)
    }
}

#[tokio::test]
async fn mission_bdd_setup_for_python_service() {
    let project = TestProject::new();
    project.write("pyproject.toml", "[project]\nname = \"svc\"\n");
    project.write_valid_framework();
    let runner = NoopRunner(Mutex::new(0));

    let report = install_bdd(project.root(), &runner).await.unwrap();

    assert_eq!(report.kind, ProjectKind::Python);
    assert!(report.success);
    assert_eq!(*runner.0.lock().unwrap(), 1);
}

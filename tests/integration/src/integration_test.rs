//! End-to-end integration test for the project lifecycle
//!
//! Exercises the complete flow: template copy -> knowledge sync -> CI
//! workflow -> validation, across all library crates.

use std::path::{Path, PathBuf};

use biased_fs::NormalizedPath;
use biased_knowledge::{KnowledgeSync, SyncOutcome, SyncSummary};
use biased_scaffold::{
    COMMON_TEMPLATE, CiOutcome, Variables, copy_template, emit_workflow, validate,
};
use biased_test_utils::TestProject;

fn templates_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates")
}

fn init(project: &TestProject, name: &str) {
    let vars = Variables::from([("PROJECT_NAME".to_string(), name.to_string())]);
    copy_template(&templates_root(), COMMON_TEMPLATE, project.root(), &vars).unwrap();
}

fn sync(project: &TestProject) -> SyncSummary {
    match KnowledgeSync::new(NormalizedPath::new(project.root()))
        .unwrap()
        .run()
        .unwrap()
    {
        SyncOutcome::Completed(summary) => summary,
        other => panic!("expected a completed run, got {other:?}"),
    }
}

#[test]
fn test_shipped_template_is_valid() {
    let project = TestProject::new();
    init(&project, "acme");

    let report = validate(project.root());

    assert!(report.is_valid(), "issues: {:?}", report.issues);
    project.assert_file_contains("biased/intent/intent.md", "# Intent: acme");
    project.assert_file_exists("biased/architecture");
    project.assert_file_not_exists("biased/architecture/.keep");
}

#[test]
fn test_init_flow_builds_knowledge_and_workflow() {
    let project = TestProject::new();
    init(&project, "acme");

    let summary = sync(&project);
    let ci = emit_workflow(project.root()).unwrap();

    assert_eq!(summary.files, vec!["README.md.md"]);
    assert!(matches!(ci, CiOutcome::Created(_)));
    project.assert_file_contains("biased/knowledge/README.md.md", "source_file: README.md");
    project.assert_file_contains(".github/workflows/biased-eval.yml", "biased validate");
}

#[test]
fn test_reinit_keeps_user_documents_and_knowledge() {
    let project = TestProject::new();
    init(&project, "acme");
    project.write_doc("pricing.txt", "Gold tier: 10 seats");
    project.age("biased/docs/pricing.txt", 60);
    project.age("biased/docs/README.md", 60);
    sync(&project);

    init(&project, "acme");
    project.age("biased/docs/README.md", 60);
    let summary = sync(&project);

    assert_eq!(summary.deleted, 0);
    project.assert_file_contains("biased/knowledge/pricing.txt.md", "Gold tier");
    assert!(validate(project.root()).is_valid());
}

#[test]
fn test_validation_after_breaking_a_file() {
    let project = TestProject::new();
    init(&project, "acme");
    project.write("biased/eval/eval-set.jsonl", "{\"ok\": true}\noops\n");

    let report = validate(project.root());

    assert_eq!(
        report.issues,
        vec!["Invalid JSON in biased/eval/eval-set.jsonl at line 2"]
    );
}

//! End-to-end sync runs against temporary projects

use std::path::Path;

use biased_fs::NormalizedPath;
use biased_knowledge::{
    ChangeDetection, Error, Extractors, KnowledgeConfig, KnowledgeSync, PdfExtractor, Result,
    Sheet, SyncOutcome, SyncSummary, WorkbookReader,
};
use biased_test_utils::TestProject;
use biased_test_utils::fixtures::docx_bytes;
use pretty_assertions::assert_eq;

const KNOWLEDGE: &str = "biased/knowledge";

struct FakeWorkbook(Vec<Sheet>);

impl WorkbookReader for FakeWorkbook {
    fn read_sheets(&self, _path: &Path) -> Result<Vec<Sheet>> {
        Ok(self.0.clone())
    }
}

struct BrokenPdf;

impl PdfExtractor for BrokenPdf {
    fn extract_text(&self, _bytes: &[u8]) -> Result<String> {
        Err(Error::extraction("pdf", "broken.pdf", "unexpected end of stream"))
    }
}

fn engine(project: &TestProject) -> KnowledgeSync {
    KnowledgeSync::new(NormalizedPath::new(project.root())).unwrap()
}

fn completed(outcome: SyncOutcome) -> SyncSummary {
    match outcome {
        SyncOutcome::Completed(summary) => summary,
        other => panic!("expected a completed run, got {other:?}"),
    }
}

fn sync(project: &TestProject) -> SyncSummary {
    completed(engine(project).run().unwrap())
}

#[test]
fn first_run_creates_one_artifact_per_source() {
    let project = TestProject::new();
    project.write_doc("notes.txt", "hello");
    project.write_doc("guide.md", "# Guide");
    project.age("biased/docs/notes.txt", 60);
    project.age("biased/docs/guide.md", 60);

    let summary = sync(&project);

    assert_eq!(summary.created, 2);
    assert_eq!(summary.files, vec!["guide.md.md", "notes.txt.md"]);
    project.assert_file_contains("biased/knowledge/notes.txt.md", "source_file: notes.txt");
    project.assert_file_contains("biased/knowledge/notes.txt.md", "# notes.txt\n\nhello");
    project.assert_file_exists("biased/knowledge/summary.md");
}

#[test]
fn second_run_skips_everything() {
    let project = TestProject::new();
    project.write_doc("a.txt", "a");
    project.write_doc("sub/b.md", "b");
    project.age("biased/docs/a.txt", 60);
    project.age("biased/docs/sub/b.md", 60);

    sync(&project);
    let second = sync(&project);

    assert_eq!(second.created, 0);
    assert_eq!(second.updated, 0);
    assert_eq!(second.deleted, 0);
    assert_eq!(second.skipped, second.total());
    assert_eq!(second.total(), 2);
}

#[test]
fn modified_source_is_updated() {
    let project = TestProject::new();
    project.write_doc("a.txt", "old");
    project.age("biased/docs/a.txt", 60);
    sync(&project);

    project.write_doc("a.txt", "new");
    let artifact_time = std::fs::metadata(project.path("biased/knowledge/a.txt.md"))
        .unwrap()
        .modified()
        .unwrap();
    project.set_mtime("biased/docs/a.txt", artifact_time + std::time::Duration::from_secs(5));

    let summary = sync(&project);

    assert_eq!(summary.updated, 1);
    project.assert_file_contains("biased/knowledge/a.txt.md", "new");
}

#[test]
fn equal_timestamps_reconvert() {
    let project = TestProject::new();
    project.write_doc("a.txt", "a");
    project.age("biased/docs/a.txt", 60);
    sync(&project);

    let artifact = "biased/knowledge/a.txt.md";
    let source_time = std::fs::metadata(project.path("biased/docs/a.txt"))
        .unwrap()
        .modified()
        .unwrap();
    project.set_mtime(artifact, source_time);

    let summary = sync(&project);
    assert_eq!(summary.updated, 1);
    assert_eq!(summary.skipped, 0);
}

#[test]
fn orphans_are_deleted_and_empty_dirs_pruned() {
    let project = TestProject::new();
    project.write_doc("keep.txt", "k");
    project.write_doc("old/gone.txt", "g");
    project.age("biased/docs/keep.txt", 60);
    sync(&project);

    std::fs::remove_dir_all(project.path("biased/docs/old")).unwrap();
    let summary = sync(&project);

    assert_eq!(summary.deleted, 1);
    project.assert_file_not_exists("biased/knowledge/old/gone.txt.md");
    project.assert_file_not_exists("biased/knowledge/old");
    project.assert_file_exists("biased/knowledge/keep.txt.md");
    project.assert_file_exists("biased/knowledge/summary.md");
}

#[test]
fn non_markdown_files_in_knowledge_are_left_alone() {
    let project = TestProject::new();
    project.mkdir("biased/docs");
    project.write("biased/knowledge/index.json", "{}");

    let summary = sync(&project);

    assert_eq!(summary.deleted, 0);
    project.assert_file_exists("biased/knowledge/index.json");
}

#[test]
fn markdown_source_gets_double_extension() {
    let project = TestProject::new();
    project.write_doc("x.md", "body");

    let summary = sync(&project);

    assert_eq!(summary.files, vec!["x.md.md"]);
    project.assert_file_exists("biased/knowledge/x.md.md");
    project.assert_file_not_exists("biased/knowledge/x.md");
}

#[test]
fn binary_asset_gets_metadata_stub() {
    let project = TestProject::new();
    project.write_doc("image.png", [0x89u8, b'P', b'N', b'G']);

    sync(&project);

    let artifact = project.read("biased/knowledge/image.png.md");
    assert!(artifact.contains("Asset: image.png"));
    assert!(artifact.contains("binary asset"));
    assert!(artifact.contains("- **Type**: image/png"));
}

#[test]
fn spreadsheet_becomes_markdown_table() {
    let project = TestProject::new();
    project.write_doc("data.xlsx", "not a real workbook");
    let extractors = Extractors::default()
        .with_workbook(FakeWorkbook(vec![Sheet::new("Sheet1", "a,b\n1,2\n")]));

    let summary = completed(engine(&project).with_extractors(extractors).run().unwrap());

    assert_eq!(summary.created, 1);
    let artifact = project.read("biased/knowledge/data.xlsx.md");
    assert!(artifact.contains("## Sheet: Sheet1"));
    assert!(artifact.contains("| a | b |"));
    assert!(artifact.contains("| --- | --- |"));
    assert!(artifact.contains("| 1 | 2 |"));
}

#[test]
fn failing_extraction_is_isolated() {
    let project = TestProject::new();
    project.write_doc("broken.pdf", "%PDF-garbage");
    project.write_doc("fine.txt", "ok");
    let extractors = Extractors::default().with_pdf(BrokenPdf);

    let summary = completed(engine(&project).with_extractors(extractors).run().unwrap());

    assert_eq!(summary.created, 1);
    assert_eq!(summary.failed_count(), 1);
    assert_eq!(summary.failed[0].source, "broken.pdf");
    assert_eq!(summary.files, vec!["broken.pdf.md", "fine.txt.md"]);
    project.assert_file_not_exists("biased/knowledge/broken.pdf.md");
    project.assert_file_contains("biased/knowledge/summary.md", "## Failed Conversions");
}

#[test]
fn failing_extraction_keeps_prior_artifact() {
    let project = TestProject::new();
    project.write_doc("broken.pdf", "%PDF-garbage");
    project.write("biased/knowledge/broken.pdf.md", "previous content");
    project.age("biased/knowledge/broken.pdf.md", 120);
    let extractors = Extractors::default().with_pdf(BrokenPdf);

    let summary = completed(engine(&project).with_extractors(extractors).run().unwrap());

    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.updated, 0);
    assert_eq!(project.read("biased/knowledge/broken.pdf.md"), "previous content");
}

#[test]
fn word_document_text_is_extracted() {
    let project = TestProject::new();
    project.write_doc("brief.docx", docx_bytes(&["Mission", "Ship it"]));

    let summary = sync(&project);

    assert_eq!(summary.failed_count(), 0);
    let artifact = project.read("biased/knowledge/brief.docx.md");
    assert!(artifact.contains("Mission"));
    assert!(artifact.contains("Ship it"));
}

#[test]
fn corrupt_word_document_is_reported_not_stubbed() {
    let project = TestProject::new();
    project.write_doc("bad.docx", "this is not a zip archive");

    let summary = sync(&project);

    assert_eq!(summary.failed_count(), 1);
    project.assert_file_not_exists("biased/knowledge/bad.docx.md");
}

#[test]
fn source_named_summary_is_skipped() {
    let project = TestProject::new();
    project.write_doc("summary", "would clobber");
    project.write_doc("other.txt", "x");

    let summary = sync(&project);

    assert_eq!(summary.files, vec!["other.txt.md"]);
    project.assert_file_contains("biased/knowledge/summary.md", "# Knowledge Base Summary");
}

#[test]
fn missing_docs_dir_touches_nothing() {
    let project = TestProject::new();

    let outcome = engine(&project).run().unwrap();

    assert!(matches!(outcome, SyncOutcome::NoSources { .. }));
    project.assert_file_not_exists(KNOWLEDGE);
}

#[test]
fn empty_docs_dir_still_writes_summary() {
    let project = TestProject::new();
    project.mkdir("biased/docs");

    let summary = sync(&project);

    assert_eq!(summary.total(), 0);
    project.assert_file_contains("biased/knowledge/summary.md", "- **Total Documents**: 0");
}

#[test]
fn checksum_mode_ignores_touched_but_unchanged_sources() {
    let project = TestProject::new();
    project.write_doc("a.txt", "stable");
    let config = KnowledgeConfig {
        change_detection: ChangeDetection::Checksum,
        ..KnowledgeConfig::default()
    };
    let root = NormalizedPath::new(project.root());

    KnowledgeSync::with_config(root.clone(), config.clone()).run().unwrap();
    project.set_mtime(
        "biased/docs/a.txt",
        std::time::SystemTime::now() + std::time::Duration::from_secs(3600),
    );
    let summary = completed(KnowledgeSync::with_config(root, config).run().unwrap());

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.updated, 0);
}

#[test]
fn checksum_mode_picks_up_content_changes() {
    let project = TestProject::new();
    project.write("biased/config.toml", "[knowledge]\nchange_detection = \"checksum\"\n");
    project.write_doc("a.txt", "one");
    sync(&project);

    project.write_doc("a.txt", "two");
    let summary = sync(&project);

    assert_eq!(summary.updated, 1);
    project.assert_file_contains("biased/knowledge/a.txt.md", "two");
}

#[test]
fn configured_directories_are_used() {
    let project = TestProject::new();
    project.write(
        "biased/config.toml",
        "[knowledge]\ndocs_dir = \"sources\"\nknowledge_dir = \"kb\"\n",
    );
    project.write("sources/a.txt", "a");

    let summary = sync(&project);

    assert_eq!(summary.created, 1);
    project.assert_file_exists("kb/a.txt.md");
    project.assert_file_exists("kb/summary.md");
}

#[test]
fn summary_lists_every_processed_file() {
    let project = TestProject::new();
    project.write_doc("a.txt", "a");
    project.write_doc("nested/deep/b.txt", "b");

    sync(&project);

    let summary = project.read("biased/knowledge/summary.md");
    assert!(summary.contains("- [a.txt.md](a.txt.md)"));
    assert!(summary.contains("- [nested/deep/b.txt.md](nested/deep/b.txt.md)"));
    assert!(summary.contains("- **Created**: 2"));
}

#[test]
fn non_utf8_text_is_decoded_lossily() {
    let project = TestProject::new();
    project.write_doc("notes.txt", b"caf\xe9 menu\n");

    let summary = sync(&project);

    assert_eq!(summary.created, 1);
    assert_eq!(summary.failed_count(), 0);
    project.assert_file_contains("biased/knowledge/notes.txt.md", "caf\u{FFFD} menu");
}

#[test]
fn knowledge_inside_docs_is_rejected() {
    let project = TestProject::new();
    project.write("biased/a.txt", "a");
    let config = KnowledgeConfig {
        docs_dir: "biased".into(),
        ..KnowledgeConfig::default()
    };

    let result = KnowledgeSync::with_config(NormalizedPath::new(project.root()), config).run();

    assert!(matches!(result, Err(Error::OverlappingTrees { .. })));
    project.assert_file_not_exists(KNOWLEDGE);
}

#[test]
fn docs_inside_knowledge_is_rejected() {
    let project = TestProject::new();
    project.write_doc("a.txt", "a");
    let config = KnowledgeConfig {
        knowledge_dir: "biased".into(),
        ..KnowledgeConfig::default()
    };

    let result = KnowledgeSync::with_config(NormalizedPath::new(project.root()), config).run();

    assert!(matches!(result, Err(Error::OverlappingTrees { .. })));
    project.assert_file_not_exists("biased/summary.md");
}

#[test]
fn overlapping_config_file_fails_to_load() {
    let project = TestProject::new();
    project.write("biased/config.toml", "[knowledge]\nknowledge_dir = \"biased/docs\"\n");

    let err = KnowledgeSync::new(NormalizedPath::new(project.root())).unwrap_err();

    assert!(matches!(err, Error::OverlappingTrees { .. }));
}

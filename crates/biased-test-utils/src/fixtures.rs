//! Canned file contents used across test suites.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// The required framework files with contents that pass validation.
pub const VALID_FRAMEWORK_FILES: &[(&str, &str)] = &[
    ("biased/intent/intent.md", "# Intent\n"),
    ("biased/behavior/behavior-spec.md", "# Behavior\n"),
    (
        "biased/eval/eval-set.jsonl",
        "{\"id\": \"e1\", \"input\": \"hi\"}\n\n{\"id\": \"e2\", \"input\": \"bye\"}\n",
    ),
    ("biased/metrics/metrics-hook.json", "{\"metrics\": []}\n"),
    ("biased/governance/risk-register.md", "# Risks\n"),
];

/// Build a minimal `.docx` archive whose body holds one paragraph per entry.
pub fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|text| format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    writer.start_file("[Content_Types].xml", options).unwrap();
    writer
        .write_all(b"<?xml version=\"1.0\"?><Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\"/>")
        .unwrap();
    writer.start_file("word/document.xml", options).unwrap();
    writer.write_all(document.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

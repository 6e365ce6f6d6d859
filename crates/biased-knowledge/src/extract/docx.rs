//! `.docx` text extraction
//!
//! A docx file is a zip archive; the body text lives in `word/document.xml`
//! as `<w:t>` runs grouped into `<w:p>` paragraphs.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use super::WordExtractor;
use crate::{Error, Result};

const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts raw paragraph text from `.docx` files.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl WordExtractor for DocxExtractor {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let file = File::open(path).map_err(|e| biased_fs::Error::io(path, e))?;
        let mut archive =
            zip::ZipArchive::new(file).map_err(|e| Error::extraction("docx", path, e))?;

        let mut xml = String::new();
        archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| Error::extraction("docx", path, e))?
            .read_to_string(&mut xml)
            .map_err(|e| Error::extraction("docx", path, e))?;

        document_text(&xml).map_err(|e| Error::extraction("docx", path, e))
    }
}

/// Flatten WordprocessingML into plain text, one blank line per paragraph.
pub(crate) fn document_text(xml: &str) -> std::result::Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

//! Per-format converters
//!
//! [`convert`] picks the converter for a document's [`FormatKind`] and
//! returns the markdown body that goes under the artifact title.

pub mod binary;
pub mod tabular;

use biased_fs::io;

use crate::Result;
use crate::document::SourceDocument;
use crate::extract::Extractors;
use crate::format::FormatKind;

/// Convert one source document to markdown content.
pub fn convert(source: &SourceDocument, extractors: &Extractors) -> Result<String> {
    match source.kind {
        FormatKind::WordDocument => extractors.word.extract_text(&source.absolute.to_native()),
        FormatKind::Pdf => {
            let bytes = io::read_bytes(&source.absolute)?;
            extractors.pdf.extract_text(&bytes)
        }
        FormatKind::Spreadsheet => {
            let sheets = extractors
                .workbook
                .read_sheets(&source.absolute.to_native())?;
            Ok(tabular::sheets_to_markdown(&sheets))
        }
        FormatKind::PlainText => {
            // Non-UTF-8 notes (Latin-1, Windows-1252) still get an artifact
            let bytes = io::read_bytes(&source.absolute)?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        FormatKind::Binary => Ok(binary::metadata_stub(source)),
    }
}

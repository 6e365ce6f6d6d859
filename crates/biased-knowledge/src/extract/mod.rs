//! Rich-document extraction services
//!
//! Each extractor is a narrow contract: a document goes in, plain text (or
//! serialized sheets) comes out, and malformed input is an error. The engine
//! only sees the traits, so tests can swap in fakes.

mod docx;
mod pdf;
mod workbook;

use std::path::Path;

use crate::Result;

pub use docx::DocxExtractor;
pub use pdf::PdfTextExtractor;
pub use workbook::{CalamineReader, rows_to_csv};

/// Extracts linear text from a word-processor document on disk.
pub trait WordExtractor: Send + Sync {
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Extracts text from an in-memory PDF.
pub trait PdfExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}

/// Reads every sheet of a workbook in declared order.
pub trait WorkbookReader: Send + Sync {
    fn read_sheets(&self, path: &Path) -> Result<Vec<Sheet>>;
}

/// One worksheet serialized as comma-separated lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub csv: String,
}

impl Sheet {
    pub fn new(name: impl Into<String>, csv: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            csv: csv.into(),
        }
    }
}

/// The set of extraction services used by one sync run.
pub struct Extractors {
    pub word: Box<dyn WordExtractor>,
    pub pdf: Box<dyn PdfExtractor>,
    pub workbook: Box<dyn WorkbookReader>,
}

impl Extractors {
    pub fn with_word(mut self, word: impl WordExtractor + 'static) -> Self {
        self.word = Box::new(word);
        self
    }

    pub fn with_pdf(mut self, pdf: impl PdfExtractor + 'static) -> Self {
        self.pdf = Box::new(pdf);
        self
    }

    pub fn with_workbook(mut self, workbook: impl WorkbookReader + 'static) -> Self {
        self.workbook = Box::new(workbook);
        self
    }
}

impl Default for Extractors {
    fn default() -> Self {
        Self {
            word: Box::new(DocxExtractor),
            pdf: Box::new(PdfTextExtractor),
            workbook: Box::new(CalamineReader),
        }
    }
}

impl std::fmt::Debug for Extractors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractors").finish_non_exhaustive()
    }
}

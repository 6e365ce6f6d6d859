//! PDF text extraction backed by `pdf-extract`

use std::panic::{self, AssertUnwindSafe};

use super::PdfExtractor;
use crate::{Error, Result};

/// Extracts the text layer of a PDF held in memory.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String> {
        // pdf-extract panics on some malformed inputs
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(Error::extraction("pdf", "<memory>", e)),
            Err(_) => Err(Error::extraction(
                "pdf",
                "<memory>",
                "extractor panicked on malformed input",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let result = PdfTextExtractor.extract_text(b"not a pdf at all");
        assert!(result.is_err());
    }
}

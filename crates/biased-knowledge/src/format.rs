//! Extension-based format dispatch

use biased_fs::NormalizedPath;

/// Conversion strategy for a source document.
///
/// Every file maps to exactly one kind; anything unrecognised is treated as
/// an opaque binary asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// `.docx` word-processor documents
    WordDocument,
    /// `.pdf` documents
    Pdf,
    /// `.xlsx` / `.xls` workbooks
    Spreadsheet,
    /// `.md` / `.txt`, copied verbatim
    PlainText,
    /// Everything else, described by a metadata stub
    Binary,
}

impl FormatKind {
    /// Classify a file by its extension, case-insensitively.
    pub fn from_path(path: &NormalizedPath) -> Self {
        let extension = path.extension().map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("docx") => Self::WordDocument,
            Some("pdf") => Self::Pdf,
            Some("xlsx") | Some("xls") => Self::Spreadsheet,
            Some("md") | Some("txt") => Self::PlainText,
            _ => Self::Binary,
        }
    }

    /// Short label used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WordDocument => "docx",
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
            Self::PlainText => "text",
            Self::Binary => "binary",
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

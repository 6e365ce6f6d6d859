//! Knowledge base synchronization for the BIASED toolkit
//!
//! Converts the documents under `biased/docs/` into a normalized markdown
//! knowledge base under `biased/knowledge/`:
//!
//! - **Format dispatch**: every source file maps to one [`FormatKind`]
//! - **Converters**: text passthrough, spreadsheet tables, binary metadata
//!   stubs and rich-document text extraction
//! - **Change detection**: timestamp or checksum freshness per artifact
//! - **Reconciliation**: artifacts without a source are deleted
//! - **Summary**: `summary.md` is regenerated on every run
//!
//! # Architecture
//!
//! ```text
//!             KnowledgeSync (engine)
//!                     |
//!     +---------+-----+------+----------+
//!     |         |            |          |
//!   walker   detect      convert     summary
//!                            |
//!                   FormatKind + Extractors
//! ```

pub mod config;
pub mod convert;
pub mod detect;
pub mod document;
pub mod engine;
pub mod error;
pub mod extract;
pub mod format;
pub mod summary;
pub mod walker;

pub use config::KnowledgeConfig;
pub use detect::{ChangeDetection, Freshness};
pub use document::SourceDocument;
pub use engine::{KnowledgeSync, SyncOutcome};
pub use error::{Error, Result};
pub use extract::{
    CalamineReader, DocxExtractor, Extractors, PdfExtractor, PdfTextExtractor, Sheet,
    WordExtractor, WorkbookReader,
};
pub use format::FormatKind;
pub use summary::{FailedConversion, SyncSummary};

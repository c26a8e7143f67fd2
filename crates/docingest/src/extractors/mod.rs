//! Format-specific extractors.
//!
//! Each [`FormatCategory`] maps to exactly one extractor through
//! [`FormatCategory::extractor`]. The mapping is a plain `match`, so adding a
//! category without an extractor fails to compile.
//!
//! Extractors implement [`FormatExtractor::try_extract`] with ordinary `?`
//! error propagation. Callers go through [`FormatExtractor::extract`], which
//! turns every error, and every panic raised by a parsing backend, into a
//! [`ExtractionOutcome::Degraded`] note.

use crate::core::classify::FormatCategory;
use crate::core::config::IngestConfig;
use crate::types::ExtractionOutcome;
use crate::{IngestError, Result};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

pub mod binary;
pub mod docx;
pub mod jupyter;
pub mod pdf;
pub mod text;

pub use binary::BinaryExtractor;
pub use docx::DocxExtractor;
pub use jupyter::NotebookExtractor;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;

static TEXT_EXTRACTOR: TextExtractor = TextExtractor;
static NOTEBOOK_EXTRACTOR: NotebookExtractor = NotebookExtractor;
static PDF_EXTRACTOR: PdfExtractor = PdfExtractor;
static DOCX_EXTRACTOR: DocxExtractor = DocxExtractor;
static BINARY_EXTRACTOR: BinaryExtractor = BinaryExtractor;

/// A strategy that turns a file of one category into text and structure.
///
/// Implementations are stateless unit structs; one instance serves every call.
pub trait FormatExtractor: Send + Sync {
    /// Stable kebab-case name, used in log events.
    fn name(&self) -> &'static str;

    /// Extract from `path`, propagating failures with `?`.
    ///
    /// Implementations may already return `Degraded` or `Fallback` outcomes
    /// when they recover partial output themselves.
    fn try_extract(&self, path: &Path, category: FormatCategory, config: &IngestConfig) -> Result<ExtractionOutcome>;

    /// Render an extraction error as a record note.
    fn failure_note(&self, err: &IngestError) -> String {
        format!("Error during processing: {}", err)
    }

    /// Extract from `path`, containing every failure.
    ///
    /// This never returns an error and never unwinds.
    fn extract(&self, path: &Path, category: FormatCategory, config: &IngestConfig) -> ExtractionOutcome {
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| self.try_extract(path, category, config)));

        let err = match attempt {
            Ok(Ok(outcome)) => return outcome,
            Ok(Err(err)) => err,
            Err(payload) => IngestError::Other(format!("extractor panicked: {}", panic_message(payload.as_ref()))),
        };

        tracing::debug!(
            extractor = self.name(),
            path = %path.display(),
            error = %err,
            "extraction failed, continuing with a note"
        );
        ExtractionOutcome::failed(self.failure_note(&err))
    }
}

impl FormatCategory {
    /// The extractor responsible for this category.
    pub fn extractor(&self) -> &'static dyn FormatExtractor {
        match self {
            FormatCategory::PlainText | FormatCategory::StructuredText(_) => &TEXT_EXTRACTOR,
            FormatCategory::Notebook => &NOTEBOOK_EXTRACTOR,
            FormatCategory::Pdf => &PDF_EXTRACTOR,
            FormatCategory::Docx => &DOCX_EXTRACTOR,
            FormatCategory::BinaryUnknown => &BINARY_EXTRACTOR,
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

//! Errors raised by the lopdf backend.
//!
//! They never reach callers directly: the PDF extractor converts them into
//! `IngestError::Parsing` and from there into a record note.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PdfError {
    /// The file could not be parsed as a PDF document.
    #[error("Invalid PDF: {0}")]
    Malformed(String),

    /// Encrypted document whose pages all failed to decode.
    #[error("PDF is encrypted and no page could be decoded")]
    Encrypted,

    /// Text extraction failed for a single page.
    #[error("Text extraction failed: {0}")]
    PageText(String),

    /// The backend hit an I/O error while reading the file.
    #[error("I/O error: {0}")]
    Read(String),
}

#[cfg(feature = "pdf")]
impl From<lopdf::Error> for PdfError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(io_err) => PdfError::Read(io_err.to_string()),
            other => PdfError::Malformed(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PdfError>;

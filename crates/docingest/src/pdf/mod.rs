//! PDF text extraction backed by `lopdf`.
//!
//! The error type is always available so the PDF extractor can report a
//! missing backend; the text layer requires the `pdf` feature.

pub mod error;
#[cfg(feature = "pdf")]
pub mod text;

pub use error::PdfError;
#[cfg(feature = "pdf")]
pub use text::{PageText, PdfTextExtractor};

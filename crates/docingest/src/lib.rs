//! docingest - Multi-format Document Ingestion
//!
//! Given a path, docingest classifies the file by extension, extracts whatever
//! text and structure its format allows, and returns one normalized
//! [`IngestionRecord`]. Extraction failures never abort the call; they are
//! reported in the record's `notes`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docingest::ingest;
//!
//! # fn main() -> docingest::Result<()> {
//! let record = ingest("analysis.ipynb")?;
//! println!("{}", record.extracted_content.unwrap_or_default());
//! # Ok(())
//! # }
//! ```
//!
//! # Supported Formats
//!
//! - Plain text: `.txt .md .markdown .py .yaml .yml .csv .tsv .toml .log .rst`
//! - JSON (`.json`): raw text plus the parsed tree
//! - Jupyter notebooks (`.ipynb`): cell sources plus a per-cell summary
//! - PDF (`.pdf`, feature `pdf`): page text via lopdf
//! - Word (`.docx`, feature `office`): paragraph text via docx-lite
//! - Everything else: hex preview of the first bytes
//!
//! # Architecture
//!
//! - **Core Module** (`core`): classification, assembly, entry points, config, I/O, MIME
//! - **Extractors** (`extractors`): one stateless extractor per format category
//! - **PDF** (`pdf`): lopdf wrapper with per-page error reporting

#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod extractors;
pub mod pdf;
pub mod types;

pub use error::{IngestError, Result};
pub use types::*;

pub use core::classify::{classify, Classification, FormatCategory, StructuredFormat};
pub use core::config::IngestConfig;
#[cfg(feature = "tokio-runtime")]
pub use core::ingest::batch_ingest;
pub use core::ingest::{batch_ingest_sync, ingest, ingest_with_config};
pub use core::mime::{
    guess_mime_type, CSV_MIME_TYPE, DOCX_MIME_TYPE, JSON_MIME_TYPE, MARKDOWN_MIME_TYPE, NOTEBOOK_MIME_TYPE,
    PDF_MIME_TYPE, PLAIN_TEXT_MIME_TYPE, PYTHON_MIME_TYPE, TOML_MIME_TYPE, YAML_MIME_TYPE,
};
pub use extractors::FormatExtractor;

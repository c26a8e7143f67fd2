//! Core ingestion pipeline.
//!
//! A file moves through three stages:
//! - **Classification** (`classify`): extension to [`FormatCategory`], MIME guess, size
//! - **Extraction** (`crate::extractors`): category-specific text and structure
//! - **Assembly** (`assemble`): a single [`IngestionRecord`](crate::IngestionRecord)
//!
//! The entry points in `ingest` tie the stages together. `config`, `io` and
//! `mime` are shared utilities.
//!
//! # Example
//!
//! ```rust,no_run
//! use docingest::core::ingest::ingest_with_config;
//! use docingest::core::config::IngestConfig;
//!
//! # fn main() -> docingest::Result<()> {
//! let config = IngestConfig::default();
//! let record = ingest_with_config("report.pdf", &config)?;
//! println!("{}", record.notes);
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod classify;
pub mod config;
pub mod ingest;
pub mod io;
pub mod mime;

pub use assemble::assemble;
pub use classify::{classify, Classification, FormatCategory, StructuredFormat};
pub use config::{IngestConfig, DEFAULT_BINARY_PREVIEW_BYTES};
#[cfg(feature = "tokio-runtime")]
pub use ingest::batch_ingest;
pub use ingest::{batch_ingest_sync, ingest, ingest_with_config};
pub use mime::guess_mime_type;

//! Error types for docingest.
//!
//! Errors come in two tiers:
//!
//! **Fatal errors bubble up to the caller of [`ingest`](crate::ingest):**
//! - `NotFound` - the requested path does not exist
//! - `Io` - the path exists but its metadata cannot be read
//! - `Validation` - invalid configuration
//!
//! `Io` is the one variant that also occurs inside extractors (a file that
//! vanishes or cannot be read after classification). There it is contained
//! like any other extraction failure.
//!
//! **Contained errors never leave an extractor.** They are raised inside the
//! format-specific code paths and rendered into the record's `notes` through
//! their `Display` implementation:
//! - `Parsing` - malformed JSON, notebooks, PDFs, DOCX packages
//! - `MissingDependency` - a format backend compiled out via cargo features
//! - `Other` - everything else, including panics caught at the extractor boundary
//!
//! # Example
//!
//! ```rust
//! use docingest::{IngestError, ingest};
//!
//! let err = ingest("/definitely/not/here.txt").unwrap_err();
//! assert!(matches!(err, IngestError::NotFound { .. }));
//! ```
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `IngestError`.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Main error type for all docingest operations.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<crate::pdf::error::PdfError> for IngestError {
    fn from(err: crate::pdf::error::PdfError) -> Self {
        IngestError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl IngestError {
    error_constructor!(parsing, Parsing);
    error_constructor!(validation, Validation);
    error_constructor!(serialization, Serialization);

    /// Create a `NotFound` error for `path`.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Whether this error belongs to the fatal tier, i.e. the kind the
    /// engine propagates when it occurs before extraction starts.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::Io(_) | Self::Validation { .. })
    }
}

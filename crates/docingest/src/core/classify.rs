//! Extension-driven file classification.
//!
//! Classification looks at the path and its file-system metadata only. The
//! file's content is never opened here.

use crate::core::{io, mime};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Structured text formats that get a parsed tree in addition to raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuredFormat {
    Json,
}

/// Format category a file is dispatched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatCategory {
    PlainText,
    StructuredText(StructuredFormat),
    Notebook,
    Pdf,
    Docx,
    BinaryUnknown,
}

impl FormatCategory {
    /// Map a bare extension (no leading dot, any case) to its category.
    pub fn from_extension(extension: &str) -> Self {
        match extension.to_ascii_lowercase().as_str() {
            "txt" | "md" | "markdown" | "py" | "yaml" | "yml" | "csv" | "tsv" | "toml" | "log" | "rst" => {
                Self::PlainText
            }
            "json" => Self::StructuredText(StructuredFormat::Json),
            "ipynb" => Self::Notebook,
            "pdf" => Self::Pdf,
            "docx" => Self::Docx,
            _ => Self::BinaryUnknown,
        }
    }

    /// Whether the category is read as text in full.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::PlainText | Self::StructuredText(_))
    }
}

/// Classifier output consumed by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: FormatCategory,
    pub filename: String,
    /// Lower-cased, with leading dot, or empty.
    pub extension: String,
    pub mime_type: Option<String>,
    pub size_bytes: u64,
}

/// Classify `path`.
///
/// # Errors
///
/// Returns `IngestError::NotFound` if the path does not exist. This is the
/// only failure the engine does not fold into a record.
pub fn classify(path: impl AsRef<Path>) -> Result<Classification> {
    let path = path.as_ref();
    let metadata = io::file_metadata(path)?;

    let raw_extension = path.extension().and_then(|ext| ext.to_str());
    let category = raw_extension
        .map(FormatCategory::from_extension)
        .unwrap_or(FormatCategory::BinaryUnknown);

    Ok(Classification {
        category,
        filename: file_name(path),
        extension: dotted_extension(path),
        mime_type: mime::guess_mime_type(path),
        size_bytes: metadata.len(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `report.PDF` -> `.pdf`, `Makefile` -> ``, `name.` -> `.`
fn dotted_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}

//! DOCX extractor using docx-lite.
//!
//! Supports: Microsoft Word (.docx)

use super::FormatExtractor;
use crate::core::classify::FormatCategory;
use crate::core::config::IngestConfig;
use crate::types::ExtractionOutcome;
use crate::{IngestError, Result};
use std::path::Path;

/// Joins the text of every body paragraph, in document order, with newlines.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "office")]
    fn paragraphs_to_text(paragraphs: &[docx_lite::Paragraph]) -> String {
        paragraphs
            .iter()
            .map(|paragraph| paragraph.to_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FormatExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx-extractor"
    }

    #[cfg(feature = "office")]
    fn try_extract(&self, path: &Path, _category: FormatCategory, _config: &IngestConfig) -> Result<ExtractionOutcome> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let document = docx_lite::parse_document(reader)
            .map_err(|e| IngestError::parsing(format!("Failed to open DOCX package: {}", e)))?;

        Ok(ExtractionOutcome::complete(Self::paragraphs_to_text(&document.paragraphs)))
    }

    #[cfg(not(feature = "office"))]
    fn try_extract(&self, _path: &Path, _category: FormatCategory, _config: &IngestConfig) -> Result<ExtractionOutcome> {
        Err(IngestError::MissingDependency(
            "DOCX support requires the `office` feature".to_string(),
        ))
    }

    fn failure_note(&self, err: &IngestError) -> String {
        format!("DOCX parsing failed: {}", err)
    }
}

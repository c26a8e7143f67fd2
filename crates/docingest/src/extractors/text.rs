//! Plain text and structured text extractor.

use super::FormatExtractor;
use crate::core::classify::{FormatCategory, StructuredFormat};
use crate::core::config::IngestConfig;
use crate::core::io::{decode_text, read_file};
use crate::types::{ExtractionOutcome, Structure};
use crate::{IngestError, Result};
use std::path::Path;

pub(crate) const LOSSY_DECODE_NOTE: &str = "Invalid UTF-8 sequences were replaced during decoding.";

/// Reads the whole file as UTF-8 text.
///
/// Undecodable bytes are replaced instead of failing the read. For JSON files
/// the text is additionally parsed into a [`Structure::Json`] tree; a parse
/// failure keeps the raw text and attaches a note.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn parse_structure(format: StructuredFormat, text: &str) -> Result<Structure> {
        match format {
            StructuredFormat::Json => serde_json::from_str(text)
                .map(Structure::Json)
                .map_err(|e| IngestError::parsing_with_source(format!("JSON parsing failed: {}", e), e)),
        }
    }
}

impl FormatExtractor for TextExtractor {
    fn name(&self) -> &'static str {
        "text-extractor"
    }

    fn try_extract(&self, path: &Path, category: FormatCategory, _config: &IngestConfig) -> Result<ExtractionOutcome> {
        if !category.is_text() {
            return Err(IngestError::UnsupportedFormat(format!("{:?} is not a text category", category)));
        }

        let bytes = read_file(path)?;
        let (content, lossy) = decode_text(&bytes);

        let mut notes = Vec::new();
        if lossy {
            notes.push(LOSSY_DECODE_NOTE.to_string());
        }

        let structure = match category {
            FormatCategory::StructuredText(format) => match Self::parse_structure(format, &content) {
                Ok(structure) => Some(structure),
                Err(IngestError::Parsing { message, .. }) => {
                    notes.push(message);
                    None
                }
                Err(other) => return Err(other),
            },
            _ => None,
        };

        if notes.is_empty() {
            Ok(ExtractionOutcome::Complete { content, structure })
        } else {
            Ok(ExtractionOutcome::Degraded {
                content: Some(content),
                structure,
                note: notes.join(" "),
            })
        }
    }
}

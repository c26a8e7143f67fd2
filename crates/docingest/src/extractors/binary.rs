//! Fallback extractor for unrecognized or binary files.

use super::FormatExtractor;
use crate::core::classify::FormatCategory;
use crate::core::config::IngestConfig;
use crate::core::io::read_prefix;
use crate::types::ExtractionOutcome;
use crate::Result;
use std::path::Path;

/// Hex-encodes a bounded prefix of the file.
///
/// Only `config.binary_preview_bytes` bytes are ever read; the content is never
/// interpreted, so any byte sequence yields a `Fallback` outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct BinaryExtractor;

impl BinaryExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Note attached to every fallback record.
    pub fn fallback_note(limit: usize) -> String {
        format!(
            "Binary or unsupported file type. Only first {} read for inspection.",
            human_size(limit)
        )
    }
}

impl FormatExtractor for BinaryExtractor {
    fn name(&self) -> &'static str {
        "binary-extractor"
    }

    fn try_extract(&self, path: &Path, _category: FormatCategory, config: &IngestConfig) -> Result<ExtractionOutcome> {
        let limit = config.binary_preview_bytes;
        let prefix = read_prefix(path, limit)?;

        Ok(ExtractionOutcome::Fallback {
            content: hex::encode(prefix),
            note: Self::fallback_note(limit),
        })
    }
}

fn human_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{}KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

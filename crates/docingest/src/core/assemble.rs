//! Record assembly.

use crate::core::classify::Classification;
use crate::types::{ExtractionOutcome, IngestionRecord};

/// Combine classifier output and an extraction outcome into the final record.
///
/// Pure and infallible. `structure` only ever comes from the outcome.
pub fn assemble(classification: Classification, outcome: ExtractionOutcome) -> IngestionRecord {
    let Classification {
        filename,
        extension,
        mime_type,
        size_bytes,
        ..
    } = classification;

    let (extracted_content, structure, notes) = match outcome {
        ExtractionOutcome::Complete { content, structure } => (Some(content), structure, String::new()),
        ExtractionOutcome::Degraded {
            content,
            structure,
            note,
        } => (content, structure, note),
        ExtractionOutcome::Fallback { content, note } => (Some(content), None, note),
    };

    IngestionRecord {
        filename,
        extension,
        mime_type,
        size_bytes,
        extracted_content,
        structure,
        notes,
    }
}

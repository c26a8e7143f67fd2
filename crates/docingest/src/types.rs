use serde::{Deserialize, Serialize};

/// Normalized ingestion result.
///
/// Exactly one record is produced per successful [`ingest`](crate::ingest)
/// call. Extraction failures never prevent a record from being built; they are
/// reported through `notes` instead. An empty `notes` string means extraction
/// completed cleanly.
///
/// `structure` is omitted from the serialized form when absent. On
/// deserialization its kind follows `extension`: `.ipynb` records carry a
/// notebook summary, every other record carries a JSON tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordRepr")]
pub struct IngestionRecord {
    /// Base name of the ingested path.
    pub filename: String,

    /// Lower-cased extension including the leading dot, or empty.
    pub extension: String,

    /// Best-effort MIME type guess.
    pub mime_type: Option<String>,

    /// Size of the file at classification time.
    pub size_bytes: u64,

    /// Text payload.
    pub extracted_content: Option<String>,

    /// Structured payload, only for JSON and notebook files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<Structure>,

    /// Diagnostic notes; empty on clean success.
    pub notes: String,
}

impl IngestionRecord {
    /// Whether extraction completed without any diagnostic.
    pub fn is_clean(&self) -> bool {
        self.notes.is_empty()
    }

    /// Serialize the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Wire shape of [`IngestionRecord`] before the structure kind is resolved.
#[derive(Deserialize)]
struct RecordRepr {
    filename: String,
    extension: String,
    mime_type: Option<String>,
    size_bytes: u64,
    extracted_content: Option<String>,
    #[serde(default, deserialize_with = "present_value")]
    structure: Option<serde_json::Value>,
    notes: String,
}

/// A present key always yields `Some`, including an explicit `null`.
fn present_value<'de, D>(deserializer: D) -> std::result::Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

impl TryFrom<RecordRepr> for IngestionRecord {
    type Error = serde_json::Error;

    fn try_from(repr: RecordRepr) -> std::result::Result<Self, Self::Error> {
        let structure = match repr.structure {
            None => None,
            Some(value) if repr.extension == NOTEBOOK_EXTENSION => {
                Some(Structure::Notebook(serde_json::from_value(value)?))
            }
            Some(value) => Some(Structure::Json(value)),
        };

        Ok(Self {
            filename: repr.filename,
            extension: repr.extension,
            mime_type: repr.mime_type,
            size_bytes: repr.size_bytes,
            extracted_content: repr.extracted_content,
            structure,
            notes: repr.notes,
        })
    }
}

const NOTEBOOK_EXTENSION: &str = ".ipynb";

/// Structured payload attached to a record.
///
/// Serialized without a tag so the payload appears exactly as parsed (for
/// JSON documents) or as the notebook summary object. There is no
/// `Deserialize` impl: the two shapes overlap, so only the owning record can
/// tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Structure {
    Notebook(NotebookStructure),
    Json(serde_json::Value),
}

impl Structure {
    pub fn as_notebook(&self) -> Option<&NotebookStructure> {
        match self {
            Structure::Notebook(nb) => Some(nb),
            Structure::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Structure::Json(value) => Some(value),
            Structure::Notebook(_) => None,
        }
    }
}

/// Summary of a Jupyter notebook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotebookStructure {
    /// Top-level `nbformat` value exactly as written, when present and not
    /// `null`. Usually the integer major version, but never coerced.
    #[serde(default)]
    pub nbformat: Option<serde_json::Value>,
    pub total_cells: usize,
    pub cells: Vec<NotebookCellSummary>,
}

/// One notebook cell in document order.
///
/// `cell_index` is the zero-based position in the `cells` array, not a stable
/// identifier across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotebookCellSummary {
    pub cell_index: usize,
    pub cell_type: Option<String>,
    pub source: String,
}

/// What an extractor produced for a single file.
///
/// The three variants are the only states a record can end up in.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// Extraction succeeded; notes stay empty.
    Complete {
        content: String,
        structure: Option<Structure>,
    },
    /// Extraction failed part-way or entirely. Whatever was recovered is kept.
    Degraded {
        content: Option<String>,
        structure: Option<Structure>,
        note: String,
    },
    /// No format-specific handler applied; a bounded preview was taken instead.
    Fallback { content: String, note: String },
}

impl ExtractionOutcome {
    pub fn complete(content: impl Into<String>) -> Self {
        Self::Complete {
            content: content.into(),
            structure: None,
        }
    }

    /// A failure with nothing recovered.
    pub fn failed(note: impl Into<String>) -> Self {
        Self::Degraded {
            content: None,
            structure: None,
            note: note.into(),
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Complete { content, .. } | Self::Fallback { content, .. } => Some(content),
            Self::Degraded { content, .. } => content.as_deref(),
        }
    }

    pub fn note(&self) -> Option<&str> {
        match self {
            Self::Complete { .. } => None,
            Self::Degraded { note, .. } | Self::Fallback { note, .. } => Some(note),
        }
    }
}

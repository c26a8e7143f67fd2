//! Jupyter Notebook extractor for .ipynb files.
//!
//! Produces one [`NotebookCellSummary`] per cell, in document order, and the
//! cell sources joined by blank lines as the text payload. Outputs, metadata
//! and execution counts are not part of the summary.

use super::FormatExtractor;
use crate::core::classify::FormatCategory;
use crate::core::config::IngestConfig;
use crate::core::io::read_file;
use crate::types::{ExtractionOutcome, NotebookCellSummary, NotebookStructure, Structure};
use crate::{IngestError, Result};
use serde_json::Value;
use std::path::Path;

const CELL_SEPARATOR: &str = "\n\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct NotebookExtractor;

impl NotebookExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse notebook bytes into a summary.
    ///
    /// The whole notebook fails on the first malformed cell; no partial cell
    /// list is returned.
    pub fn parse_notebook(content: &[u8]) -> Result<NotebookStructure> {
        let notebook: Value = serde_json::from_slice(content)
            .map_err(|e| IngestError::parsing_with_source(format!("Failed to parse JSON: {}", e), e))?;

        let root = notebook
            .as_object()
            .ok_or_else(|| IngestError::parsing("notebook root is not a JSON object"))?;

        let cells = match root.get("cells") {
            None => Vec::new(),
            Some(Value::Array(cells)) => cells
                .iter()
                .enumerate()
                .map(|(cell_index, cell)| Self::summarize_cell(cell_index, cell))
                .collect::<Result<Vec<_>>>()?,
            Some(_) => return Err(IngestError::parsing("`cells` is not an array")),
        };

        Ok(NotebookStructure {
            nbformat: root.get("nbformat").filter(|value| !value.is_null()).cloned(),
            total_cells: cells.len(),
            cells,
        })
    }

    fn summarize_cell(cell_index: usize, cell: &Value) -> Result<NotebookCellSummary> {
        let cell = cell
            .as_object()
            .ok_or_else(|| IngestError::parsing(format!("cell {} is not a JSON object", cell_index)))?;

        let cell_type = cell.get("cell_type").and_then(Value::as_str).map(str::to_string);

        let source = match cell.get("source") {
            None => String::new(),
            Some(source) => Self::extract_source(source)
                .ok_or_else(|| IngestError::parsing(format!("cell {} has a malformed `source` field", cell_index)))?,
        };

        Ok(NotebookCellSummary {
            cell_index,
            cell_type,
            source,
        })
    }

    /// Source can be either a string or an array of strings, concatenated
    /// without added delimiters.
    fn extract_source(source: &Value) -> Option<String> {
        match source {
            Value::String(s) => Some(s.clone()),
            Value::Array(fragments) => fragments.iter().map(Value::as_str).collect::<Option<String>>(),
            _ => None,
        }
    }
}

impl FormatExtractor for NotebookExtractor {
    fn name(&self) -> &'static str {
        "notebook-extractor"
    }

    fn try_extract(&self, path: &Path, _category: FormatCategory, _config: &IngestConfig) -> Result<ExtractionOutcome> {
        let bytes = read_file(path)?;
        let notebook = Self::parse_notebook(&bytes)?;

        let content = notebook
            .cells
            .iter()
            .map(|cell| cell.source.as_str())
            .collect::<Vec<_>>()
            .join(CELL_SEPARATOR);

        Ok(ExtractionOutcome::Complete {
            content,
            structure: Some(Structure::Notebook(notebook)),
        })
    }

    fn failure_note(&self, err: &IngestError) -> String {
        format!("Notebook parsing failed: {}", err)
    }
}

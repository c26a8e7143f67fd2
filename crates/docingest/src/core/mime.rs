//! MIME type guessing.
//!
//! Guesses are derived from the file extension only. An explicit table covers
//! the formats this engine dispatches on, and `mime_guess` handles the rest.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

pub const PLAIN_TEXT_MIME_TYPE: &str = "text/plain";
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";
pub const CSV_MIME_TYPE: &str = "text/csv";
pub const JSON_MIME_TYPE: &str = "application/json";
pub const YAML_MIME_TYPE: &str = "application/x-yaml";
pub const TOML_MIME_TYPE: &str = "application/toml";
pub const PYTHON_MIME_TYPE: &str = "text/x-python";
pub const NOTEBOOK_MIME_TYPE: &str = "application/x-ipynb+json";
pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

static EXT_TO_MIME: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("txt", PLAIN_TEXT_MIME_TYPE);
    m.insert("log", PLAIN_TEXT_MIME_TYPE);
    m.insert("md", MARKDOWN_MIME_TYPE);
    m.insert("markdown", MARKDOWN_MIME_TYPE);
    m.insert("rst", "text/x-rst");
    m.insert("csv", CSV_MIME_TYPE);
    m.insert("tsv", "text/tab-separated-values");
    m.insert("py", PYTHON_MIME_TYPE);

    m.insert("json", JSON_MIME_TYPE);
    m.insert("yaml", YAML_MIME_TYPE);
    m.insert("yml", YAML_MIME_TYPE);
    m.insert("toml", TOML_MIME_TYPE);
    m.insert("ipynb", NOTEBOOK_MIME_TYPE);

    m.insert("pdf", PDF_MIME_TYPE);
    m.insert("docx", DOCX_MIME_TYPE);

    m
});

/// Guess the MIME type of `path` from its extension.
///
/// Returns `None` when neither the built-in table nor `mime_guess` knows the
/// extension, or when the path has no extension at all.
pub fn guess_mime_type(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|ext| ext.to_str())?.to_lowercase();

    if let Some(mime_type) = EXT_TO_MIME.get(extension.as_str()) {
        return Some(mime_type.to_string());
    }

    mime_guess::from_ext(&extension).first().map(|mime| mime.to_string())
}

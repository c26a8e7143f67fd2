//! PDF document extractor.

use super::FormatExtractor;
use crate::core::classify::FormatCategory;
use crate::core::config::IngestConfig;
use crate::types::ExtractionOutcome;
use crate::{IngestError, Result};
use std::path::Path;

#[cfg(feature = "pdf")]
use crate::pdf::{PageText, PdfTextExtractor};

/// Extracts page text in page order, pages separated by a single newline.
///
/// Pages whose text cannot be extracted contribute an empty string; the
/// record is then degraded with a note naming those pages.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

/// Join page texts in order, one newline between pages.
///
/// The backend ends every page with its own newline; that one is dropped so
/// pages stay a single line break apart. A failed page contributes an empty
/// string and the outcome is degraded with the first error.
#[cfg(feature = "pdf")]
fn join_pages(pages: Vec<PageText>) -> ExtractionOutcome {
    let mut texts = Vec::with_capacity(pages.len());
    let mut failed_pages = Vec::new();
    let mut first_error = None;

    for page in pages {
        match page.text {
            Ok(mut text) => {
                if text.ends_with('\n') {
                    text.pop();
                }
                texts.push(text);
            }
            Err(err) => {
                texts.push(String::new());
                failed_pages.push(page.page_number.to_string());
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
    }

    let content = texts.join("\n");

    match first_error {
        None => ExtractionOutcome::complete(content),
        Some(err) => ExtractionOutcome::Degraded {
            content: Some(content),
            structure: None,
            note: format!(
                "PDF text extraction failed on page(s) {}: {}",
                failed_pages.join(", "),
                err
            ),
        },
    }
}

impl FormatExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf-extractor"
    }

    #[cfg(feature = "pdf")]
    fn try_extract(&self, path: &Path, _category: FormatCategory, _config: &IngestConfig) -> Result<ExtractionOutcome> {
        let backend = PdfTextExtractor::new();
        let document = backend.load_file(path)?;
        let pages = backend.extract_pages(&document)?;

        Ok(join_pages(pages))
    }

    #[cfg(not(feature = "pdf"))]
    fn try_extract(&self, _path: &Path, _category: FormatCategory, _config: &IngestConfig) -> Result<ExtractionOutcome> {
        Err(IngestError::MissingDependency(
            "PDF support requires the `pdf` feature".to_string(),
        ))
    }

    fn failure_note(&self, err: &IngestError) -> String {
        format!("PDF parsing failed: {}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_corrupt_pdf_becomes_note() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        fs::write(&path, b"%PDF-1.4\n1 0 obj\n<<").unwrap();

        let outcome = PdfExtractor::new().extract(&path, FormatCategory::Pdf, &IngestConfig::default());
        assert_eq!(outcome.content(), None);
        assert!(outcome.note().unwrap().starts_with("PDF parsing failed:"));
    }

    #[test]
    fn test_empty_pdf_becomes_note() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.pdf");
        fs::write(&path, b"").unwrap();

        let outcome = PdfExtractor::new().extract(&path, FormatCategory::Pdf, &IngestConfig::default());
        assert!(outcome.note().unwrap().starts_with("PDF parsing failed:"));
    }

    #[cfg(feature = "pdf")]
    mod pages {
        use super::super::join_pages;
        use crate::pdf::{PageText, PdfError};
        use crate::types::ExtractionOutcome;

        fn ok(page_number: u32, text: &str) -> PageText {
            PageText {
                page_number,
                text: Ok(text.to_string()),
            }
        }

        fn failed(page_number: u32, message: &str) -> PageText {
            PageText {
                page_number,
                text: Err(PdfError::PageText(message.to_string())),
            }
        }

        #[test]
        fn test_pages_joined_by_single_newline() {
            let outcome = join_pages(vec![ok(1, "First page\n"), ok(2, "Second page\n")]);
            assert_eq!(outcome, ExtractionOutcome::complete("First page\nSecond page"));
        }

        #[test]
        fn test_page_without_trailing_newline_kept_whole() {
            let outcome = join_pages(vec![ok(1, "one"), ok(2, "two\n\n")]);
            assert_eq!(outcome.content(), Some("one\ntwo\n"));
        }

        #[test]
        fn test_failed_pages_leave_empty_slots() {
            let outcome = join_pages(vec![
                ok(1, "Good page\n"),
                failed(2, "bad stream"),
                ok(3, "Last page\n"),
                failed(4, "missing font"),
            ]);

            assert_eq!(
                outcome,
                ExtractionOutcome::Degraded {
                    content: Some("Good page\n\nLast page\n".to_string()),
                    structure: None,
                    note: "PDF text extraction failed on page(s) 2, 4: Text extraction failed: bad stream"
                        .to_string(),
                }
            );
        }

        #[test]
        fn test_every_page_failed() {
            let outcome = join_pages(vec![failed(1, "bad stream")]);
            assert_eq!(outcome.content(), Some(""));
            assert_eq!(
                outcome.note(),
                Some("PDF text extraction failed on page(s) 1: Text extraction failed: bad stream")
            );
        }

        #[test]
        fn test_no_pages() {
            assert_eq!(join_pages(Vec::new()), ExtractionOutcome::complete(""));
        }
    }

    #[test]
    fn test_failure_note_prefix() {
        let note = PdfExtractor.failure_note(&IngestError::MissingDependency("lopdf".to_string()));
        assert_eq!(note, "PDF parsing failed: Missing dependency: lopdf");
    }
}

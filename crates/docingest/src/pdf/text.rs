//! PDF text extraction module.
//!
//! This module provides functions to extract text content from PDF files using the lopdf library.

use super::error::{PdfError, Result};
use lopdf::Document;
use std::path::Path;

/// Text of one page, or the reason it could not be extracted.
#[derive(Debug)]
pub struct PageText {
    /// 1-based page number as reported by the page tree.
    pub page_number: u32,
    pub text: Result<String>,
}

#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn load_file(&self, path: &Path) -> Result<Document> {
        Ok(Document::load(path)?)
    }

    /// Extract every page in page order.
    ///
    /// Page failures are reported per page; the document as a whole only
    /// fails when it is encrypted and no page yields text.
    pub fn extract_pages(&self, document: &Document) -> Result<Vec<PageText>> {
        let pages: Vec<PageText> = document
            .get_pages()
            .keys()
            .map(|&page_number| PageText {
                page_number,
                text: document
                    .extract_text(&[page_number])
                    .map_err(|e| PdfError::PageText(e.to_string())),
            })
            .collect();

        reject_undecodable(document.is_encrypted(), pages)
    }
}

/// An encrypted document where no page decodes is unreadable as a whole.
fn reject_undecodable(encrypted: bool, pages: Vec<PageText>) -> Result<Vec<PageText>> {
    if encrypted && !pages.is_empty() && pages.iter().all(|page| page.text.is_err()) {
        return Err(PdfError::Encrypted);
    }
    Ok(pages)
}

//! File I/O utilities.
//!
//! Every helper here opens at most one handle and drops it before returning,
//! on success and error paths alike.

use crate::{IngestError, Result};
use std::fs::{File, Metadata};
use std::io::Read;
use std::path::Path;

/// Stat a path, mapping a missing entry to `IngestError::NotFound`.
///
/// # Errors
///
/// Returns `IngestError::NotFound` if nothing exists at `path`, and
/// `IngestError::Io` for any other metadata failure (these always bubble up).
pub fn file_metadata(path: impl AsRef<Path>) -> Result<Metadata> {
    let path = path.as_ref();
    std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => IngestError::not_found(path),
        _ => IngestError::Io(e),
    })
}

/// Read a whole file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    std::fs::read(path.as_ref()).map_err(IngestError::Io)
}

/// Read at most `limit` bytes from the start of a file.
pub fn read_prefix(path: impl AsRef<Path>, limit: usize) -> Result<Vec<u8>> {
    let file = File::open(path.as_ref())?;
    let mut buffer = Vec::with_capacity(limit.min(64 * 1024));
    file.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Decode bytes as UTF-8, replacing invalid sequences.
///
/// Returns the decoded text and whether any replacement happened.
pub fn decode_text(bytes: &[u8]) -> (String, bool) {
    match validate_utf8(bytes) {
        Some(text) => (text.to_owned(), false),
        None => (String::from_utf8_lossy(bytes).into_owned(), true),
    }
}

#[cfg(feature = "simd-utf8")]
fn validate_utf8(bytes: &[u8]) -> Option<&str> {
    simdutf8::basic::from_utf8(bytes).ok()
}

#[cfg(not(feature = "simd-utf8"))]
fn validate_utf8(bytes: &[u8]) -> Option<&str> {
    std::str::from_utf8(bytes).ok()
}

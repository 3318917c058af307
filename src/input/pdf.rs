//! PDF text extraction

use crate::error::{MatcherError, Result};

/// Extract plain text from in-memory PDF bytes. Page texts arrive
/// concatenated in page order, separated by newlines.
pub fn extract_text(bytes: &[u8], source: &str) -> Result<String> {
    let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
        MatcherError::PdfExtraction(format!("Failed to extract text from '{}': {}", source, e))
    })?;
    normalize_extracted(&text, source)
}

/// Trim per-page noise and reject documents with no extractable text.
/// Empty and whitespace-only output both count as empty: a scanned PDF with
/// no text layer produces whitespace artifacts, not usable content.
pub fn normalize_extracted(text: &str, source: &str) -> Result<String> {
    let joined = text
        .lines()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n");

    if joined.trim().is_empty() {
        return Err(MatcherError::EmptyDocument(source.to_string()));
    }
    Ok(joined)
}

/// PDF files start with the `%PDF` magic regardless of extension.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF")
}

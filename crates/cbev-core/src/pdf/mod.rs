//! PDF text extraction over pdf-extract.

use tracing::debug;

use crate::error::PdfError;

/// Extract the text content of a PDF held in memory. Pages without text
/// contribute nothing; a PDF yielding no text at all is an error.
pub fn extract_text(data: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| PdfError::TextExtraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }

    debug!("extracted {} chars of PDF text", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_text_extraction_error() {
        let result = extract_text(b"not a pdf at all");
        assert!(matches!(result, Err(PdfError::TextExtraction(_))));
    }
}

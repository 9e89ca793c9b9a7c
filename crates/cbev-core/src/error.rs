//! Error types for the cbev-core library.

use thiserror::Error;

/// Main error type for the cbev library.
#[derive(Error, Debug)]
pub enum CbevError {
    /// PDF text extraction error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Official receipt parsing error.
    #[error("receipt error: {0}")]
    Receipt(#[from] ReceiptError),

    /// Official receipt lookup error.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Screenshot detection error.
    #[error("detection error: {0}")]
    Detect(#[from] DetectError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF text extraction.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to extract text from the PDF bytes.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF yielded no text at all.
    #[error("PDF contains no text")]
    NoText,
}

/// Errors related to official receipt parsing.
#[derive(Error, Debug)]
pub enum ReceiptError {
    /// The receipt PDF could not be read.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// The receipt text did not yield every required field.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

/// Errors related to the authoritative receipt lookup.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure: connection refused, timeout, DNS.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with an unexpected status or content type.
    #[error("invalid response: status {status}, content-type {content_type:?}")]
    InvalidResponse { status: u16, content_type: String },

    /// The fetched PDF could not be parsed into a complete record.
    #[error("receipt parse failed: {0}")]
    Receipt(#[from] ReceiptError),
}

/// Errors related to screenshot detection.
#[derive(Error, Debug)]
pub enum DetectError {
    /// The screenshot bytes could not be decoded as an image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The OCR collaborator failed.
    #[error("text recognition failed: {0}")]
    Ocr(String),

    /// The QR collaborator failed.
    #[error("QR decode failed: {0}")]
    Qr(String),

    /// No process-wide OCR engine has been installed.
    #[error("no OCR engine installed")]
    NoReader,
}

/// Result type for the cbev library.
pub type Result<T> = std::result::Result<T, CbevError>;

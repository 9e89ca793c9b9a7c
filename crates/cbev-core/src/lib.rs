//! Core library for CBE transfer-receipt extraction and verification.
//!
//! This crate provides:
//! - Text normalization and regex rule tables for the two receipt shapes
//!   (screenshot OCR text and official PDF receipts)
//! - Official receipt parsing into a canonical [`TransactionRecord`]
//! - Authoritative receipt lookup against the bank's PDF endpoint
//! - Strict two-field verification with itemized mismatch reporting
//!
//! The OCR engine and QR decoder are external collaborators consumed through
//! the [`TextReader`] and [`QrDecoder`] traits.

pub mod detect;
pub mod error;
pub mod fetch;
pub mod models;
pub mod pdf;
pub mod receipt;
pub mod text;
pub mod verify;

pub use detect::{install_text_reader, text_reader, QrDecoder, TextReader, TransactionDetector};
pub use error::{CbevError, DetectError, FetchError, PdfError, ReceiptError, Result};
pub use fetch::{ReceiptFetcher, ReceiptLookup};
pub use models::config::{CbevConfig, DetectConfig, FetchConfig};
pub use models::outcome::{MismatchEntry, MismatchKind, VerificationOutcome};
pub use models::transaction::{DetectionResult, ProvidedRecord, TransactionRecord};
pub use receipt::{parse_official_receipt, parse_official_text};
pub use verify::{compare, verify_against_official};

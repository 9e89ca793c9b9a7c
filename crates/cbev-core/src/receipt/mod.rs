//! Receipt text extraction: per-source rule tables and the official parser.

pub mod parser;
pub mod rules;

pub use parser::{parse_official_receipt, parse_official_text};

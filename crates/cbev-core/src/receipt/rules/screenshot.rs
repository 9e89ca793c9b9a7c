//! Extraction profile for screenshot OCR text.
//!
//! Tuned for the SMS-style confirmation the bank app renders: uppercase
//! names, `-ETB-` separators, `DD-Mon-YYYY` dates. OCR noise is expected;
//! each rule fails independently.

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use super::patterns::{
    SCREENSHOT_AMOUNT, SCREENSHOT_DATE, SCREENSHOT_PAYER, SCREENSHOT_RECEIVER, TRANSACTION_ID,
};
use super::{apply_rules, trimmed, FieldRule};

lazy_static! {
    static ref SCREENSHOT_RULES: Vec<FieldRule> = vec![
        FieldRule {
            name: "transaction_id",
            pattern: &TRANSACTION_ID,
            group: 0,
            post: trimmed,
        },
        FieldRule {
            name: "payer",
            pattern: &SCREENSHOT_PAYER,
            group: 1,
            post: trimmed,
        },
        FieldRule {
            name: "receiver",
            pattern: &SCREENSHOT_RECEIVER,
            group: 1,
            post: trimmed,
        },
        FieldRule {
            name: "date",
            pattern: &SCREENSHOT_DATE,
            group: 1,
            post: trimmed,
        },
        FieldRule {
            name: "amount",
            pattern: &SCREENSHOT_AMOUNT,
            group: 1,
            post: trimmed,
        },
    ];
}

/// Extract screenshot-profile fields from normalized OCR text.
pub fn extract_screenshot_fields(text: &str) -> BTreeMap<&'static str, String> {
    apply_rules(text, &SCREENSHOT_RULES)
}

//! Canonical transaction records and screenshot detection results.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The canonical transaction record extracted from any source.
///
/// Every field is independently optional: absence means the source text did
/// not yield that field, not an error. A record is built once per extraction
/// call and never mutated; reconciliation produces a new comparison result
/// rather than editing either side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Bank reference code (`FT` + 10 alphanumerics).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,

    /// Payment timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDateTime>,

    /// Transferred amount; the source representation always carries exactly
    /// two fractional digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,

    /// Masked payer account, e.g. `1****1234`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_account: Option<String>,

    /// Masked receiver account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_account: Option<String>,

    /// Reason / type of service. Optional even on complete receipts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Caller-side record of a claimed transfer, kept as loose strings exactly as
/// the user (or the screenshot detector) supplied them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Short account code appended to the reference to form the authoritative
    /// lookup identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Combined result of screenshot detection: QR payload id, OCR-text fields,
/// and the lookup suffix.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_transaction_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl DetectionResult {
    /// The best reference candidate: the QR payload beats OCR text.
    pub fn transaction_id(&self) -> Option<&str> {
        self.qr_transaction_id
            .as_deref()
            .or(self.text_transaction_id.as_deref())
    }
}

impl From<DetectionResult> for ProvidedRecord {
    fn from(detected: DetectionResult) -> Self {
        ProvidedRecord {
            transaction_id: detected.qr_transaction_id.or(detected.text_transaction_id),
            payer: detected.payer,
            receiver: detected.receiver,
            date: detected.date,
            amount: detected.amount,
            suffix: detected.suffix,
        }
    }
}

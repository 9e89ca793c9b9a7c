//! Tagged verification outcomes with itemized mismatch reporting.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::transaction::TransactionRecord;

/// Why a verification attempt did not end in `Verified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MismatchKind {
    /// The compared fields disagree.
    VerificationFailed,
    /// The caller omitted `transaction_id` or `suffix`; no lookup was made.
    MissingFields,
    /// The authoritative receipt could not be fetched or parsed.
    ReceiptParseError,
    /// A fault outside the classified taxonomy.
    Exception,
}

/// One itemized mismatch: the two observed values, plus an error description
/// when the disagreement came from a coercion failure rather than the values
/// themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MismatchEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provided: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of reconciling a provided record against the official one.
///
/// `Verified` carries the full official record: once the identifying fields
/// agree, the official receipt is the trusted source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum VerificationOutcome {
    Verified {
        details: TransactionRecord,
    },
    Mismatched {
        kind: MismatchKind,
        mismatches: BTreeMap<String, MismatchEntry>,
    },
}

impl VerificationOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified { .. })
    }

    /// The failure kind, or `None` for a verified outcome.
    pub fn kind(&self) -> Option<MismatchKind> {
        match self {
            Self::Verified { .. } => None,
            Self::Mismatched { kind, .. } => Some(*kind),
        }
    }

    /// Required caller inputs were absent; names each one.
    pub fn missing_fields(required: &[&str]) -> Self {
        let mismatches = required
            .iter()
            .map(|field| {
                (
                    field.to_string(),
                    MismatchEntry {
                        error: Some("required".to_string()),
                        ..Default::default()
                    },
                )
            })
            .collect();
        Self::Mismatched {
            kind: MismatchKind::MissingFields,
            mismatches,
        }
    }

    /// The authoritative fetch or parse failed; carries the underlying error.
    pub fn receipt_parse_error(err: &dyn Display) -> Self {
        Self::context_failure(MismatchKind::ReceiptParseError, err)
    }

    /// Catch-all for faults outside the classified taxonomy.
    pub fn exception(err: &dyn Display) -> Self {
        Self::context_failure(MismatchKind::Exception, err)
    }

    fn context_failure(kind: MismatchKind, err: &dyn Display) -> Self {
        let mut mismatches = BTreeMap::new();
        mismatches.insert(
            "error".to_string(),
            MismatchEntry {
                error: Some(err.to_string()),
                ..Default::default()
            },
        );
        Self::Mismatched { kind, mismatches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&MismatchKind::ReceiptParseError).unwrap();
        assert_eq!(json, r#""RECEIPT_PARSE_ERROR""#);
        let json = serde_json::to_string(&MismatchKind::VerificationFailed).unwrap();
        assert_eq!(json, r#""VERIFICATION_FAILED""#);
    }

    #[test]
    fn test_missing_fields_outcome() {
        let outcome = VerificationOutcome::missing_fields(&["transaction_id", "suffix"]);
        assert_eq!(outcome.kind(), Some(MismatchKind::MissingFields));
        match outcome {
            VerificationOutcome::Mismatched { mismatches, .. } => {
                assert_eq!(mismatches.len(), 2);
                assert_eq!(
                    mismatches["suffix"].error.as_deref(),
                    Some("required")
                );
            }
            _ => panic!("expected mismatched outcome"),
        }
    }
}

//! Field comparison and end-to-end verification orchestration.

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::fetch::ReceiptLookup;
use crate::models::outcome::{MismatchEntry, MismatchKind, VerificationOutcome};
use crate::models::transaction::{ProvidedRecord, TransactionRecord};
use crate::receipt::rules::parse_amount;

/// Compare a provided record against the official one.
///
/// Verification is intentionally narrow: only `transaction_id` and `amount`
/// are checked, the two fields that identify a specific transfer instance and
/// its value. Once they agree the official record is the source of truth, so
/// a verified outcome carries it whole.
pub fn compare(provided: &ProvidedRecord, official: &TransactionRecord) -> VerificationOutcome {
    let mut mismatches = BTreeMap::new();

    let provided_id = provided.transaction_id.as_deref().unwrap_or_default().trim();
    let official_id = official.transaction_id.as_deref().unwrap_or_default().trim();
    if provided_id != official_id {
        mismatches.insert(
            "transaction_id".to_string(),
            MismatchEntry {
                provided: Some(provided_id.to_string()),
                official: Some(official_id.to_string()),
                error: None,
            },
        );
    }

    // Numeric comparison after separator stripping. A coercion failure on
    // either side is a mismatch entry of its own, not an abort.
    let provided_amount = provided.amount.as_deref().and_then(parse_amount);
    match (provided_amount, official.amount) {
        (Some(ours), Some(theirs)) => {
            if ours != theirs {
                mismatches.insert(
                    "amount".to_string(),
                    MismatchEntry {
                        provided: provided.amount.clone(),
                        official: Some(theirs.to_string()),
                        error: None,
                    },
                );
            }
        }
        (ours, theirs) => {
            let error = if ours.is_none() {
                "could not parse provided amount"
            } else {
                "official amount missing"
            };
            mismatches.insert(
                "amount".to_string(),
                MismatchEntry {
                    provided: provided.amount.clone(),
                    official: theirs.map(|amount| amount.to_string()),
                    error: Some(error.to_string()),
                },
            );
        }
    }

    if mismatches.is_empty() {
        info!("verification passed, record matches official receipt");
        VerificationOutcome::Verified {
            details: official.clone(),
        }
    } else {
        warn!("verification failed with {} mismatch(es)", mismatches.len());
        VerificationOutcome::Mismatched {
            kind: MismatchKind::VerificationFailed,
            mismatches,
        }
    }
}

/// Verify a provided record against the authoritative receipt.
///
/// Four terminal outcomes; this boundary never propagates an error:
/// 1. missing `transaction_id` or `suffix` reports `MISSING_FIELDS` without
///    touching the network;
/// 2. a failed fetch or parse reports `RECEIPT_PARSE_ERROR` with the
///    underlying cause;
/// 3. disagreeing fields report `VERIFICATION_FAILED`;
/// 4. otherwise the outcome is `Verified` with the official record.
pub async fn verify_against_official<L: ReceiptLookup>(
    provided: &ProvidedRecord,
    lookup: &L,
) -> VerificationOutcome {
    let (reference, suffix) = match (
        provided.transaction_id.as_deref(),
        provided.suffix.as_deref(),
    ) {
        (Some(reference), Some(suffix)) if !reference.is_empty() && !suffix.is_empty() => {
            (reference, suffix)
        }
        _ => {
            warn!("missing transaction_id or suffix, skipping lookup");
            return VerificationOutcome::missing_fields(&["transaction_id", "suffix"]);
        }
    };

    match lookup.fetch(reference, suffix).await {
        Ok(official) => compare(provided, &official),
        Err(err) => {
            warn!("official receipt lookup failed: {err}");
            VerificationOutcome::receipt_parse_error(&err)
        }
    }
}

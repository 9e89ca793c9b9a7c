//! Official receipt parsing: PDF bytes to a canonical [`TransactionRecord`].

use tracing::{debug, warn};

use crate::error::ReceiptError;
use crate::models::transaction::TransactionRecord;
use crate::pdf;
use crate::text::normalize;

use super::rules::{extract_official_fields, parse_amount, parse_date_any, OFFICIAL_DATE_FORMATS};

/// Parse the bytes of an official receipt PDF.
///
/// Extraction never panics across this boundary: PDF faults map to
/// [`ReceiptError::Pdf`], incomplete extraction to
/// [`ReceiptError::MissingFields`] naming exactly the absent fields.
pub fn parse_official_receipt(pdf_bytes: &[u8]) -> Result<TransactionRecord, ReceiptError> {
    let text = pdf::extract_text(pdf_bytes)?;
    parse_official_text(&text)
}

/// Parse already-extracted receipt text. Split out from
/// [`parse_official_receipt`] so the profile is testable without PDF bytes.
pub fn parse_official_text(text: &str) -> Result<TransactionRecord, ReceiptError> {
    let text = normalize(text);
    debug!("parsing official receipt text ({} chars)", text.len());

    let fields = extract_official_fields(&text);

    let amount = fields.amount_raw.as_deref().and_then(parse_amount);
    let date = match fields.date_raw.as_deref() {
        Some(raw) => parse_date_any(raw, OFFICIAL_DATE_FORMATS),
        None => {
            warn!("no payment date found in receipt text");
            None
        }
    };

    let record = TransactionRecord {
        transaction_id: fields.transaction_id,
        payer: fields.payer,
        receiver: fields.receiver,
        date,
        amount,
        payer_account: fields.payer_account,
        receiver_account: fields.receiver_account,
        reason: fields.reason,
    };

    let missing = missing_required(&record);
    if missing.is_empty() {
        Ok(record)
    } else {
        warn!("could not extract all required fields, missing {missing:?}");
        Err(ReceiptError::MissingFields(missing))
    }
}

/// Success requires all seven of these; `reason` alone is optional.
fn missing_required(record: &TransactionRecord) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if record.payer.is_none() {
        missing.push("payer");
    }
    if record.payer_account.is_none() {
        missing.push("payer_account");
    }
    if record.receiver.is_none() {
        missing.push("receiver");
    }
    if record.receiver_account.is_none() {
        missing.push("receiver_account");
    }
    if record.amount.is_none() {
        missing.push("amount");
    }
    if record.date.is_none() {
        missing.push("date");
    }
    if record.transaction_id.is_none() {
        missing.push("transaction_id");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const RECEIPT_TEXT: &str = "Commercial Bank of Ethiopia\nPayment Receipt\n\
         Payer : ABEBE KEBEDE\nAccount : 1****1234\n\
         Receiver : ALMAZ TESFAYE\nAccount : 2****5678\n\
         Payment Date & Time : 3/15/2024, 2:30:45 PM\n\
         Reference No. (VAT Invoice No) : FT24075ABC12\n\
         Reason / Type of service : Transfer to family\n\
         Transferred Amount : 1,234.50 ETB\n";

    #[test]
    fn test_parse_complete_receipt() {
        let record = parse_official_text(RECEIPT_TEXT).unwrap();

        assert_eq!(record.payer.as_deref(), Some("Abebe Kebede"));
        assert_eq!(record.payer_account.as_deref(), Some("1****1234"));
        assert_eq!(record.receiver.as_deref(), Some("Almaz Tesfaye"));
        assert_eq!(record.receiver_account.as_deref(), Some("2****5678"));
        assert_eq!(record.amount, Some(Decimal::from_str("1234.50").unwrap()));
        assert_eq!(
            record.date,
            Some(
                NaiveDate::from_ymd_opt(2024, 3, 15)
                    .unwrap()
                    .and_hms_opt(14, 30, 45)
                    .unwrap()
            )
        );
        assert_eq!(record.transaction_id.as_deref(), Some("FT24075ABC12"));
        assert_eq!(record.reason.as_deref(), Some("Transfer to family"));
    }

    #[test]
    fn test_missing_reason_still_succeeds() {
        let text = RECEIPT_TEXT.replace("Reason / Type of service : Transfer to family\n", "");
        let record = parse_official_text(&text).unwrap();
        assert!(record.reason.is_none());
        assert!(record.amount.is_some());
    }

    #[test]
    fn test_missing_fields_are_listed_exactly() {
        let text = RECEIPT_TEXT.replace("Receiver : ALMAZ TESFAYE\nAccount : 2****5678\n", "");
        let err = parse_official_text(&text).unwrap_err();
        match err {
            ReceiptError::MissingFields(missing) => {
                assert_eq!(missing, vec!["receiver", "receiver_account"]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_text_lists_everything() {
        let err = parse_official_text("nothing useful").unwrap_err();
        match err {
            ReceiptError::MissingFields(missing) => assert_eq!(missing.len(), 7),
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }
}

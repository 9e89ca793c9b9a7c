//! Extraction profile for official CBE receipt text.

use lazy_static::lazy_static;

use crate::text::title_case;

use super::patterns::{
    OFFICIAL_ACCOUNT, OFFICIAL_AMOUNT, OFFICIAL_DATE, OFFICIAL_PAYER, OFFICIAL_REASON,
    OFFICIAL_RECEIVER, OFFICIAL_REFERENCE,
};
use super::{apply_rules, trimmed, FieldRule};

/// Raw official-receipt fields after profile post-processing. Dates and
/// amounts are still strings here; coercion happens in the parser.
#[derive(Debug, Clone, Default)]
pub struct OfficialFields {
    pub payer: Option<String>,
    pub payer_account: Option<String>,
    pub receiver: Option<String>,
    pub receiver_account: Option<String>,
    pub reason: Option<String>,
    pub amount_raw: Option<String>,
    pub transaction_id: Option<String>,
    pub date_raw: Option<String>,
}

fn titled(s: &str) -> String {
    title_case(s)
}

lazy_static! {
    static ref OFFICIAL_RULES: Vec<FieldRule> = vec![
        FieldRule {
            name: "payer",
            pattern: &OFFICIAL_PAYER,
            group: 1,
            post: titled,
        },
        FieldRule {
            name: "receiver",
            pattern: &OFFICIAL_RECEIVER,
            group: 1,
            post: titled,
        },
        FieldRule {
            name: "reason",
            pattern: &OFFICIAL_REASON,
            group: 1,
            post: trimmed,
        },
        FieldRule {
            name: "amount",
            pattern: &OFFICIAL_AMOUNT,
            group: 1,
            post: trimmed,
        },
        FieldRule {
            name: "transaction_id",
            pattern: &OFFICIAL_REFERENCE,
            group: 1,
            post: trimmed,
        },
        FieldRule {
            name: "date",
            pattern: &OFFICIAL_DATE,
            group: 1,
            post: trimmed,
        },
    ];
}

/// Extract official-receipt fields from normalized text.
///
/// Masked accounts are positional: the first match on the page belongs to the
/// payer, the second to the receiver. Fewer than two matches leave the
/// missing one absent.
pub fn extract_official_fields(text: &str) -> OfficialFields {
    let mut fields = apply_rules(text, &OFFICIAL_RULES);

    let mut accounts = OFFICIAL_ACCOUNT
        .captures_iter(text)
        .map(|caps| caps[1].to_string());

    OfficialFields {
        payer: fields.remove("payer"),
        payer_account: accounts.next(),
        receiver: fields.remove("receiver"),
        receiver_account: accounts.next(),
        reason: fields.remove("reason"),
        amount_raw: fields.remove("amount"),
        transaction_id: fields.remove("transaction_id"),
        date_raw: fields.remove("date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECEIPT_TEXT: &str = "Commercial Bank of Ethiopia Payment Receipt \
         Payer : ABEBE KEBEDE Account : 1****1234 \
         Receiver : ALMAZ TESFAYE Account : 2****5678 \
         Payment Date & Time : 3/15/2024, 2:30:45 PM \
         Reference No. (VAT Invoice No) : FT24075ABC12 \
         Reason / Type of service : Transfer to family \
         Transferred Amount : 1,234.50 ETB";

    #[test]
    fn test_extract_complete_receipt() {
        let fields = extract_official_fields(RECEIPT_TEXT);

        assert_eq!(fields.payer.as_deref(), Some("Abebe Kebede"));
        assert_eq!(fields.payer_account.as_deref(), Some("1****1234"));
        assert_eq!(fields.receiver.as_deref(), Some("Almaz Tesfaye"));
        assert_eq!(fields.receiver_account.as_deref(), Some("2****5678"));
        assert_eq!(fields.reason.as_deref(), Some("Transfer to family"));
        assert_eq!(fields.amount_raw.as_deref(), Some("1,234.50"));
        assert_eq!(fields.transaction_id.as_deref(), Some("FT24075ABC12"));
        assert_eq!(fields.date_raw.as_deref(), Some("3/15/2024, 2:30:45 PM"));
    }

    #[test]
    fn test_single_account_goes_to_payer() {
        let fields =
            extract_official_fields("Payer : ABEBE KEBEDE Account : 1****1234 Receiver :");
        assert_eq!(fields.payer_account.as_deref(), Some("1****1234"));
        assert!(fields.receiver_account.is_none());
    }

    #[test]
    fn test_malformed_date_tail_is_rejected() {
        // The date rule requires the exact timestamp shape.
        let fields = extract_official_fields("Payment Date & Time : sometime in March");
        assert!(fields.date_raw.is_none());
    }
}

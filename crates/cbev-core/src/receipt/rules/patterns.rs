//! Common regex patterns for CBE receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Bank reference code: FT followed by exactly 10 word characters.
    // Case-sensitive on purpose; the prefix is always printed uppercase.
    pub static ref TRANSACTION_ID: Regex = Regex::new(
        r"FT\w{10}"
    ).unwrap();

    // Screenshot (OCR text) profile
    pub static ref SCREENSHOT_PAYER: Regex = Regex::new(
        r"(?i)debited from\s+([A-Z\s]+?)\s+for"
    ).unwrap();

    pub static ref SCREENSHOT_RECEIVER: Regex = Regex::new(
        r"(?i)for\s+([A-Z\s]+?)-ETB-"
    ).unwrap();

    pub static ref SCREENSHOT_DATE: Regex = Regex::new(
        r"on\s+(\d{2}-[A-Za-z]{3}-\d{4})"
    ).unwrap();

    pub static ref SCREENSHOT_AMOUNT: Regex = Regex::new(
        r"ETB\s+([0-9,]+\.\d{2})"
    ).unwrap();

    // Official receipt profile
    pub static ref OFFICIAL_PAYER: Regex = Regex::new(
        r"(?i)Payer\s*:?\s*(.*?)\s+Account"
    ).unwrap();

    pub static ref OFFICIAL_RECEIVER: Regex = Regex::new(
        r"(?i)Receiver\s*:?\s*(.*?)\s+Account"
    ).unwrap();

    // Masked account: optional single alphanumeric prefix, four mask
    // characters, four trailing digits.
    pub static ref OFFICIAL_ACCOUNT: Regex = Regex::new(
        r"(?i)Account\s*:?\s*([A-Z0-9]?\*{4}\d{4})"
    ).unwrap();

    pub static ref OFFICIAL_REASON: Regex = Regex::new(
        r"(?i)Reason\s*/\s*Type of service\s*:?\s*(.*?)\s+Transferred Amount"
    ).unwrap();

    pub static ref OFFICIAL_AMOUNT: Regex = Regex::new(
        r"(?i)Transferred Amount\s*:?\s*([\d,]+\.\d{2})\s*ETB"
    ).unwrap();

    pub static ref OFFICIAL_REFERENCE: Regex = Regex::new(
        r"(?i)Reference No\.?\s*\(VAT Invoice No\)\s*:?\s*([A-Z0-9]+)"
    ).unwrap();

    // Exact date/time shape only; free-form tails break the format parse.
    pub static ref OFFICIAL_DATE: Regex = Regex::new(
        r"(?i)Payment Date & Time\s*:?\s*(\d{1,2}/\d{1,2}/\d{4}, \d{1,2}:\d{2}:\d{2} [AP]M)"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_shape() {
        assert!(TRANSACTION_ID.is_match("FT24075ABC12"));
        assert!(TRANSACTION_ID.is_match("prefix FT1234567890 suffix"));
        // Too short, and lowercase prefix.
        assert!(!TRANSACTION_ID.is_match("FT123"));
        assert!(!TRANSACTION_ID.is_match("ft1234567890"));
    }

    #[test]
    fn test_official_account_mask() {
        let caps = OFFICIAL_ACCOUNT.captures("Account : 1****1234").unwrap();
        assert_eq!(&caps[1], "1****1234");

        // Prefix is optional.
        let caps = OFFICIAL_ACCOUNT.captures("Account: ****5678").unwrap();
        assert_eq!(&caps[1], "****5678");
    }
}

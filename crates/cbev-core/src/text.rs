//! Text normalization helpers shared by every extraction profile.

/// Collapse all runs of whitespace (including newlines) to a single space and
/// trim the ends. Idempotent: normalizing normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Capitalize the first letter of each whitespace-separated word and lowercase
/// the rest, as official receipts print names in full uppercase.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  a\n\n b\t\tc  "), "a b c");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("Payer :\n ABEBE  KEBEDE\tAccount");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ABEBE KEBEDE"), "Abebe Kebede");
        assert_eq!(title_case("  almaz   tesfaye "), "Almaz Tesfaye");
    }
}

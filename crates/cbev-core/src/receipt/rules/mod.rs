//! Rule-based field extractors for transfer receipts.
//!
//! Each field pattern is a named [`FieldRule`] (pattern + capture group +
//! post-processing) stored in a declarative table per source profile. New
//! bank formats are added by appending table rows, not by editing code paths.

pub mod amounts;
pub mod dates;
pub mod official;
pub mod patterns;
pub mod screenshot;

pub use amounts::parse_amount;
pub use dates::{parse_date_any, OFFICIAL_DATE_FORMATS};
pub use official::{extract_official_fields, OfficialFields};
pub use screenshot::extract_screenshot_fields;

use std::collections::BTreeMap;

use regex::Regex;

/// A single named extraction rule.
pub struct FieldRule {
    /// Field name the captured value is stored under.
    pub name: &'static str,
    /// Compiled pattern; group 0 is the whole match.
    pub pattern: &'static Regex,
    /// Capture group carrying the value.
    pub group: usize,
    /// Post-processing applied to the captured text.
    pub post: fn(&str) -> String,
}

impl FieldRule {
    /// Apply the rule to `text`, returning the post-processed first capture.
    pub fn apply(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(self.group))
            .map(|m| (self.post)(m.as_str()))
    }
}

/// Apply a rule table to normalized text. Every rule is independent: a miss
/// leaves that field absent and never aborts the others.
pub fn apply_rules(text: &str, rules: &[FieldRule]) -> BTreeMap<&'static str, String> {
    let mut fields = BTreeMap::new();
    for rule in rules {
        if let Some(value) = rule.apply(text) {
            fields.insert(rule.name, value);
        }
    }
    fields
}

/// Shared post-processing: trim surrounding whitespace.
pub(crate) fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;

    lazy_static! {
        static ref WORD: Regex = Regex::new(r"word:(\w+)").unwrap();
    }

    #[test]
    fn test_rule_miss_leaves_field_absent() {
        let rules = [FieldRule {
            name: "word",
            pattern: &WORD,
            group: 1,
            post: trimmed,
        }];

        let fields = apply_rules("word:hello", &rules);
        assert_eq!(fields.get("word").map(String::as_str), Some("hello"));

        let fields = apply_rules("nothing here", &rules);
        assert!(fields.is_empty());
    }
}

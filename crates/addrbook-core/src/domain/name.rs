use crate::error::ValidationError;
use std::fmt;

/// Canonical contact name: words separated by single spaces, every
/// hyphen-separated part capitalized ("anna-maria  de la cruz" becomes
/// "Anna-Maria De La Cruz").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_name(raw);
        if normalized.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive identity used for lookups.
    pub fn key(&self) -> String {
        name_key(&self.0)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            word.split('-')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn name_key(raw: &str) -> String {
    normalize_name(raw).to_lowercase()
}

/// Upper-cases the first character and lower-cases the rest. When the
/// upper-case form of the first character expands to several characters
/// ("ß" -> "SS") only the first one stays upper-case, so the result is a
/// fixed point.
pub(crate) fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(word.len());
    let mut upper = first.to_uppercase();
    if let Some(head) = upper.next() {
        out.push(head);
    }
    for ch in upper {
        out.extend(ch.to_lowercase());
    }
    for ch in chars {
        out.extend(ch.to_lowercase());
    }
    out
}


#[cfg(test)]
mod property_tests {
    use super::normalize_name;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "\\PC{0,40}") {
            let once = normalize_name(&raw);
            prop_assert_eq!(normalize_name(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_for_names(raw in "[a-zA-Z' -]{0,40}") {
            let once = normalize_name(&raw);
            prop_assert_eq!(normalize_name(&once), once);
        }
    }
}

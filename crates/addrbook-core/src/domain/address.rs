use crate::domain::name::capitalize;
use crate::error::ValidationError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address(String);

impl Address {
    /// Formats `raw` with [`format_address`].
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let formatted = format_address(raw);
        if formatted.is_empty() {
            return Err(ValidationError::EmptyAddress);
        }
        Ok(Self(formatted))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Abbreviations such as `vul.` or `str.` (at most four characters ending
/// in a dot) are lower-cased; every other word is capitalized.
pub fn format_address(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            if word.ends_with('.') && word.chars().count() <= 4 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

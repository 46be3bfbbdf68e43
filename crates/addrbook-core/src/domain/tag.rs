use crate::error::ValidationError;
use std::fmt;

pub const MAX_TAG_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let normalized = normalize_tag_name(raw);
        if normalized.is_empty()
            || normalized.len() > MAX_TAG_LEN
            || !normalized
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_')
        {
            return Err(ValidationError::Tag(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Strips leading `#` and lower-cases; does not validate.
pub fn normalize_tag_name(raw: &str) -> String {
    raw.trim().trim_start_matches('#').to_lowercase()
}

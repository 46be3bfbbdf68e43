use crate::error::ValidationError;
use std::fmt;

pub const PHONE_DIGITS: usize = 10;

pub const VALID_CODES: [&str; 12] = [
    "050", "066", "067", "068", "095", "096", "097", "098", "099", "063", "073", "093",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !is_phone_shaped(trimmed) {
            return Err(ValidationError::PhoneLength(trimmed.to_string()));
        }
        if !VALID_CODES.iter().any(|code| trimmed.starts_with(code)) {
            return Err(ValidationError::PhoneCode(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exactly ten ASCII digits, regardless of the operator code.
pub fn is_phone_shaped(token: &str) -> bool {
    token.len() == PHONE_DIGITS && token.bytes().all(|b| b.is_ascii_digit())
}


#[cfg(test)]
mod property_tests {
    use super::{Phone, VALID_CODES};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn whitelisted_ten_digit_numbers_are_valid(code in 0usize..12, rest in "[0-9]{7}") {
            let raw = format!("{}{}", VALID_CODES[code], rest);
            prop_assert!(Phone::new(&raw).is_ok());
        }

        #[test]
        fn other_prefixes_are_rejected(raw in "[0-9]{10}") {
            let whitelisted = VALID_CODES.iter().any(|code| raw.starts_with(code));
            prop_assert_eq!(Phone::new(&raw).is_ok(), whitelisted);
        }

        #[test]
        fn wrong_lengths_are_rejected(raw in "[0-9]{0,9}|[0-9]{11,14}") {
            prop_assert!(Phone::new(&raw).is_err());
        }
    }
}

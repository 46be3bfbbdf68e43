use crate::error::ValidationError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
pub const MIN_BIRTH_YEAR: i32 = 1930;

/// A birthday as entered by the user (`DD.MM.YYYY`).
///
/// The raw string is kept as the source of truth: search matches it
/// textually, and values restored from storage are not re-validated, so
/// [`Birthday::date`] may return `None` for legacy data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday(String);

impl Birthday {
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let date = parse_birthday_date(trimmed).ok_or(ValidationError::BirthdayFormat)?;
        if date > today {
            return Err(ValidationError::BirthdayInFuture);
        }
        if date.year() < MIN_BIRTH_YEAR {
            return Err(ValidationError::BirthdayTooEarly);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn date(&self) -> Option<NaiveDate> {
        parse_birthday_date(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn format_birthday_date(date: NaiveDate) -> String {
    date.format(BIRTHDAY_FORMAT).to_string()
}

// chrono accepts unpadded fields and signed years, so the shape is checked first.
fn parse_birthday_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 {
        return None;
    }
    let shape_ok = bytes.iter().enumerate().all(|(index, byte)| match index {
        2 | 5 => *byte == b'.',
        _ => byte.is_ascii_digit(),
    });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).ok()
}

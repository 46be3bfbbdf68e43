//! Splitting a command line into a contact name and an operand.
//!
//! Nothing on a command line marks where a contact name ends, so every
//! command picks one of three strategies:
//!
//! * [`resolve_prefix`]: the shortest leading run of tokens that names an
//!   existing contact wins. When one contact's name is a prefix of
//!   another's, the shorter name is always chosen.
//! * [`resolve_trailing`]: a fixed number of trailing tokens is the
//!   operand and everything before it must be an exact name.
//! * [`split_at_shape`]: the first token satisfying a predicate starts the
//!   operand.

use crate::book::AddressBook;
use crate::domain::{normalize_name, Record};
use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    /// Canonical name of the matched contact.
    pub name: String,
    pub operand: &'a [String],
}

/// Scans name lengths `1..=len - min_operand` and accepts the first that
/// matches an existing contact.
pub fn resolve_prefix<'a>(
    book: &AddressBook,
    tokens: &'a [String],
    min_operand: usize,
) -> Option<Resolved<'a>> {
    let max_end = tokens.len().checked_sub(min_operand)?;
    (1..=max_end).find_map(|end| {
        let candidate = normalize_name(&tokens[..end].join(" "));
        book.find(&candidate).map(|record| Resolved {
            name: record.name().as_str().to_string(),
            operand: &tokens[end..],
        })
    })
}

pub fn resolve_trailing<'a>(
    book: &AddressBook,
    tokens: &'a [String],
    count: usize,
    usage: &'static str,
) -> Result<Resolved<'a>, CommandError> {
    if tokens.len() <= count {
        return Err(CommandError::Usage(usage));
    }
    let (name, operand) = tokens.split_at(tokens.len() - count);
    let record = book
        .find(&name.join(" "))
        .ok_or(CommandError::ContactNotFound)?;
    Ok(Resolved {
        name: record.name().as_str().to_string(),
        operand,
    })
}

/// Splits before the first token matching `is_operand`. `None` when no
/// token matches.
pub fn split_at_shape<'a>(
    tokens: &'a [String],
    is_operand: impl Fn(&str) -> bool,
) -> Option<(&'a [String], &'a [String])> {
    tokens
        .iter()
        .position(|token| is_operand(token.as_str()))
        .map(|index| tokens.split_at(index))
}

/// Shortest leading run of `tokens` equal to the text of one of the
/// record's notes, leaving at least one token after it. Returns the
/// matched text and the remaining tokens.
pub fn resolve_note_prefix<'a>(
    record: &Record,
    tokens: &'a [String],
) -> Option<(String, &'a [String])> {
    (1..tokens.len()).find_map(|end| {
        let candidate = tokens[..end].join(" ");
        record
            .find_note(&candidate)
            .map(|_| (candidate, &tokens[end..]))
    })
}

//! One function per command. Each takes the tokens that followed the
//! command name and either mutates the book or reports why it did not.

pub mod addresses;
pub mod birthdays;
pub mod contacts;
pub mod emails;
pub mod notes;
pub mod phones;
pub mod usage;

use crate::book::AddressBook;
use crate::domain::Record;
use crate::error::CommandError;
use crate::resolve::{resolve_prefix, Resolved};

/// Result of a command. `changed` is set only when the book was mutated,
/// which is what callers use to decide whether to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub message: String,
    pub changed: bool,
}

impl Outcome {
    pub fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: true,
        }
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: false,
        }
    }
}

pub type OpResult = Result<Outcome, CommandError>;

pub(crate) fn require_tokens(
    tokens: &[String],
    min: usize,
    usage: &'static str,
) -> Result<(), CommandError> {
    if tokens.len() < min {
        return Err(CommandError::Usage(usage));
    }
    Ok(())
}

/// Prefix resolution with the usual failure mapping: too few tokens is a
/// usage error, no matching name is `ContactNotFound`.
pub(crate) fn resolve_contact<'a>(
    book: &AddressBook,
    tokens: &'a [String],
    min_operand: usize,
    usage: &'static str,
) -> Result<Resolved<'a>, CommandError> {
    require_tokens(tokens, min_operand + 1, usage)?;
    resolve_prefix(book, tokens, min_operand).ok_or(CommandError::ContactNotFound)
}

pub(crate) fn record_mut<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> Result<&'a mut Record, CommandError> {
    book.find_mut(name).ok_or(CommandError::ContactNotFound)
}

pub(crate) fn exact_record<'a>(
    book: &'a AddressBook,
    tokens: &[String],
    usage: &'static str,
) -> Result<&'a Record, CommandError> {
    require_tokens(tokens, 1, usage)?;
    book.find(&tokens.join(" ")).ok_or(CommandError::ContactNotFound)
}

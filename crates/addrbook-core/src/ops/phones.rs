use super::{record_mut, require_tokens, usage, OpResult, Outcome};
use crate::book::AddressBook;
use crate::domain::{Phone, Record};
use crate::error::CommandError;
use crate::resolve::resolve_trailing;

pub fn add_phone(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_trailing(book, tokens, 1, usage::ADD_PHONE)?;
    let phone = Phone::new(&resolved.operand[0])?;
    book.add_phone(&resolved.name, phone)?;
    Ok(Outcome::changed(format!("added phone for {}", resolved.name)))
}

/// `changephone <name…> <old> <new>`; the new number keeps the old one's
/// position.
pub fn change_phone(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_trailing(book, tokens, 2, usage::CHANGE_PHONE)?;
    let (old, new) = (&resolved.operand[0], &resolved.operand[1]);
    let record = book.find(&resolved.name).ok_or(CommandError::ContactNotFound)?;
    if !record.phones().iter().any(|phone| phone.as_str() == old) {
        return Err(CommandError::PhoneNotFound(old.clone()));
    }
    let new = Phone::new(new)?;
    book.edit_phone(&resolved.name, old, new)?;
    Ok(Outcome::changed(format!("updated phone for {}", resolved.name)))
}

pub fn remove_phone(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_trailing(book, tokens, 1, usage::REMOVE_PHONE)?;
    let removed = record_mut(book, &resolved.name)?.remove_phone(&resolved.operand[0])?;
    Ok(Outcome::changed(format!(
        "removed phone {removed} from {}",
        resolved.name
    )))
}

/// `showphone <fragment…>`: every contact whose name contains the fragment.
pub fn show_phone(book: &AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 1, usage::SHOW_PHONE)?;
    let matches = book.names_containing(&tokens.join(" "));
    match matches.as_slice() {
        [] => Err(CommandError::ContactNotFound),
        [record] => Ok(Outcome::unchanged(phone_line(record))),
        records => {
            let mut lines = vec!["multiple contacts found:".to_string()];
            lines.extend(records.iter().map(|record| phone_line(record)));
            Ok(Outcome::unchanged(lines.join("\n")))
        }
    }
}

fn phone_line(record: &Record) -> String {
    if record.phones().is_empty() {
        return format!("{}: no phone numbers", record.name());
    }
    let phones = record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}: {}", record.name(), phones)
}

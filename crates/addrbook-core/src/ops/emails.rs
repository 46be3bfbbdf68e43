use super::{record_mut, resolve_contact, usage, OpResult, Outcome};
use crate::book::AddressBook;
use crate::domain::Email;
use crate::error::{CommandError, Field};

pub fn add_email(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 1, usage::ADD_EMAIL)?;
    let email = Email::new(&resolved.operand.join(" "))?;
    record_mut(book, &resolved.name)?.add_email(email)?;
    Ok(Outcome::changed(format!("added email for {}", resolved.name)))
}

pub fn edit_email(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 1, usage::EDIT_EMAIL)?;
    let record = record_mut(book, &resolved.name)?;
    if record.email().is_none() {
        return Err(CommandError::NotSet(Field::Email));
    }
    let email = Email::new(&resolved.operand.join(" "))?;
    record.edit_email(email)?;
    Ok(Outcome::changed(format!("updated email for {}", resolved.name)))
}

pub fn remove_email(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 0, usage::REMOVE_EMAIL)?;
    record_mut(book, &resolved.name)?.remove_email()?;
    Ok(Outcome::changed(format!("removed email for {}", resolved.name)))
}

use super::{exact_record, record_mut, resolve_contact, usage, OpResult, Outcome};
use crate::book::AddressBook;
use crate::domain::Address;

pub fn add_address(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 1, usage::ADD_ADDRESS)?;
    let address = Address::new(&resolved.operand.join(" "))?;
    record_mut(book, &resolved.name)?.add_address(address)?;
    Ok(Outcome::changed(format!("added address for {}", resolved.name)))
}

/// Sets the address even when none was set before.
pub fn edit_address(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 1, usage::EDIT_ADDRESS)?;
    let address = Address::new(&resolved.operand.join(" "))?;
    record_mut(book, &resolved.name)?.edit_address(address);
    Ok(Outcome::changed(format!("updated address for {}", resolved.name)))
}

pub fn remove_address(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let name = exact_record(book, tokens, usage::REMOVE_ADDRESS)?
        .name()
        .as_str()
        .to_string();
    record_mut(book, &name)?.remove_address()?;
    Ok(Outcome::changed(format!("removed address for {name}")))
}

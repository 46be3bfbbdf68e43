use super::{exact_record, require_tokens, resolve_contact, usage, OpResult, Outcome};
use crate::book::AddressBook;
use crate::domain::{is_phone_shaped, name_key, Address, ContactName, Email, Phone, Record};
use crate::error::CommandError;
use crate::resolve::split_at_shape;

/// `addcontact <name…> <phone> [phone…] [email] [address…]`
///
/// The first 10-digit token ends the name and the run of 10-digit tokens
/// after it are the phones. Of what remains, a token containing `@` is the
/// email and everything else forms the address. The whole line is
/// validated before the book is touched.
pub fn add_contact(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 2, usage::ADD_CONTACT)?;
    let (name_tokens, rest) =
        split_at_shape(tokens, is_phone_shaped).ok_or(CommandError::Usage(usage::ADD_CONTACT))?;
    let name = ContactName::new(&name_tokens.join(" "))?;
    if book.name_exists(name.as_str()) {
        return Err(CommandError::DuplicateContact(name.as_str().to_string()));
    }

    let phone_count = rest
        .iter()
        .take_while(|token| is_phone_shaped(token))
        .count();
    let (phone_tokens, extra) = rest.split_at(phone_count);

    let mut record = Record::new(name);
    for token in phone_tokens {
        let phone = Phone::new(token)?;
        if let Some(owner) = book.phone_owner(&phone) {
            return Err(CommandError::PhoneOwnedByOther {
                phone: phone.as_str().to_string(),
                owner: owner.name().as_str().to_string(),
            });
        }
        record.add_phone(phone)?;
    }

    let (emails, address_parts): (Vec<&String>, Vec<&String>) =
        extra.iter().partition(|token| token.contains('@'));
    match emails.as_slice() {
        [] => {}
        [email] => record.add_email(Email::new(email)?)?,
        _ => return Err(CommandError::Usage(usage::ADD_CONTACT)),
    }
    if !address_parts.is_empty() {
        let raw = address_parts
            .iter()
            .map(|part| part.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        record.add_address(Address::new(&raw)?)?;
    }

    let message = format!("added contact {}", record.name());
    book.add(record);
    Ok(Outcome::changed(message))
}

/// `editname <old…> <new…>`
pub fn edit_name(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let resolved = resolve_contact(book, tokens, 1, usage::EDIT_NAME)?;
    let new_name = ContactName::new(&resolved.operand.join(" "))?;
    if new_name.key() != name_key(&resolved.name) && book.name_exists(new_name.as_str()) {
        return Err(CommandError::DuplicateContact(new_name.as_str().to_string()));
    }
    let message = format!("renamed {} to {}", resolved.name, new_name);
    if !book.rename(&resolved.name, new_name) {
        return Err(CommandError::ContactNotFound);
    }
    Ok(Outcome::changed(message))
}

/// `removecontact <name…>`
pub fn remove_contact(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    let name = exact_record(book, tokens, usage::REMOVE_CONTACT)?
        .name()
        .as_str()
        .to_string();
    book.delete(&name);
    Ok(Outcome::changed(format!("removed contact {name}")))
}

/// `search <query…>`
pub fn search(book: &AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 1, usage::SEARCH)?;
    if let [keyword] = tokens {
        if let Some(hint) = keyword_hint(&keyword.to_lowercase()) {
            return Ok(Outcome::unchanged(hint));
        }
    }
    let results = book.search(&tokens.join(" "));
    if results.is_empty() {
        return Ok(Outcome::unchanged("no matches found"));
    }
    Ok(Outcome::unchanged(results.join("\n")))
}

fn keyword_hint(keyword: &str) -> Option<&'static str> {
    match keyword {
        "note" | "notes" => Some("to search notes use 'searchnote <keyword>'"),
        "email" => Some("search with an email or a part of it, e.g. 'search gmail'"),
        "address" => Some("search with a word from the address, e.g. 'search kyiv'"),
        "birthday" | "bday" | "birth" => {
            Some("search with a date or a part of it, e.g. 'search 03.11.1991'")
        }
        _ => None,
    }
}

use super::{record_mut, require_tokens, usage, OpResult, Outcome};
use crate::book::AddressBook;
use crate::domain::{format_birthday_date, Birthday};
use crate::error::{CommandError, Field};
use crate::resolve::resolve_trailing;
use crate::rules::birthdays::validate_horizon_days;
use chrono::NaiveDate;

pub fn add_birthday(book: &mut AddressBook, tokens: &[String], today: NaiveDate) -> OpResult {
    let resolved = resolve_trailing(book, tokens, 1, usage::ADD_BIRTHDAY)?;
    let birthday = Birthday::parse(&resolved.operand[0], today)?;
    record_mut(book, &resolved.name)?.add_birthday(birthday)?;
    Ok(Outcome::changed(format!("added birthday for {}", resolved.name)))
}

/// Sets the birthday even when none was set before.
pub fn edit_birthday(book: &mut AddressBook, tokens: &[String], today: NaiveDate) -> OpResult {
    let resolved = resolve_trailing(book, tokens, 1, usage::EDIT_BIRTHDAY)?;
    let birthday = Birthday::parse(&resolved.operand[0], today)?;
    record_mut(book, &resolved.name)?.edit_birthday(birthday);
    Ok(Outcome::changed(format!("updated birthday for {}", resolved.name)))
}

pub fn remove_birthday(book: &mut AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 1, usage::REMOVE_BIRTHDAY)?;
    let record = book
        .find_mut(&tokens.join(" "))
        .ok_or(CommandError::ContactNotFound)?;
    let name = record.name().as_str().to_string();
    match record.remove_birthday() {
        Some(_) => Ok(Outcome::changed(format!("removed birthday for {name}"))),
        None => Ok(Outcome::unchanged(format!("{name} has no birthday set"))),
    }
}

/// `showbday <fragment…>`: every contact whose name contains the fragment
/// and has a birthday.
pub fn show_birthday(book: &AddressBook, tokens: &[String]) -> OpResult {
    require_tokens(tokens, 1, usage::SHOW_BIRTHDAY)?;
    let matches = book.names_containing(&tokens.join(" "));
    if matches.is_empty() {
        return Err(CommandError::ContactNotFound);
    }
    let lines: Vec<String> = matches
        .iter()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}: {}", record.name(), birthday))
        })
        .collect();
    match lines.len() {
        0 => Err(CommandError::NotSet(Field::Birthday)),
        1 => Ok(Outcome::unchanged(lines.join(""))),
        _ => Ok(Outcome::unchanged(format!(
            "multiple contacts found:\n{}",
            lines.join("\n")
        ))),
    }
}

/// `upcomingbdays [days]`: one `Name: DD.MM.YYYY` line per birthday, using
/// the congratulation date.
pub fn upcoming_birthdays(
    book: &AddressBook,
    tokens: &[String],
    today: NaiveDate,
    default_days: i64,
) -> OpResult {
    let days = match tokens {
        [] => default_days,
        [days] => validate_horizon_days(days)?,
        _ => return Err(CommandError::Usage(usage::UPCOMING_BIRTHDAYS)),
    };
    let upcoming = book.upcoming_birthdays(today, days);
    if upcoming.is_empty() {
        return Ok(Outcome::unchanged(format!(
            "no upcoming birthdays in the next {days} days"
        )));
    }
    let lines = upcoming
        .iter()
        .map(|entry| {
            format!(
                "{}: {}",
                entry.name,
                format_birthday_date(entry.congratulate_on)
            )
        })
        .collect::<Vec<_>>();
    Ok(Outcome::unchanged(lines.join("\n")))
}

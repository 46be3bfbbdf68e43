use anyhow::Result;
use std::str::FromStr;

use crate::error::CliError;
use crate::render;
use crate::session::Session;
use crate::suggest::suggest_command;
use addrbook_core::ops::{addresses, birthdays, contacts, emails, notes, phones};
use addrbook_core::Outcome;

pub mod backup;
pub mod help;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Exit,
    AddContact,
    EditName,
    RemoveContact,
    Search,
    All,
    Backup,
    AddPhone,
    ChangePhone,
    RemovePhone,
    ShowPhone,
    AddBirthday,
    ShowBirthday,
    EditBirthday,
    RemoveBirthday,
    UpcomingBirthdays,
    AddEmail,
    EditEmail,
    RemoveEmail,
    AddAddress,
    EditAddress,
    RemoveAddress,
    AddNote,
    EditNote,
    RemoveNote,
    SearchNote,
    AddTag,
    RemoveTag,
    SearchTag,
    SortTag,
}

/// Every name the prompt accepts, in the order `help` lists them.
pub const COMMANDS: &[(&str, Command)] = &[
    ("hello", Command::Hello),
    ("help", Command::Help),
    ("exit", Command::Exit),
    ("close", Command::Exit),
    ("addcontact", Command::AddContact),
    ("editname", Command::EditName),
    ("removecontact", Command::RemoveContact),
    ("search", Command::Search),
    ("all", Command::All),
    ("backup", Command::Backup),
    ("addphone", Command::AddPhone),
    ("changephone", Command::ChangePhone),
    ("removephone", Command::RemovePhone),
    ("showphone", Command::ShowPhone),
    ("addbday", Command::AddBirthday),
    ("showbday", Command::ShowBirthday),
    ("editbday", Command::EditBirthday),
    ("removebday", Command::RemoveBirthday),
    ("upcomingbdays", Command::UpcomingBirthdays),
    ("addemail", Command::AddEmail),
    ("editemail", Command::EditEmail),
    ("removeemail", Command::RemoveEmail),
    ("addaddress", Command::AddAddress),
    ("editaddress", Command::EditAddress),
    ("removeaddress", Command::RemoveAddress),
    ("addnote", Command::AddNote),
    ("editnote", Command::EditNote),
    ("removenote", Command::RemoveNote),
    ("searchnote", Command::SearchNote),
    ("addtag", Command::AddTag),
    ("removetag", Command::RemoveTag),
    ("searchtag", Command::SearchTag),
    ("sorttag", Command::SortTag),
];

/// Accepted but never suggested.
const ALIASES: &[(&str, Command)] = &[("ex", Command::Exit)];

pub fn command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|(name, _)| *name).collect()
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let name = raw.to_lowercase();
        COMMANDS
            .iter()
            .chain(ALIASES)
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, command)| *command)
            .ok_or_else(|| CliError::UnknownCommand(suggest_command(&name, &command_names())))
    }
}

pub fn dispatch(session: &mut Session, command: Command, args: &[String]) -> Result<Outcome> {
    let book = &mut session.book;
    let today = session.today;
    let outcome = match command {
        Command::Hello => Outcome::unchanged("how can I help you?"),
        Command::Help => Outcome::unchanged(help::text()),
        Command::Exit => Outcome::unchanged("good bye"),
        Command::All => Outcome::unchanged(render::contacts_table(book)),
        Command::Backup => return backup::backup(session, args),
        Command::AddContact => contacts::add_contact(book, args)?,
        Command::EditName => contacts::edit_name(book, args)?,
        Command::RemoveContact => contacts::remove_contact(book, args)?,
        Command::Search => contacts::search(book, args)?,
        Command::AddPhone => phones::add_phone(book, args)?,
        Command::ChangePhone => phones::change_phone(book, args)?,
        Command::RemovePhone => phones::remove_phone(book, args)?,
        Command::ShowPhone => phones::show_phone(book, args)?,
        Command::AddBirthday => birthdays::add_birthday(book, args, today)?,
        Command::ShowBirthday => birthdays::show_birthday(book, args)?,
        Command::EditBirthday => birthdays::edit_birthday(book, args, today)?,
        Command::RemoveBirthday => birthdays::remove_birthday(book, args)?,
        Command::UpcomingBirthdays => {
            birthdays::upcoming_birthdays(book, args, today, session.config.upcoming_days)?
        }
        Command::AddEmail => emails::add_email(book, args)?,
        Command::EditEmail => emails::edit_email(book, args)?,
        Command::RemoveEmail => emails::remove_email(book, args)?,
        Command::AddAddress => addresses::add_address(book, args)?,
        Command::EditAddress => addresses::edit_address(book, args)?,
        Command::RemoveAddress => addresses::remove_address(book, args)?,
        Command::AddNote => notes::add_note(book, args)?,
        Command::EditNote => notes::edit_note(book, args)?,
        Command::RemoveNote => notes::remove_note(book, args)?,
        Command::SearchNote => notes::search_notes(book, args)?,
        Command::AddTag => notes::add_tag(book, args)?,
        Command::RemoveTag => notes::remove_tag(book, args)?,
        Command::SearchTag => notes::search_tag(book, args)?,
        Command::SortTag => notes::sort_tags(book)?,
    };
    Ok(outcome)
}

use crate::domain::address::Address;
use crate::domain::birthday::Birthday;
use crate::domain::email::Email;
use crate::domain::name::ContactName;
use crate::domain::note::{strip_tags, Note};
use crate::domain::phone::Phone;
use crate::error::{CommandError, Field};
use std::fmt;

/// A single contact.
///
/// Phones and notes are unique within the record. Phone mutations that
/// could collide with another contact are only exposed through
/// [`crate::AddressBook`], which checks the whole collection first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
    email: Option<Email>,
    address: Option<Address>,
    notes: Vec<Note>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteInsert {
    Added,
    AlreadyExists,
}

impl Record {
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
            notes: Vec::new(),
        }
    }

    /// Reassembles a record from persisted parts, dropping repeated phones
    /// and notes.
    pub fn from_parts(
        name: ContactName,
        phones: Vec<Phone>,
        birthday: Option<Birthday>,
        email: Option<Email>,
        address: Option<Address>,
        notes: Vec<Note>,
    ) -> Self {
        let mut record = Self::new(name);
        for phone in phones {
            if !record.has_phone(&phone) {
                record.phones.push(phone);
            }
        }
        for note in notes {
            if !record.notes.contains(&note) {
                record.notes.push(note);
            }
        }
        record.birthday = birthday;
        record.email = email;
        record.address = address;
        record
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.iter().any(|existing| existing == phone)
    }

    pub(crate) fn rename(&mut self, name: ContactName) {
        self.name = name;
    }

    pub(crate) fn add_phone(&mut self, phone: Phone) -> Result<(), CommandError> {
        if self.has_phone(&phone) {
            return Err(CommandError::DuplicatePhone(phone.as_str().to_string()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Replaces `old` in place, keeping its position. Replacing a number
    /// with itself counts as a duplicate.
    pub(crate) fn replace_phone(&mut self, old: &str, new: Phone) -> Result<(), CommandError> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| CommandError::PhoneNotFound(old.to_string()))?;
        if self.has_phone(&new) {
            return Err(CommandError::DuplicatePhone(new.as_str().to_string()));
        }
        self.phones[index] = new;
        Ok(())
    }

    pub fn remove_phone(&mut self, phone: &str) -> Result<Phone, CommandError> {
        let index = self
            .phones
            .iter()
            .position(|existing| existing.as_str() == phone)
            .ok_or_else(|| CommandError::PhoneNotFound(phone.to_string()))?;
        Ok(self.phones.remove(index))
    }

    pub fn add_birthday(&mut self, birthday: Birthday) -> Result<(), CommandError> {
        if self.birthday.is_some() {
            return Err(CommandError::AlreadySet(Field::Birthday));
        }
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Sets the birthday whether or not one exists.
    pub fn edit_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn remove_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    pub fn add_email(&mut self, email: Email) -> Result<(), CommandError> {
        if self.email.is_some() {
            return Err(CommandError::AlreadySet(Field::Email));
        }
        self.email = Some(email);
        Ok(())
    }

    pub fn edit_email(&mut self, email: Email) -> Result<(), CommandError> {
        match self.email.as_mut() {
            Some(existing) => {
                *existing = email;
                Ok(())
            }
            None => Err(CommandError::NotSet(Field::Email)),
        }
    }

    pub fn remove_email(&mut self) -> Result<Email, CommandError> {
        self.email.take().ok_or(CommandError::NotSet(Field::Email))
    }

    pub fn add_address(&mut self, address: Address) -> Result<(), CommandError> {
        if self.address.is_some() {
            return Err(CommandError::AlreadySet(Field::Address));
        }
        self.address = Some(address);
        Ok(())
    }

    /// Sets the address whether or not one exists.
    pub fn edit_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn remove_address(&mut self) -> Result<Address, CommandError> {
        self.address.take().ok_or(CommandError::NotSet(Field::Address))
    }

    /// Notes are de-duplicated by text alone: a note whose text matches an
    /// existing one is not added and the existing tags are left untouched.
    pub fn add_note(&mut self, note: Note) -> NoteInsert {
        if self.find_note(note.text()).is_some() {
            return NoteInsert::AlreadyExists;
        }
        self.notes.push(note);
        NoteInsert::Added
    }

    pub fn find_note(&self, text: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.matches_text(text))
    }

    pub fn find_note_mut(&mut self, text: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.matches_text(text))
    }

    pub fn edit_note(&mut self, old_text: &str, new: Note) -> Result<(), CommandError> {
        let index = self
            .notes
            .iter()
            .position(|note| note.matches_text(old_text))
            .ok_or(CommandError::NoteNotFound)?;
        let collides = self
            .notes
            .iter()
            .enumerate()
            .any(|(other, note)| other != index && note.matches_text(new.text()));
        if collides {
            return Err(CommandError::DuplicateNote(new.text().to_string()));
        }
        self.notes[index] = new;
        Ok(())
    }

    /// Removes the note whose text matches `text` once any `#tag` tokens are
    /// stripped from it.
    pub fn remove_note(&mut self, text: &str) -> Result<Note, CommandError> {
        let wanted = strip_tags(text);
        let index = self
            .notes
            .iter()
            .position(|note| note.matches_text(&wanted))
            .ok_or(CommandError::NoteNotFound)?;
        Ok(self.notes.remove(index))
    }

    pub fn clear_notes(&mut self) -> usize {
        let removed = self.notes.len();
        self.notes.clear();
        removed
    }

    pub fn notes_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Note> + 'a {
        self.notes.iter().filter(move |note| note.has_tag(tag))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        if self.phones.is_empty() {
            f.write_str("no phone numbers")?;
        } else {
            let phones = self
                .phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            f.write_str(&phones)?;
        }
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {birthday}")?;
        }
        if let Some(email) = &self.email {
            write!(f, ", Email: {email}")?;
        }
        if let Some(address) = &self.address {
            write!(f, ", Address: {address}")?;
        }
        if !self.notes.is_empty() {
            let notes = self
                .notes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            write!(f, ", Notes: {notes}")?;
        }
        Ok(())
    }
}

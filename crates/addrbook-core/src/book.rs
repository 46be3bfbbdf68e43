use crate::domain::{name_key, ContactName, Note, Phone, Record, TagName};
use crate::error::CommandError;
use crate::rules::birthdays::{upcoming_birthdays, UpcomingBirthday};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Contacts keyed by case-insensitive name, in insertion order.
///
/// A phone number belongs to at most one record; every operation that can
/// attach a phone to a record goes through this type so the check covers
/// the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Inserts under the record's name, silently replacing (in place) any
    /// record with the same name.
    pub fn add(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|index| &mut self.records[index])
    }

    pub fn name_exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn delete(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    /// Delete-then-insert: the renamed record moves to the end. A record
    /// already stored under `new` is replaced, so callers check first.
    pub fn rename(&mut self, old: &str, new: ContactName) -> bool {
        let Some(index) = self.position(old) else {
            return false;
        };
        let mut record = self.records.remove(index);
        record.rename(new);
        self.add(record);
        true
    }

    pub fn phone_owner(&self, phone: &Phone) -> Option<&Record> {
        self.records.iter().find(|record| record.has_phone(phone))
    }

    pub fn add_phone(&mut self, name: &str, phone: Phone) -> Result<(), CommandError> {
        let index = self.position(name).ok_or(CommandError::ContactNotFound)?;
        if self.records[index].has_phone(&phone) {
            return Err(CommandError::DuplicatePhone(phone.as_str().to_string()));
        }
        self.ensure_unclaimed(index, &phone)?;
        self.records[index].add_phone(phone)
    }

    pub fn edit_phone(&mut self, name: &str, old: &str, new: Phone) -> Result<(), CommandError> {
        let index = self.position(name).ok_or(CommandError::ContactNotFound)?;
        if !self.records[index].phones().iter().any(|p| p.as_str() == old) {
            return Err(CommandError::PhoneNotFound(old.to_string()));
        }
        self.ensure_unclaimed(index, &new)?;
        self.records[index].replace_phone(old, new)
    }

    /// Case-insensitive substring match over name, phones, email, address
    /// and the birthday as stored. Returns the rendering of each match.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.matching(query).map(ToString::to_string).collect()
    }

    pub fn matching<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Record> + 'a {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(move |record| record_matches(record, &query))
    }

    /// Records whose name contains `fragment`, ignoring case.
    pub fn names_containing(&self, fragment: &str) -> Vec<&Record> {
        let fragment = name_key(fragment);
        self.records
            .iter()
            .filter(|record| record.name().key().contains(&fragment))
            .collect()
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: i64) -> Vec<UpcomingBirthday> {
        upcoming_birthdays(self.records.iter(), today, horizon_days)
    }

    /// Every tagged note grouped by tag, tags in ascending order.
    pub fn notes_by_tag(&self) -> BTreeMap<&TagName, Vec<(&Record, &Note)>> {
        let mut groups: BTreeMap<&TagName, Vec<(&Record, &Note)>> = BTreeMap::new();
        for record in &self.records {
            for note in record.notes() {
                for tag in note.tags() {
                    groups.entry(tag).or_default().push((record, note));
                }
            }
        }
        groups
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name_key(name);
        self.records
            .iter()
            .position(|record| record.name().key() == key)
    }

    fn ensure_unclaimed(&self, index: usize, phone: &Phone) -> Result<(), CommandError> {
        let owner = self
            .records
            .iter()
            .enumerate()
            .find(|(other, record)| *other != index && record.has_phone(phone));
        match owner {
            Some((_, record)) => Err(CommandError::PhoneOwnedByOther {
                phone: phone.as_str().to_string(),
                owner: record.name().as_str().to_string(),
            }),
            None => Ok(()),
        }
    }
}

fn record_matches(record: &Record, query: &str) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(query);
    contains(record.name().as_str())
        || record.phones().iter().any(|phone| contains(phone.as_str()))
        || record.email().is_some_and(|email| contains(email.as_str()))
        || record.address().is_some_and(|address| contains(address.as_str()))
        || record.birthday().is_some_and(|birthday| contains(birthday.as_str()))
}

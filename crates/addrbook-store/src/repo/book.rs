use crate::error::{Result, StoreError};
use addrbook_core::{
    Address, AddressBook, Birthday, ContactName, Email, Note, Phone, Record, TagName,
    ValidationError,
};
use rusqlite::{params, Connection};

/// Whole-book persistence: `save` replaces everything stored, `load`
/// rebuilds the book in its saved order.
pub struct BookRepo<'a> {
    conn: &'a Connection,
}

struct ContactRow {
    id: i64,
    name: String,
    birthday: Option<String>,
    email: Option<String>,
    address: Option<String>,
}

impl<'a> BookRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Names, phones, emails, addresses and tags are validated again;
    /// birthdays are restored as stored.
    pub fn load(&self) -> Result<AddressBook> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, birthday, email, address
             FROM contacts
             ORDER BY position ASC;",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(ContactRow {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    birthday: row.get(2)?,
                    email: row.get(3)?,
                    address: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut book = AddressBook::new();
        for row in rows {
            book.add(self.record_from_row(row)?);
        }
        Ok(book)
    }

    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute_batch(
            "DELETE FROM note_tags;
             DELETE FROM notes;
             DELETE FROM phones;
             DELETE FROM contacts;",
        )?;

        for (position, record) in book.iter().enumerate() {
            tx.execute(
                "INSERT INTO contacts (position, name, birthday, email, address)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    position as i64,
                    record.name().as_str(),
                    record.birthday().map(Birthday::as_str),
                    record.email().map(Email::as_str),
                    record.address().map(Address::as_str),
                ],
            )?;
            let contact_id = tx.last_insert_rowid();

            for (position, phone) in record.phones().iter().enumerate() {
                tx.execute(
                    "INSERT INTO phones (contact_id, position, phone) VALUES (?1, ?2, ?3);",
                    params![contact_id, position as i64, phone.as_str()],
                )?;
            }

            for (position, note) in record.notes().iter().enumerate() {
                tx.execute(
                    "INSERT INTO notes (contact_id, position, text) VALUES (?1, ?2, ?3);",
                    params![contact_id, position as i64, note.text()],
                )?;
                let note_id = tx.last_insert_rowid();
                for tag in note.tags() {
                    tx.execute(
                        "INSERT INTO note_tags (note_id, tag) VALUES (?1, ?2);",
                        params![note_id, tag.as_str()],
                    )?;
                }
            }
        }

        tx.commit()?;
        Ok(())
    }

    fn record_from_row(&self, row: ContactRow) -> Result<Record> {
        let invalid = |source: ValidationError| StoreError::InvalidRecord {
            name: row.name.clone(),
            source,
        };

        let name = ContactName::new(&row.name).map_err(invalid)?;
        let phones = self
            .list_phones(row.id)?
            .iter()
            .map(|raw| Phone::new(raw))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(invalid)?;
        let email = row
            .email
            .as_deref()
            .map(Email::new)
            .transpose()
            .map_err(invalid)?;
        let address = row
            .address
            .as_deref()
            .map(Address::new)
            .transpose()
            .map_err(invalid)?;
        let mut notes = Vec::new();
        for (note_id, text) in self.list_notes(row.id)? {
            let tags = self
                .list_note_tags(note_id)?
                .iter()
                .map(|raw| TagName::new(raw))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(invalid)?;
            notes.push(Note::new(&text, tags).map_err(invalid)?);
        }

        Ok(Record::from_parts(
            name,
            phones,
            row.birthday.clone().map(Birthday::from_stored),
            email,
            address,
            notes,
        ))
    }

    fn list_phones(&self, contact_id: i64) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT phone FROM phones WHERE contact_id = ?1 ORDER BY position ASC;",
        )?;
        let phones = stmt
            .query_map([contact_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(phones)
    }

    fn list_notes(&self, contact_id: i64) -> Result<Vec<(i64, String)>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, text FROM notes WHERE contact_id = ?1 ORDER BY position ASC;",
        )?;
        let notes = stmt
            .query_map([contact_id], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    fn list_note_tags(&self, note_id: i64) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag FROM note_tags WHERE note_id = ?1 ORDER BY tag ASC;")?;
        let tags = stmt
            .query_map([note_id], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(tags)
    }
}

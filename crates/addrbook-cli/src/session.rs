use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, warn};

use crate::commands::{self, Command};
use crate::error::invalid_input;
use addrbook_config::AppConfig;
use addrbook_core::ops::birthdays::upcoming_birthdays;
use addrbook_core::AddressBook;
use addrbook_store::Store;

/// What the prompt should do after a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Reply(String),
    Exit,
}

/// Everything one run of the program works on. `store` is `None` when the
/// database could not be opened or read; the book is then kept in memory
/// only and the unreadable file is left alone.
pub struct Session {
    pub(crate) book: AddressBook,
    pub(crate) store: Option<Store>,
    pub(crate) config: AppConfig,
    pub(crate) today: NaiveDate,
    dirty: bool,
}

impl Session {
    pub fn new(
        book: AddressBook,
        store: Option<Store>,
        config: AppConfig,
        today: NaiveDate,
    ) -> Self {
        Self {
            book,
            store,
            config,
            today,
            dirty: false,
        }
    }

    /// Never fails: a database that cannot be loaded yields an empty book.
    pub fn open(path: &Path, config: AppConfig, today: NaiveDate) -> Self {
        match load(path) {
            Ok((store, book)) => {
                debug!(records = book.len(), "book loaded");
                Self::new(book, Some(store), config, today)
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %format!("{err:#}"),
                    "failed to load book, starting with an empty one"
                );
                Self::new(AddressBook::new(), None, config, today)
            }
        }
    }

    pub fn execute(&mut self, line: &str) -> Result<Step> {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        let Some((name, args)) = tokens.split_first() else {
            return Err(invalid_input("no command given, type 'help' to see available commands"));
        };
        let command = name.parse::<Command>().inspect_err(|_| {
            debug!(command = %name, "unknown command");
        })?;
        if command == Command::Exit {
            return Ok(Step::Exit);
        }

        let outcome = commands::dispatch(self, command, args)?;
        if outcome.changed {
            self.dirty = true;
            if self.config.autosave {
                if let Err(err) = self.save() {
                    warn!(error = %format!("{err:#}"), "failed to save book");
                }
            }
        }
        Ok(Step::Reply(outcome.message))
    }

    /// Birthdays within the configured horizon, as shown when the prompt
    /// starts.
    pub fn upcoming_summary(&self) -> String {
        match upcoming_birthdays(&self.book, &[], self.today, self.config.upcoming_days) {
            Ok(outcome) => outcome.message,
            Err(err) => err.to_string(),
        }
    }

    pub fn save(&mut self) -> Result<()> {
        let Some(store) = &self.store else {
            debug!("no readable database, book kept in memory only");
            return Ok(());
        };
        store
            .book()
            .save(&self.book)
            .with_context(|| "save book")?;
        self.dirty = false;
        debug!(records = self.book.len(), "book saved");
        Ok(())
    }

    /// Saves whatever has not been saved yet.
    pub fn close(&mut self) -> Result<()> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }
}

fn load(path: &Path) -> Result<(Store, AddressBook)> {
    let store =
        Store::open(path).with_context(|| format!("open database {}", path.display()))?;
    store.migrate().with_context(|| "run migrations")?;
    let book = store.book().load().with_context(|| "load book")?;
    Ok((store, book))
}

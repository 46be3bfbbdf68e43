use anyhow::{Context as _, Result};
use std::fs;
use std::path::PathBuf;

use crate::error::invalid_input;
use crate::session::Session;
use addrbook_core::Outcome;
use addrbook_store::error::StoreError;
use addrbook_store::paths::expand_home;

const USAGE: &str = "backup requires a target file, e.g. 'backup ~/addrbook-backup.sqlite3'";

/// `backup <path>`: saves pending changes, then copies the database.
pub fn backup(session: &mut Session, args: &[String]) -> Result<Outcome> {
    if args.is_empty() {
        return Err(invalid_input(USAGE));
    }
    let out = expand_home(&PathBuf::from(args.join(" ")))
        .with_context(|| "expand backup path")?;
    session.save()?;
    let Some(store) = &session.store else {
        return Err(invalid_input(
            "no readable database is open, nothing to back up",
        ));
    };

    if let Err(err) = store.backup_to(&out) {
        if matches!(err, StoreError::InvalidBackupPath(_)) {
            return Err(err)
                .with_context(|| format!("backup path matches database: {}", out.display()));
        }
        return Err(err).with_context(|| format!("backup database to {}", out.display()));
    }

    let size = fs::metadata(&out)
        .with_context(|| format!("stat backup file {}", out.display()))?
        .len();
    Ok(Outcome::unchanged(format!(
        "backup written to {} ({size} bytes)",
        out.display()
    )))
}

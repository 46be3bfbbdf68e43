use addrbook_config::ConfigError;
use addrbook_core::{CommandError, ErrorKind};
use addrbook_store::error::{StoreError, StoreErrorKind};
use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    UnknownCommand(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

/// Failures a user caused with the command line itself, as opposed to
/// storage or I/O trouble.
pub fn is_command_failure(err: &Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<CommandError>().is_some() || cause.downcast_ref::<CliError>().is_some()
    })
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(command_err) = cause.downcast_ref::<CommandError>() {
            return command_exit_code(command_err);
        }
        if cause.downcast_ref::<CliError>().is_some() {
            return EXIT_INVALID_INPUT;
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn command_exit_code(err: &CommandError) -> u8 {
    match err.kind() {
        ErrorKind::NotFound => EXIT_NOT_FOUND,
        ErrorKind::Validation | ErrorKind::Duplicate | ErrorKind::Conflict | ErrorKind::Usage => {
            EXIT_INVALID_INPUT
        }
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidRecord
        | StoreErrorKind::InvalidDataPath
        | StoreErrorKind::InvalidBackupPath => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir
        | StoreErrorKind::Migration
        | StoreErrorKind::Sql
        | StoreErrorKind::Io => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidUpcomingDays(_)
        | ConfigError::InvalidBookPath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status, invalid_input, is_command_failure};
    use addrbook_core::CommandError;
    use addrbook_store::error::StoreError;
    use anyhow::{Context as _, Error};

    #[test]
    fn command_errors_map_by_kind() {
        let not_found = Error::from(CommandError::ContactNotFound);
        assert_eq!(exit_status(&not_found), 2);
        let usage = Error::from(CommandError::Usage("usage"));
        assert_eq!(exit_status(&usage), 3);
        assert!(is_command_failure(&usage));
    }

    #[test]
    fn context_does_not_hide_the_cause() {
        let err = Err::<(), _>(StoreError::Migration("boom".to_string()))
            .context("run migrations")
            .unwrap_err();
        assert_eq!(exit_status(&err), 1);
        assert!(!is_command_failure(&err));
        assert_eq!(exit_status(&invalid_input("bad")), 3);
    }
}

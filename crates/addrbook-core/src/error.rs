use crate::domain::phone::VALID_CODES;
use crate::domain::birthday::MIN_BIRTH_YEAR;
use crate::rules::birthdays::MAX_HORIZON_DAYS;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("contact name cannot be empty")]
    EmptyName,
    #[error("phone number must contain exactly 10 digits: {0}")]
    PhoneLength(String),
    #[error("phone number must start with a valid code ({codes}): {0}", codes = VALID_CODES.join(", "))]
    PhoneCode(String),
    #[error("invalid date format: use DD.MM.YYYY, for example 15.05.1990")]
    BirthdayFormat,
    #[error("birthday cannot be in the future")]
    BirthdayInFuture,
    #[error("unrealistic birthday: the year must be {min} or later", min = MIN_BIRTH_YEAR)]
    BirthdayTooEarly,
    #[error("invalid email format: use name@example.com")]
    EmailFormat,
    #[error("address cannot be empty")]
    EmptyAddress,
    #[error("note text cannot be empty")]
    EmptyNote,
    #[error("invalid tag '{0}': only letters, digits and underscores are allowed (1-30 chars)")]
    Tag(String),
    #[error("invalid number of days: {0} (expected 1..={max})", max = MAX_HORIZON_DAYS)]
    HorizonDays(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Birthday,
    Email,
    Address,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Birthday => "birthday",
            Field::Email => "email",
            Field::Address => "address",
        }
    }

    fn edit_command(self) -> &'static str {
        match self {
            Field::Birthday => "editbday",
            Field::Email => "editemail",
            Field::Address => "editaddress",
        }
    }

    fn add_command(self) -> &'static str {
        match self {
            Field::Birthday => "addbday",
            Field::Email => "addemail",
            Field::Address => "addaddress",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Usage(&'static str),
    #[error("contact not found")]
    ContactNotFound,
    #[error("phone number '{0}' not found")]
    PhoneNotFound(String),
    #[error("note not found, check the note text")]
    NoteNotFound,
    #[error("tag '#{0}' not found in this note")]
    TagNotFound(String),
    #[error("{0} is not set, use '{cmd}' to add one", cmd = .0.add_command())]
    NotSet(Field),
    #[error("{0} is already set, use '{cmd}' to change it", cmd = .0.edit_command())]
    AlreadySet(Field),
    #[error("a contact named '{0}' already exists")]
    DuplicateContact(String),
    #[error("the number '{0}' already exists for this contact")]
    DuplicatePhone(String),
    #[error("a note with the text '{0}' already exists")]
    DuplicateNote(String),
    #[error("tag '#{0}' is already present in the note")]
    DuplicateTag(String),
    #[error("the number '{phone}' already belongs to '{owner}'")]
    PhoneOwnedByOther { phone: String, owner: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Duplicate,
    Conflict,
    Usage,
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Validation(_) => ErrorKind::Validation,
            CommandError::Usage(_) => ErrorKind::Usage,
            CommandError::ContactNotFound
            | CommandError::PhoneNotFound(_)
            | CommandError::NoteNotFound
            | CommandError::TagNotFound(_)
            | CommandError::NotSet(_) => ErrorKind::NotFound,
            CommandError::AlreadySet(_)
            | CommandError::DuplicateContact(_)
            | CommandError::DuplicatePhone(_)
            | CommandError::DuplicateNote(_)
            | CommandError::DuplicateTag(_) => ErrorKind::Duplicate,
            CommandError::PhoneOwnedByOther { .. } => ErrorKind::Conflict,
        }
    }
}

pub mod book;
pub mod domain;
pub mod error;
pub mod ops;
pub mod resolve;
pub mod rules;

pub use book::AddressBook;
pub use domain::*;
pub use error::{CommandError, ErrorKind, Field, ValidationError};
pub use ops::Outcome;
pub use rules::*;

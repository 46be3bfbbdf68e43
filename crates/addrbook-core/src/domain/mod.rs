pub mod address;
pub mod birthday;
pub mod email;
pub mod name;
pub mod note;
pub mod phone;
pub mod record;
pub mod tag;

pub use address::{format_address, Address};
pub use birthday::{format_birthday_date, Birthday, BIRTHDAY_FORMAT, MIN_BIRTH_YEAR};
pub use email::{is_valid_email, Email};
pub use name::{name_key, normalize_name, ContactName};
pub use note::{split_tags, strip_tags, Note};
pub use phone::{is_phone_shaped, Phone, VALID_CODES};
pub use record::{NoteInsert, Record};
pub use tag::{normalize_tag_name, TagName};

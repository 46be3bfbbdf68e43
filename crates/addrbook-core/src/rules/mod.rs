pub mod birthdays;

pub use birthdays::{
    congratulation_date, next_occurrence, upcoming_birthdays, validate_horizon,
    validate_horizon_days, UpcomingBirthday, DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS,
};

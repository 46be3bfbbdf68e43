use crate::domain::Record;
use crate::error::ValidationError;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const DEFAULT_HORIZON_DAYS: i64 = 7;
pub const MAX_HORIZON_DAYS: i64 = 365;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The next anniversary on or after today.
    pub birthday: NaiveDate,
    pub congratulate_on: NaiveDate,
}

pub fn validate_horizon(days: i64) -> Result<i64, ValidationError> {
    if (1..=MAX_HORIZON_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(ValidationError::HorizonDays(days.to_string()))
    }
}

pub fn validate_horizon_days(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::HorizonDays(raw.to_string()))
        .and_then(validate_horizon)
}

/// The first anniversary of `birthday` falling on or after `today`.
/// A 29 February birthday is observed on 28 February in common years.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birthday, today.year());
    if this_year < today {
        anniversary_in(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Weekend birthdays are congratulated on the following Monday.
pub fn congratulation_date(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}

/// Birthdays whose next anniversary lies in `[today, today + horizon_days]`.
///
/// The range check uses the anniversary itself, so a Saturday birthday on
/// the last day of the range is still reported, with a congratulation date
/// past the horizon. Records without a parseable birthday are skipped.
/// Results are ordered by congratulation date, ties keeping record order.
/// A horizon that runs past the calendar range yields nothing.
pub fn upcoming_birthdays<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    today: NaiveDate,
    horizon_days: i64,
) -> Vec<UpcomingBirthday> {
    let Some(last_day) = Duration::try_days(horizon_days).and_then(|d| today.checked_add_signed(d))
    else {
        return Vec::new();
    };
    let mut upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let date = record.birthday()?.date()?;
            let next = next_occurrence(date, today);
            (next <= last_day).then(|| UpcomingBirthday {
                name: record.name().as_str().to_string(),
                birthday: next,
                congratulate_on: congratulation_date(next),
            })
        })
        .collect();
    upcoming.sort_by_key(|entry| entry.congratulate_on);
    upcoming
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), 28))
        .unwrap_or(birthday)
}

#[cfg(test)]
mod tests {
    use super::{
        congratulation_date, next_occurrence, upcoming_birthdays, validate_horizon,
        validate_horizon_days, DEFAULT_HORIZON_DAYS,
    };
    use crate::domain::{Birthday, ContactName, Record};
    use chrono::NaiveDate;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn with_birthday(name: &str, raw: &str) -> Record {
        let mut record = Record::new(ContactName::new(name).expect("name"));
        record.edit_birthday(Birthday::from_stored(raw));
        record
    }

    #[test]
    fn next_occurrence_rolls_into_next_year() {
        assert_eq!(next_occurrence(date(15, 5, 1990), date(10, 5, 2025)), date(15, 5, 2025));
        assert_eq!(next_occurrence(date(10, 5, 1990), date(10, 5, 2025)), date(10, 5, 2025));
        assert_eq!(next_occurrence(date(9, 5, 1990), date(10, 5, 2025)), date(9, 5, 2026));
    }

    #[test]
    fn leap_day_birthday_falls_back_to_feb_28() {
        assert_eq!(next_occurrence(date(29, 2, 2000), date(20, 2, 2025)), date(28, 2, 2025));
        assert_eq!(next_occurrence(date(29, 2, 2000), date(20, 2, 2028)), date(29, 2, 2028));
    }

    #[test]
    fn weekend_dates_shift_to_monday() {
        assert_eq!(congratulation_date(date(17, 5, 2025)), date(19, 5, 2025));
        assert_eq!(congratulation_date(date(18, 5, 2025)), date(19, 5, 2025));
        assert_eq!(congratulation_date(date(15, 5, 2025)), date(15, 5, 2025));
    }

    #[test]
    fn weekday_birthday_within_horizon_is_unchanged() {
        let records = [with_birthday("ivan", "15.05.1990")];
        let upcoming = upcoming_birthdays(&records, date(10, 5, 2025), DEFAULT_HORIZON_DAYS);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Ivan");
        assert_eq!(upcoming[0].congratulate_on, date(15, 5, 2025));
    }

    #[test]
    fn inclusion_uses_unshifted_date() {
        let records = [
            with_birthday("saturday", "17.05.1991"),
            with_birthday("outside", "18.05.1991"),
        ];
        let upcoming = upcoming_birthdays(&records, date(10, 5, 2025), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].birthday, date(17, 5, 2025));
        assert_eq!(upcoming[0].congratulate_on, date(19, 5, 2025));
    }

    #[test]
    fn results_sorted_by_congratulation_date() {
        let records = [
            with_birthday("sunday", "18.05.1991"),
            with_birthday("tuesday", "13.05.1992"),
            with_birthday("monday", "19.05.1993"),
        ];
        let upcoming = upcoming_birthdays(&records, date(12, 5, 2025), 7);
        let names: Vec<&str> = upcoming.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["Tuesday", "Sunday", "Monday"]);
    }

    #[test]
    fn malformed_birthdays_are_skipped() {
        let records = [
            with_birthday("broken", "32.13.1990"),
            with_birthday("ok", "11.05.1990"),
        ];
        let upcoming = upcoming_birthdays(&records, date(10, 5, 2025), 7);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].name, "Ok");
    }

    #[test]
    fn horizon_spans_year_end() {
        let records = [with_birthday("newyear", "02.01.1990")];
        let upcoming = upcoming_birthdays(&records, date(28, 12, 2025), 7);
        assert_eq!(upcoming[0].birthday, date(2, 1, 2026));
    }

    #[test]
    fn unrepresentable_horizon_is_empty() {
        let records = [with_birthday("ivan", "11.05.1990")];
        assert!(upcoming_birthdays(&records, date(10, 5, 2025), i64::MAX).is_empty());
        assert!(upcoming_birthdays(&records, date(10, 5, 2025), i64::MIN).is_empty());
        assert_eq!(upcoming_birthdays(&records, date(10, 5, 2025), 1).len(), 1);
    }

    #[test]
    fn horizon_days_are_bounded() {
        assert_eq!(validate_horizon(365), Ok(365));
        assert!(validate_horizon(-1).is_err());
        assert_eq!(validate_horizon_days("30"), Ok(30));
        assert!(validate_horizon_days("0").is_err());
        assert!(validate_horizon_days("366").is_err());
        assert!(validate_horizon_days("week").is_err());
    }
}

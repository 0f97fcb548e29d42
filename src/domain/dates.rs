/// Pure calendar helpers shared by the statistics engine and the views
///
/// Day-keys (`YYYY-MM-DD` strings) are the sole identity for "which day" a
/// completion record belongs to, independent of time-of-day. All functions
/// here are pure and deterministic.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Canonical day-key for a calendar date
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Canonical day-key for an instant, truncated to its UTC calendar day
///
/// Two instants that differ only in time-of-day produce the same key.
pub fn day_key_at(instant: DateTime<Utc>) -> String {
    day_key(instant.date_naive())
}

/// Calendar addition; `days` may be negative
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// The Monday at or before `date`
///
/// Sunday maps to the Monday six days prior.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as i64;
    date - Duration::days(offset)
}

/// The Monday-to-Sunday span containing `date`, used by the week view
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = start_of_week(date);
    std::array::from_fn(|i| add_days(monday, i as i64))
}

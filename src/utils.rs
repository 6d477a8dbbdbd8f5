use chrono::{Datelike, NaiveDate};

/// Calendar-month bucket key for a date, formatted `YYYY-MM`.
///
/// Lexicographic order of these keys equals chronological order, so the
/// monthly table can sort its axis as plain strings.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

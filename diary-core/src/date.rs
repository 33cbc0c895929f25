//! Date keys for diary entries.

use chrono::NaiveDate;

use crate::error::{DiaryError, DiaryResult};

/// Format used for entry filenames and date arguments.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date.
///
/// Only the canonical zero-padded form is accepted, so `2024-1-5` is rejected
/// even though chrono would otherwise read it.
pub fn parse_date(s: &str) -> DiaryResult<NaiveDate> {
    parse_canonical(s)
        .ok_or_else(|| DiaryError::InvalidDate(format!("'{}'. Expected YYYY-MM-DD", s)))
}

pub(crate) fn parse_canonical(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s, DATE_FORMAT).ok()?;
    (format_date(date) == s).then_some(date)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Long human-readable form, e.g. "Friday, January 5, 2024".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

//! Pure date arithmetic with calendar resolution delegated to chrono.
//!
//! Leap years, month lengths, and weekday cycles come from `NaiveDate`
//! rather than hand-rolled rules, so rollover across month and year
//! boundaries is always correct. The contract is locale-independent:
//! weekdays are numbered 0=Sunday..6=Saturday and months 1=January..12.

use std::cmp::Ordering;

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::PickerError;
use crate::types::DateValue;

impl DateValue {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateValue { year, month, day }
    }

    /// Parse a canonical `YYYY-MM-DD` string.
    ///
    /// Parsing is strict: a spelling that does not round-trip back to
    /// itself (unpadded fields, trailing garbage, a day that does not exist
    /// in its month) is rejected. Mixing padded and unpadded forms would
    /// silently break the lexical comparator, so nothing is coerced.
    pub fn parse(s: &str) -> Result<Self, PickerError> {
        let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| PickerError::InvalidDateFormat(s.to_string()))?;
        let value = Self::from_naive(naive);
        if value.canonical() != s {
            return Err(PickerError::InvalidDateFormat(s.to_string()));
        }
        Ok(value)
    }

    /// The fixed-width `YYYY-MM-DD` form used for storage and comparison.
    pub fn canonical(&self) -> String {
        format_date(self.year, self.month, self.day)
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        DateValue {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn to_naive(&self) -> Result<NaiveDate, PickerError> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .ok_or_else(|| PickerError::InvalidDateFormat(self.canonical()))
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, PickerError> {
    if !(1..=12).contains(&month) {
        return Err(PickerError::InvalidMonth(month));
    }
    // Only fails for years outside chrono's representable range.
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| PickerError::InvalidDateFormat(format_date(year, month, 1)))
}

/// Day of week of day 1 of the given month, 0=Sunday..6=Saturday.
pub fn weekday_of_first(year: i32, month: u32) -> Result<u32, PickerError> {
    Ok(first_of_month(year, month)?.weekday().num_days_from_sunday())
}

/// Number of days in a month, read back from the day before the first of
/// the following month. No lookup table, so leap Februaries come out right
/// by construction.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, PickerError> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Validate the requested month before the rollover hides a bad input.
    first_of_month(year, month)?;
    let last = first_of_month(next_year, next_month)?
        .pred_opt()
        .ok_or_else(|| PickerError::DateOverflow(format_date(year, month, 1), -1))?;
    Ok(last.day())
}

/// Walk `n` days forward (or backward, `n < 0`) from a base date, rolling
/// across month and year boundaries.
pub fn add_days(date: DateValue, n: i64) -> Result<DateValue, PickerError> {
    let delta =
        Duration::try_days(n).ok_or_else(|| PickerError::DateOverflow(date.canonical(), n))?;
    let shifted = date
        .to_naive()?
        .checked_add_signed(delta)
        .ok_or_else(|| PickerError::DateOverflow(date.canonical(), n))?;
    Ok(DateValue::from_naive(shifted))
}

/// Format a date triple as canonical `YYYY-MM-DD`.
///
/// Pure string operation: year padded to 4 digits, month and day to 2.
pub fn format_date(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Lexical comparison of two canonical date strings.
///
/// Valid only for the fixed-width big-endian form produced by
/// [`format_date`]; on that form, byte order and chronological order agree.
pub fn compare(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

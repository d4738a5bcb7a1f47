//! Month value object and its `MM-YYYY` text codec.
//!
//! Billing works at month granularity: a `Month` is a calendar date pinned to
//! the first day of its month. Comparisons and arithmetic only look at the
//! (year, month) pair. No timezone is involved anywhere.
//!
//! The open-ended end date (a subscription with no end supplied) is stored as
//! the sentinel month `12-2099`. Only this module knows that value.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use super::ValidationError;

/// A calendar month, stored as the first day of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month(NaiveDate);

impl Month {
    /// Earliest accepted year.
    pub const MIN_YEAR: i32 = 1999;

    /// Latest accepted year.
    pub const MAX_YEAR: i32 = 2099;

    /// Text substituted for a missing end date.
    pub const OPEN_ENDED_TEXT: &'static str = "12-2099";

    /// Creates a month from its numeric parts.
    pub fn new(field: &str, year: i32, month: u32) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&month) {
            return Err(ValidationError::out_of_range(field, 1, 12, i64::from(month)));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range(
                field,
                i64::from(Self::MIN_YEAR),
                i64::from(Self::MAX_YEAR),
                i64::from(year),
            ));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format(field, "not a calendar month"))
    }

    /// Parses exactly `MM-YYYY`, e.g. `"01-2025"`.
    ///
    /// `field` names the input in the returned error.
    pub fn parse(field: &str, text: &str) -> Result<Self, ValidationError> {
        let bytes = text.as_bytes();
        let well_formed = bytes.len() == 7
            && bytes[2] == b'-'
            && bytes[..2].iter().all(u8::is_ascii_digit)
            && bytes[3..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected MM-YYYY, got '{}'", text),
            ));
        }

        // Both slices are ASCII digits, so these parses only fail on overflow.
        let month = text[..2]
            .parse::<u32>()
            .map_err(|e| ValidationError::invalid_format(field, e.to_string()))?;
        let year = text[3..]
            .parse::<i32>()
            .map_err(|e| ValidationError::invalid_format(field, e.to_string()))?;

        Self::new(field, year, month)
    }

    /// Parses an end date, treating a missing or empty value as open-ended.
    pub fn parse_end(field: &str, text: Option<&str>) -> Result<Self, ValidationError> {
        match text {
            Some(text) if !text.is_empty() => Self::parse(field, text),
            _ => Self::parse(field, Self::OPEN_ENDED_TEXT),
        }
    }

    /// Converts a stored date, truncating it to the first of its month.
    pub fn from_date(field: &str, date: NaiveDate) -> Result<Self, ValidationError> {
        Self::new(field, date.year(), date.month())
    }

    /// The first day of this month.
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1 through 12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Linear month index, `year * 12 + month`.
    pub fn ordinal(&self) -> i64 {
        i64::from(self.year()) * 12 + i64::from(self.month())
    }

    /// Number of months from `start` to `self`, counting both ends.
    ///
    /// Zero or negative when `self` is before `start`.
    pub fn months_since_inclusive(&self, start: &Month) -> i64 {
        self.ordinal() - start.ordinal() + 1
    }

    /// True for the sentinel that marks a subscription without an end.
    pub fn is_open_ended(&self) -> bool {
        self.year() == Self::MAX_YEAR && self.month() == 12
    }

    /// Renders an end date for output: empty for the open-ended sentinel.
    pub fn format_end(&self) -> String {
        if self.is_open_ended() {
            String::new()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{}", self.month(), self.year())
    }
}

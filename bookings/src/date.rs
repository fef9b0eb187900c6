//! Calendar date ranges.
//!
//! Stays are expressed in whole calendar days with no time-of-day or
//! timezone component. A [`DateRange`] is always ordered (`start <= end`)
//! and both endpoints are inclusive.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Layout used for every date crossing the library boundary (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date in the `YYYY-MM-DD` layout.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the input does not follow the layout
/// or names a day that does not exist.
///
/// # Examples
///
/// ```
/// use bookings::date::parse_date;
///
/// let date = parse_date("2050-01-31").unwrap();
/// assert_eq!(date.to_string(), "2050-01-31");
/// assert!(parse_date("2050-02-30").is_err());
/// assert!(parse_date("01/02/2050").is_err());
/// ```
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| Error::InvalidDate {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Formats a date in the `YYYY-MM-DD` layout.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// An inclusive range of calendar days.
///
/// # Examples
///
/// ```
/// use bookings::DateRange;
///
/// let stay = DateRange::parse("2050-01-01", "2050-01-02").unwrap();
/// let next = DateRange::parse("2050-01-02", "2050-01-03").unwrap();
///
/// // Ranges sharing an endpoint day overlap.
/// assert!(stay.overlaps(&next));
/// assert_eq!(stay.days(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    #[serde(rename = "start_date")]
    start: NaiveDate,
    #[serde(rename = "end_date")]
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = Error;

    fn try_from(raw: RawDateRange) -> Result<Self> {
        Self::new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `start` is after `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookings::DateRange;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2050, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2050, 1, 3).unwrap();
    ///
    /// assert!(DateRange::new(start, end).is_ok());
    /// assert!(DateRange::new(end, start).is_err());
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidRange {
                start: format_date(start),
                end: format_date(end),
                reason: "start date must not be after end date".into(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses both endpoints in the `YYYY-MM-DD` layout and builds a range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if either endpoint cannot be parsed,
    /// or [`Error::InvalidRange`] if the start falls after the end.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if the two ranges share at least one day.
    ///
    /// The test is `start_a <= end_b && start_b <= end_a`, which is symmetric
    /// and treats touching endpoints as an overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns `true` if `date` falls inside the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both endpoints.
    #[must_use]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

//! Calendar timestamps with an unbounded month axis.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::days::{days_in_month, fold_month, to_seconds};
use crate::error::CalendarError;

/// Largest year accepted by [`CalendarTime::parse`] (four-digit years only).
pub const MAX_YEAR: i32 = 9999;

/// A calendar timestamp: year, month, day, hour, minute and fractional second.
///
/// `month` is a plain integer rather than a bounded 1..=12 value. Month
/// walks build values such as month 13 ("January of the next year") and
/// rely on [`CalendarTime::normalized`], [`fmt::Display`] and the day
/// counting functions to fold them back onto the calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarTime {
    year: i32,
    month: i32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

impl CalendarTime {
    /// Creates a timestamp from its fields. No range checks are applied.
    pub const fn new(year: i32, month: i32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Midnight on the first day of `month` in `year`.
    pub const fn first_of_month(year: i32, month: i32) -> Self {
        Self::new(year, month, 1, 0, 0, 0.0)
    }

    /// Parses `YYYY-MM-DDTHH:MM:SS[.fraction]`.
    ///
    /// The text must split into exactly three `-` parts, the last of which
    /// splits into exactly two `T` parts, the time into exactly three `:`
    /// parts. The seconds field keeps its fraction and may carry a single
    /// trailing `Z`. Whitespace is not trimmed.
    ///
    /// Fields must name a real calendar instant: year `0..=9999`, month
    /// `1..=12`, a day that exists in that month, hour `0..=23`, minute
    /// `0..=59` and second below 61 (leap seconds).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MalformedTimestamp`] if the text does not
    /// have that shape, a field is not a number, or a field is out of range.
    pub fn parse(text: &str) -> Result<Self, CalendarError> {
        parse_fields(text).ok_or_else(|| CalendarError::MalformedTimestamp {
            text: text.to_string(),
        })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month, possibly outside 1..=12.
    pub fn month(&self) -> i32 {
        self.month
    }

    /// Returns the day within the month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns the hour.
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// Returns the minute.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Returns the (fractional) second.
    pub fn second(&self) -> f64 {
        self.second
    }

    /// Returns `true` if this is midnight on the first day of a month.
    pub fn is_first_of_month(&self) -> bool {
        self.day <= 1 && self.hour == 0 && self.minute == 0 && self.second <= 0.0
    }

    /// Returns the same instant with `month` folded into 1..=12.
    pub fn normalized(&self) -> Self {
        let (year, month) = fold_month(self.year, self.month);
        Self {
            year,
            month,
            ..*self
        }
    }

    /// Chronological comparison in linear time.
    ///
    /// Both values are linearized against the earlier of their two years,
    /// so out-of-range fields (month 13, hour 25) carry into the next unit.
    /// Unlike `==`, which compares raw fields, month 13 of one year and
    /// month 1 of the next compare as equal here. Returns `None` only when
    /// a seconds field is NaN.
    pub fn chronological_cmp(&self, other: &Self) -> Option<Ordering> {
        let ref_year = self.year.min(other.year);
        to_seconds(ref_year, self).partial_cmp(&to_seconds(ref_year, other))
    }

    /// Returns `true` if `self` is at or before `other` in time.
    pub fn is_at_or_before(&self, other: &Self) -> bool {
        matches!(
            self.chronological_cmp(other),
            Some(Ordering::Less | Ordering::Equal)
        )
    }
}

fn parse_fields(text: &str) -> Option<CalendarTime> {
    let parts: Vec<&str> = text.split('-').collect();
    let [year, month, rest] = parts[..] else {
        return None;
    };

    let day_parts: Vec<&str> = rest.split('T').collect();
    let [day, clock] = day_parts[..] else {
        return None;
    };

    let time_parts: Vec<&str> = clock.split(':').collect();
    let [hour, minute, second] = time_parts[..] else {
        return None;
    };

    let second = second.strip_suffix('Z').unwrap_or(second);
    let second: f64 = second.parse().ok()?;
    if !second.is_finite() || !(0.0..61.0).contains(&second) {
        return None;
    }

    let year: i32 = year.parse().ok()?;
    let month: i32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;
    if !(0..=MAX_YEAR).contains(&year)
        || !(1..=12).contains(&month)
        || day < 1
        || i64::from(day) > days_in_month(year, month)
        || hour > 23
        || minute > 59
    {
        return None;
    }

    Some(CalendarTime::new(year, month, day, hour, minute, second))
}

impl FromStr for CalendarTime {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Formats as `YYYY-MM-DDTHH:MM:SS` after folding the month.
///
/// Seconds are truncated to whole seconds.
impl fmt::Display for CalendarTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normalized();
        write!(
            f,
            "{}-{:02}-{:02}T{:02}:{:02}:{:02}",
            n.year,
            n.month,
            n.day,
            n.hour,
            n.minute,
            n.second.trunc() as i64
        )
    }
}

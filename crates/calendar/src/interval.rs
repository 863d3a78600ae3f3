//! Ordered pairs of timestamps.

use crate::days::to_seconds;
use crate::error::CalendarError;
use crate::time::CalendarTime;

/// A closed time interval with `start` at or before `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: CalendarTime,
    end: CalendarTime,
}

impl Interval {
    /// Creates an interval, checking that `start` is not after `end`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::ReversedInterval`] if `start` is after `end`
    /// in linear time (or either seconds field is NaN).
    pub fn new(start: CalendarTime, end: CalendarTime) -> Result<Self, CalendarError> {
        if !start.is_at_or_before(&end) {
            return Err(CalendarError::ReversedInterval {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses both ends with [`CalendarTime::parse`] and builds the interval.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::MalformedTimestamp`] for unparseable text and
    /// [`CalendarError::ReversedInterval`] for a reversed pair.
    pub fn parse(start: &str, end: &str) -> Result<Self, CalendarError> {
        Self::new(CalendarTime::parse(start)?, CalendarTime::parse(end)?)
    }

    /// Builds an interval whose order is guaranteed by construction.
    pub(crate) fn new_unchecked(start: CalendarTime, end: CalendarTime) -> Self {
        Self { start, end }
    }

    /// Returns the start.
    pub fn start(&self) -> CalendarTime {
        self.start
    }

    /// Returns the end.
    pub fn end(&self) -> CalendarTime {
        self.end
    }

    /// Linear time of the start relative to `ref_year`.
    pub fn start_seconds(&self, ref_year: i32) -> f64 {
        to_seconds(ref_year, &self.start)
    }

    /// Linear time of the end relative to `ref_year`.
    pub fn end_seconds(&self, ref_year: i32) -> f64 {
        to_seconds(ref_year, &self.end)
    }

    /// Length in seconds.
    ///
    /// The length does not depend on `ref_year` as long as both ends lie in
    /// or after it.
    pub fn duration_seconds(&self, ref_year: i32) -> f64 {
        self.end_seconds(ref_year) - self.start_seconds(ref_year)
    }
}

//! Month-aligned splitting of long intervals.

use crate::days::SECONDS_PER_DAY;
use crate::error::CalendarError;
use crate::interval::Interval;
use crate::time::CalendarTime;

/// Length of the longest calendar month in seconds.
pub const MAX_MONTH_SECONDS: f64 = 31.0 * SECONDS_PER_DAY;

/// Splits `interval` into contiguous, month-aligned chunks.
///
/// An interval shorter than `max_chunk_seconds` (measured against
/// `ref_year`) is returned unchanged as a single chunk. Otherwise the
/// result is:
///
/// 1. `start` up to the first of the following month,
/// 2. one chunk per whole calendar month up to `end`'s month,
/// 3. the first of `end`'s month up to `end`, unless `end` is itself
///    midnight on the first of a month.
///
/// Every boundary is the original start, the original end, or midnight on
/// the first of a month. Intermediate boundaries keep `start`'s year and
/// count months past 12; format or linearize them to fold the month.
/// Every chunk is at most [`MAX_MONTH_SECONDS`] long.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidCeiling`] if `max_chunk_seconds` is not
/// finite or is below [`MAX_MONTH_SECONDS`]. Chunks are never shorter than
/// a calendar month, so a smaller ceiling could not be honoured.
///
/// # Example
///
/// ```ignore
/// let iv = Interval::parse("2014-01-15T00:00:00", "2014-04-10T12:00:00").unwrap();
/// let chunks = segment(&iv, 2014, MAX_MONTH_SECONDS).unwrap();
/// assert_eq!(chunks.len(), 4);
/// // Jan 15 -> Feb 1, Feb 1 -> Mar 1, Mar 1 -> Apr 1, Apr 1 -> Apr 10 12:00
/// ```
pub fn segment(
    interval: &Interval,
    ref_year: i32,
    max_chunk_seconds: f64,
) -> Result<Vec<Interval>, CalendarError> {
    if !max_chunk_seconds.is_finite() || max_chunk_seconds < MAX_MONTH_SECONDS {
        return Err(CalendarError::InvalidCeiling {
            seconds: max_chunk_seconds,
        });
    }
    if interval.duration_seconds(ref_year) < max_chunk_seconds {
        return Ok(vec![*interval]);
    }

    let start = interval.start();
    let end = interval.end();
    let year = start.year();

    // End month counted on the same axis as the walk (months since `year`).
    let end_month = end.month() + 12 * (end.year() - year);
    let mut month = start.month() + 1;
    if end_month < month {
        return Ok(vec![*interval]);
    }

    let mut chunks = Vec::with_capacity((end_month - month + 2) as usize);
    chunks.push(Interval::new_unchecked(
        start,
        CalendarTime::first_of_month(year, month),
    ));

    while month < end_month {
        chunks.push(Interval::new_unchecked(
            CalendarTime::first_of_month(year, month),
            CalendarTime::first_of_month(year, month + 1),
        ));
        month += 1;
    }

    if !end.is_first_of_month() {
        chunks.push(Interval::new_unchecked(
            CalendarTime::first_of_month(year, month),
            end,
        ));
    }

    Ok(chunks)
}

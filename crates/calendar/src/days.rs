//! Day counting and linear time for the proleptic Gregorian calendar.
//!
//! Linear time is the number of seconds elapsed since `ref_year-01-01T00:00:00`.
//! The reference year is always passed explicitly; mixing reference years
//! between conversions yields offsets that cannot be compared.

use crate::time::CalendarTime;

/// Number of days in each month of a common year (index 0 = January).
pub(crate) const DAYS_PER_MONTH: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Returns `true` for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Folds an unbounded month index into `(year, 1..=12)`.
///
/// `(2014, 13)` becomes `(2015, 1)` and `(2014, 0)` becomes `(2013, 12)`.
pub fn fold_month(year: i32, month: i32) -> (i32, i32) {
    let zero_based = month - 1;
    (year + zero_based.div_euclid(12), zero_based.rem_euclid(12) + 1)
}

/// Days from January 1 of `year` to the first day of `month`.
///
/// For 1..=12 this is the cumulative length of the preceding months, with
/// one extra day after February in leap years. `month = 13` gives the
/// length of the whole year. Months outside 1..=13 are folded into the
/// neighbouring years, so the count may exceed a year or go negative.
pub fn days_before_month(year: i32, month: i32) -> i64 {
    let (folded_year, folded_month) = fold_month(year, month);

    let mut days: i64 = DAYS_PER_MONTH[..(folded_month - 1) as usize].iter().sum();
    if folded_month > 2 && is_leap_year(folded_year) {
        days += 1;
    }

    if folded_year >= year {
        days += (year..folded_year).map(days_in_year).sum::<i64>();
    } else {
        days -= (folded_year..year).map(days_in_year).sum::<i64>();
    }
    days
}

/// Number of days in `month` of `year`, folding out-of-range months.
pub fn days_in_month(year: i32, month: i32) -> i64 {
    days_before_month(year, month + 1) - days_before_month(year, month)
}

/// Days from January 1 of `ref_year` to the first day of `month` in `year`.
///
/// Whole years in `ref_year..year` are accumulated first. When `year` is
/// before `ref_year` that range is empty and the result is computed as if
/// `year == ref_year`.
pub fn day_of_year(ref_year: i32, year: i32, month: i32) -> i64 {
    let whole_years: i64 = (ref_year..year).map(|y| days_before_month(y, 13)).sum();
    whole_years + days_before_month(year, month)
}

/// Linear time of `time`: seconds elapsed since `ref_year-01-01T00:00:00`.
pub fn to_seconds(ref_year: i32, time: &CalendarTime) -> f64 {
    let days = i64::from(time.day()) - 1 + day_of_year(ref_year, time.year(), time.month());
    let hours = i64::from(time.hour()) + 24 * days;
    let minutes = i64::from(time.minute()) + 60 * hours;
    time.second() + 60.0 * minutes as f64
}

/// Length of `year` in seconds.
pub fn year_seconds(year: i32) -> f64 {
    days_before_month(year, 13) as f64 * SECONDS_PER_DAY
}

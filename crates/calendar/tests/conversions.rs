use approx::assert_abs_diff_eq;
use seisaudio_calendar::{
    CalendarError, CalendarTime, SECONDS_PER_DAY, day_of_year, days_before_month, to_seconds,
};

#[test]
fn parse_format_roundtrip_normalises() {
    let cases: &[(i32, i32, u32, u32, u32, f64)] = &[
        (2014, 1, 1, 0, 0, 0.0),
        (2014, 12, 31, 23, 59, 59.75),
        (2014, 13, 1, 0, 0, 0.0),
        (2016, 2, 29, 12, 0, 30.0),
        (2014, 0, 15, 6, 7, 8.0),
        (1999, 27, 3, 4, 5, 6.9),
    ];
    for &(y, m, d, h, mi, s) in cases {
        let original = CalendarTime::new(y, m, d, h, mi, s);
        let text = original.to_string();
        let parsed = CalendarTime::parse(&text).unwrap();
        let expected = CalendarTime::new(y, m, d, h, mi, s.trunc()).normalized();
        assert_eq!(
            parsed, expected,
            "roundtrip failed for {original:?}: text={text}"
        );
    }
}

#[test]
fn parse_examples() {
    assert_eq!(
        CalendarTime::parse("2014-01-01T00:00:00").unwrap(),
        CalendarTime::new(2014, 1, 1, 0, 0, 0.0)
    );
    assert_eq!(
        CalendarTime::parse("bad-input").unwrap_err(),
        CalendarError::MalformedTimestamp {
            text: "bad-input".into()
        }
    );
}

#[test]
fn whole_year_day_counts() {
    assert_eq!(days_before_month(2000, 13), 366);
    assert_eq!(days_before_month(1900, 13), 365);
    assert_eq!(days_before_month(2021, 13), 365);
}

#[test]
fn month_starts_sum_to_year_length() {
    for year in [1900, 2000, 2014, 2016] {
        let mut previous = days_before_month(year, 1);
        for month in 2..=13 {
            let current = days_before_month(year, month);
            assert!(
                (28..=31).contains(&(current - previous)),
                "month {} of {year} has {} days",
                month - 1,
                current - previous
            );
            previous = current;
        }
    }
}

#[test]
fn to_seconds_monotonic_in_each_field() {
    let base = CalendarTime::new(2015, 6, 10, 12, 30, 30.0);
    let base_s = to_seconds(2014, &base);
    let bumped = [
        CalendarTime::new(2016, 6, 10, 12, 30, 30.0),
        CalendarTime::new(2015, 7, 10, 12, 30, 30.0),
        CalendarTime::new(2015, 6, 11, 12, 30, 30.0),
        CalendarTime::new(2015, 6, 10, 13, 30, 30.0),
        CalendarTime::new(2015, 6, 10, 12, 31, 30.0),
        CalendarTime::new(2015, 6, 10, 12, 30, 30.5),
    ];
    for t in bumped {
        assert!(
            to_seconds(2014, &t) > base_s,
            "{t:?} should be later than {base:?}"
        );
    }
}

#[test]
fn to_seconds_across_leap_year() {
    let mar1 = CalendarTime::new(2016, 3, 1, 0, 0, 0.0);
    let feb28 = CalendarTime::new(2016, 2, 28, 0, 0, 0.0);
    assert_abs_diff_eq!(
        to_seconds(2014, &mar1) - to_seconds(2014, &feb28),
        2.0 * SECONDS_PER_DAY
    );
}

#[test]
fn to_seconds_reference_year_offset() {
    let t = CalendarTime::new(2016, 1, 1, 0, 0, 0.0);
    assert_abs_diff_eq!(to_seconds(2014, &t), (365.0 + 365.0) * SECONDS_PER_DAY);
    assert_abs_diff_eq!(to_seconds(2016, &t), 0.0);
}

#[test]
fn day_of_year_before_reference_acts_as_reference() {
    // Accumulation is skipped, so only the in-year offset remains.
    assert_eq!(day_of_year(2014, 2012, 3), days_before_month(2012, 3));
}

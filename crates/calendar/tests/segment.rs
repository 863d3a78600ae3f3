use approx::assert_abs_diff_eq;
use seisaudio_calendar::{
    CalendarTime, Interval, MAX_MONTH_SECONDS, SECONDS_PER_DAY, segment, to_seconds,
};

fn is_month_boundary(t: &CalendarTime) -> bool {
    t.is_first_of_month()
}

fn check_invariants(input: &Interval, ref_year: i32) {
    let chunks = segment(input, ref_year, MAX_MONTH_SECONDS).unwrap();
    assert!(!chunks.is_empty());

    // Lengths add up to the input length.
    let total: f64 = chunks.iter().map(|c| c.duration_seconds(ref_year)).sum();
    assert_abs_diff_eq!(total, input.duration_seconds(ref_year), epsilon = 1e-6);

    // Contiguous in linear time and bounded by one month.
    for pair in chunks.windows(2) {
        assert_abs_diff_eq!(
            pair[0].end_seconds(ref_year),
            pair[1].start_seconds(ref_year)
        );
    }
    for c in &chunks {
        assert!(
            c.duration_seconds(ref_year) <= MAX_MONTH_SECONDS,
            "chunk {} -> {} too long",
            c.start(),
            c.end()
        );
        assert!(c.duration_seconds(ref_year) > 0.0 || chunks.len() == 1);
    }

    // Boundaries are the original ends or first-of-month instants.
    for c in &chunks[1..] {
        assert!(is_month_boundary(&c.start()));
    }
    for c in &chunks[..chunks.len() - 1] {
        assert!(is_month_boundary(&c.end()));
    }
    assert_eq!(chunks[0].start(), input.start());
    assert_abs_diff_eq!(
        chunks[chunks.len() - 1].end_seconds(ref_year),
        to_seconds(ref_year, &input.end())
    );
}

#[test]
fn invariants_hold_for_varied_intervals() {
    let cases = [
        ("2014-01-15T00:00:00", "2014-04-10T12:00:00"),
        ("2014-01-01T00:00:00", "2015-01-01T00:00:00"),
        ("2014-02-28T23:59:59", "2014-03-31T00:00:00"),
        ("2015-12-31T23:00:00", "2017-03-15T06:30:00"),
        ("2016-01-31T00:00:00", "2016-03-01T00:00:00"),
        ("2014-06-01T00:00:00", "2014-06-15T00:00:00"),
        ("2014-07-04T10:20:30.5", "2014-07-04T10:20:30.5"),
    ];
    for (start, end) in cases {
        let input = Interval::parse(start, end).unwrap();
        check_invariants(&input, 2014);
    }
}

#[test]
fn full_year_gives_twelve_months() {
    let input = Interval::parse("2014-01-01T00:00:00", "2015-01-01T00:00:00").unwrap();
    let chunks = segment(&input, 2014, MAX_MONTH_SECONDS).unwrap();
    assert_eq!(chunks.len(), 12);
    let days: Vec<f64> = chunks
        .iter()
        .map(|c| c.duration_seconds(2014) / SECONDS_PER_DAY)
        .collect();
    assert_eq!(
        days,
        vec![31.0, 28.0, 31.0, 30.0, 31.0, 30.0, 31.0, 31.0, 30.0, 31.0, 30.0, 31.0]
    );
}

#[test]
fn leap_february_is_29_days() {
    let input = Interval::parse("2016-01-20T00:00:00", "2016-03-05T00:00:00").unwrap();
    let chunks = segment(&input, 2016, MAX_MONTH_SECONDS).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_abs_diff_eq!(chunks[1].duration_seconds(2016), 29.0 * SECONDS_PER_DAY);
}

#[test]
fn just_under_ceiling_is_single_chunk() {
    let input = Interval::parse("2014-01-15T00:00:00", "2014-02-14T23:59:59").unwrap();
    let chunks = segment(&input, 2014, MAX_MONTH_SECONDS).unwrap();
    assert_eq!(chunks, vec![input]);
}

#[test]
fn formatted_chunks_match_example() {
    let input = Interval::parse("2014-01-15T00:00:00", "2014-04-10T12:00:00").unwrap();
    let text: Vec<String> = segment(&input, 2014, MAX_MONTH_SECONDS)
        .unwrap()
        .iter()
        .map(|c| format!("{} {}", c.start(), c.end()))
        .collect();
    assert_eq!(
        text,
        vec![
            "2014-01-15T00:00:00 2014-02-01T00:00:00",
            "2014-02-01T00:00:00 2014-03-01T00:00:00",
            "2014-03-01T00:00:00 2014-04-01T00:00:00",
            "2014-04-01T00:00:00 2014-04-10T12:00:00",
        ]
    );
}

//! Integration test: availability JSON through selection to station plans.

use approx::assert_relative_eq;
use seisaudio_availability::{
    FilterConfig, GeoBounds, PlanConfig, QueryConfig, parse_availability, parse_station_text,
    plan_station, select_stations,
};

const RESPONSE: &str = r#"{
  "repository": [{
    "repository_name": "primary",
    "channels": [
      {"net": "G", "sta": "ATD", "loc": "00", "cha": "BHZ", "sample_rate": 20.0,
       "timespans": [
         ["2014-01-15T00:00:00.000000Z", "2014-04-10T12:00:00.000000Z"],
         ["2014-04-20T00:00:00.000000Z", "2015-01-01T00:00:00.000000Z"]
       ]},
      {"net": "G", "sta": "CAN", "loc": "00", "cha": "BHZ", "sample_rate": 40.0,
       "timespans": [
         ["2014-06-01T00:00:00.000000Z", "2014-06-15T00:00:00.000000Z"],
         ["2014-07-01T00:00:00.000000Z", "2015-01-01T00:00:00.000000Z"]
       ]},
      {"net": "G", "sta": "ECH", "loc": "00", "cha": "BHZ", "sample_rate": 20.0,
       "timespans": [
         ["2014-01-01T00:00:00.000000Z", "2014-02-01T00:00:00.000000Z"]
       ]}
    ]
  }]
}"#;

const CATALOG: &str = "\
#Network | Station | Latitude | Longitude | Elevation | SiteName | StartTime | EndTime
G|ATD|11.53|42.85|610.0|Arta Tunnel, Djibouti|1985-08-01T00:00:00|
G|CAN|-35.32|148.99|700.0|Canberra, Australia|1987-11-27T00:00:00|
G|ECH|48.22|7.16|580.0|Echery, France|1991-04-15T00:00:00|
";

#[test]
fn coverage_filter_keeps_long_running_stations() {
    let channels = parse_availability(RESPONSE).unwrap();
    let selection = select_stations(&channels, None, &FilterConfig::default(), 2014).unwrap();
    let ids: Vec<String> = selection
        .selected()
        .iter()
        .map(|c| c.channel().id())
        .collect();
    // ATD covers most of the year, CAN just over half, ECH one month.
    assert_eq!(ids, vec!["G-ATD", "G-CAN"]);
}

#[test]
fn bounds_restrict_to_northern_hemisphere() {
    let channels = parse_availability(RESPONSE).unwrap();
    let catalog = parse_station_text(CATALOG).unwrap();
    let config =
        FilterConfig::default().with_bounds(Some(GeoBounds::new(0.0, 90.0, -180.0, 180.0)));
    let selection = select_stations(&channels, Some(&catalog), &config, 2014).unwrap();
    assert_eq!(selection.len(), 1);
    assert_eq!(selection.selected()[0].channel().station(), "ATD");
}

#[test]
fn station_plan_chunks_and_labels() {
    let channels = parse_availability(RESPONSE).unwrap();
    let config = FilterConfig::default().with_stations(["ATD"]);
    let selection = select_stations(&channels, None, &config, 2014).unwrap();
    assert_eq!(selection.len(), 1);

    let query = QueryConfig::default();
    let plan = plan_station(&selection.selected()[0], &query, &PlanConfig::default()).unwrap();

    assert_eq!(plan.id(), "G-ATD");
    assert_relative_eq!(plan.audio_rate(), 48_000.0);

    // First span: 4 chunks. Second span: Apr 20 -> May 1, then May..Dec.
    assert_eq!(plan.requests().len(), 4 + 1 + 8);

    let first = &plan.requests()[0];
    assert_eq!(first.interval().start().to_string(), "2014-01-15T00:00:00");
    assert_eq!(first.interval().end().to_string(), "2014-02-01T00:00:00");
    assert_eq!(
        first.url(),
        "https://service.iris.edu/irisws/timeseries/1/query?net=G&sta=ATD&cha=BHZ&\
         start=2014-01-15T00:00:00&end=2014-02-01T00:00:00&format=audio&\
         audiosamplerate=48000&loc=00&"
    );

    let last = plan.requests().last().unwrap();
    assert_eq!(last.interval().start().to_string(), "2014-12-01T00:00:00");
    assert_eq!(last.interval().end().to_string(), "2015-01-01T00:00:00");

    let lines: Vec<&str> = plan.labels().lines().collect();
    assert_eq!(lines.len(), plan.requests().len());
    // Jan 15 = 14 days = 1_209_600 s; / 2400 = 504.
    // Feb 1 = 31 days = 2_678_400 s; / 2400 = 1116.
    assert_eq!(lines[0], "504\t1116\t\"2014-01-15T00:00:00\"");
    assert_eq!(lines[3], "3240\t3582\t\"2014-04-01T00:00:00\"");
}

#[test]
fn faster_channel_gets_higher_audio_rate() {
    let channels = parse_availability(RESPONSE).unwrap();
    let config = FilterConfig::default().with_stations(["G-CAN"]);
    let selection = select_stations(&channels, None, &config, 2014).unwrap();
    let plan = plan_station(
        &selection.selected()[0],
        &QueryConfig::default(),
        &PlanConfig::default(),
    )
    .unwrap();
    assert_relative_eq!(plan.audio_rate(), 96_000.0);
    // Jun 1 -> Jun 15 stays whole, then Jul..Dec as six months.
    assert_eq!(plan.requests().len(), 1 + 6);
    assert!(plan.requests()[0].url().contains("audiosamplerate=96000&"));
}

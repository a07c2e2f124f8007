use crate::ingest::{filter_by_date, parse_timestamp};
use crate::record::LogRecord;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn record(value: Value) -> LogRecord {
    LogRecord::try_from(value).unwrap()
}

fn sample_logs() -> Vec<LogRecord> {
    vec![
        record(json!({"@timestamp": "2025-07-01T12:00:00Z", "url": "/api"})),
        record(json!({"@timestamp": "2025-07-02T12:00:00Z", "url": "/api"})),
        record(json!({"@timestamp": "invalid-date", "url": "/api"})),
        record(json!({"@timestamp": null, "url": "/api"})),
    ]
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn keeps_only_records_from_the_requested_day() {
    let filtered = filter_by_date(sample_logs(), Some("2025-07-01"));

    assert_eq!(filtered.len(), 1);
    assert!(
        filtered[0]
            .get_string("@timestamp")
            .unwrap()
            .starts_with("2025-07-01")
    );
}

#[test]
fn day_without_records_yields_nothing() {
    let filtered = filter_by_date(sample_logs(), Some("2024-07-01"));

    assert!(filtered.is_empty());
}

#[test]
fn no_date_is_a_passthrough() {
    let logs = sample_logs();

    let filtered = filter_by_date(logs.clone(), None);

    assert_eq!(filtered, logs);
}

#[test]
fn malformed_target_date_matches_nothing() {
    assert!(filter_by_date(sample_logs(), Some("01/07/2025")).is_empty());
    assert!(filter_by_date(sample_logs(), Some("2025-13-01")).is_empty());
    assert!(filter_by_date(sample_logs(), Some("")).is_empty());
}

#[test]
fn records_without_timestamp_are_dropped() {
    let logs = vec![
        record(json!({"url": "/no-ts"})),
        record(json!({"@timestamp": "", "url": "/empty"})),
        record(json!({"@timestamp": 1751371200, "url": "/epoch"})),
        record(json!({"@timestamp": "2025-07-01T00:00:00", "url": "/kept"})),
    ];

    let filtered = filter_by_date(logs, Some("2025-07-01"));

    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].get_string("url"), Some("/kept"));
}

#[test]
fn preserves_relative_order() {
    let logs = vec![
        record(json!({"@timestamp": "2025-07-01T09:00:00Z", "url": "/first"})),
        record(json!({"@timestamp": "2025-07-03T09:00:00Z", "url": "/other"})),
        record(json!({"@timestamp": "2025-07-01 23:59:59", "url": "/second"})),
        record(json!({"@timestamp": "2025-07-01", "url": "/third"})),
    ];

    let urls: Vec<_> = filter_by_date(logs, Some("2025-07-01"))
        .iter()
        .map(|r| r.get_string("url").unwrap().to_string())
        .collect();

    assert_eq!(urls, vec!["/first", "/second", "/third"]);
}

#[test]
fn offset_timestamps_compare_on_their_own_calendar_day() {
    // 23:30 at +03:00 is still July 1st locally even though it is 20:30 UTC.
    let logs = vec![record(json!({"@timestamp": "2025-07-01T23:30:00+03:00"}))];

    assert_eq!(filter_by_date(logs.clone(), Some("2025-07-01")).len(), 1);
    assert!(filter_by_date(logs, Some("2025-07-02")).is_empty());
}

#[test]
fn parse_timestamp_accepts_common_iso_shapes() {
    let cases = [
        "2025-07-01T12:00:00Z",
        "2025-07-01T12:00:00",
        "2025-07-01T12:00:00.123456Z",
        "2025-07-01 12:00:00",
        "2025-07-01T12:00",
        "2025-07-01T12:00:00+03:00",
        "2025-07-01",
        "2025-07-01T12",
        "2025-07-01T12+03:00",
        "2025-07-01T12:00:00,5",
        "2025-07-01T1200",
        "20250701T120000",
        "20250701T120000,25Z",
        "20250701T120000-05:00",
        "20250701",
    ];

    for raw in cases {
        let parsed = parse_timestamp(raw);
        assert_eq!(parsed.map(|ts| ts.date()), Some(day(2025, 7, 1)), "{raw}");
    }
}

#[test]
fn parse_timestamp_rejects_garbage() {
    for raw in [
        "invalid-date",
        "",
        "Z",
        "2025-07-01T25:00:00",
        "2025-07-01T1",
        "20250701T12000",
        "yesterday",
    ] {
        assert_eq!(parse_timestamp(raw), None, "{raw}");
    }
}


#[test]
fn basic_and_comma_forms_keep_their_wall_clock_time() {
    let expected = day(2025, 7, 1).and_hms_milli_opt(12, 0, 0, 500);

    assert_eq!(parse_timestamp("2025-07-01T12:00:00,5"), expected);
    assert_eq!(parse_timestamp("20250701T120000.5"), expected);
    assert_eq!(
        parse_timestamp("2025-07-01T12"),
        day(2025, 7, 1).and_hms_opt(12, 0, 0)
    );
}

#[test]
fn basic_format_timestamps_pass_the_date_filter() {
    let logs = vec![
        record(json!({"@timestamp": "20250701T080000Z", "url": "/basic"})),
        record(json!({"@timestamp": "2025-07-01T09", "url": "/hour"})),
        record(json!({"@timestamp": "20250702T080000Z", "url": "/next-day"})),
    ];

    let urls: Vec<_> = filter_by_date(logs, Some("2025-07-01"))
        .iter()
        .map(|r| r.get_string("url").unwrap().to_string())
        .collect();

    assert_eq!(urls, vec!["/basic", "/hour"]);
}

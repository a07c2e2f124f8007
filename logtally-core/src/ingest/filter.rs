use crate::record::LogRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::warn;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Keep the records whose `@timestamp` falls on `date` (`YYYY-MM-DD`).
///
/// `None` keeps everything. A date that does not parse matches nothing.
/// Records without a usable timestamp are dropped.
pub fn filter_by_date(logs: Vec<LogRecord>, date: Option<&str>) -> Vec<LogRecord> {
    let Some(date) = date else {
        return logs;
    };

    let Ok(target) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
        warn!("filter date {date:?} is not in YYYY-MM-DD form, no records match");
        return Vec::new();
    };

    logs.into_iter()
        .filter(|log| record_date(log) == Some(target))
        .collect()
}

fn record_date(log: &LogRecord) -> Option<NaiveDate> {
    log.timestamp()
        .and_then(parse_timestamp)
        .map(|ts| ts.date())
}

/// Parse an ISO-8601 timestamp into a naive date-time.
///
/// One trailing `Z` is dropped. Basic (`20250701T120000`) and extended forms
/// are accepted, as are hour-only times and comma fractions. A numeric offset
/// is accepted but not applied, the wall-clock value is returned as written.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = extended_form(raw.strip_suffix('Z').unwrap_or(raw));

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&s, fmt).ok())
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|fmt| DateTime::parse_from_str(&s, fmt).ok())
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Rewrite `raw` into the `YYYY-MM-DD[THH:MM[:SS[.f]]][offset]` shape chrono
/// parses. Anything unrecognised is passed through and fails later.
fn extended_form(raw: &str) -> String {
    let Some(sep) = raw.find(['T', ' ']) else {
        return extended_date(raw);
    };
    let (date, rest) = raw.split_at(sep);
    let (sep, time) = rest.split_at(1);
    let (clock, offset) = time.split_at(time.find(['+', '-']).unwrap_or(time.len()));

    format!("{}{sep}{}{offset}", extended_date(date), extended_clock(clock))
}

fn extended_date(date: &str) -> String {
    if date.len() == 8 && all_digits(date) {
        format!("{}-{}-{}", &date[..4], &date[4..6], &date[6..])
    } else {
        date.to_string()
    }
}

fn extended_clock(clock: &str) -> String {
    let (hms, fraction) = match clock.find(['.', ',']) {
        Some(idx) => (&clock[..idx], Some(&clock[idx + 1..])),
        None => (clock, None),
    };

    let mut out = if all_digits(hms) && matches!(hms.len(), 4 | 6) {
        (0..hms.len())
            .step_by(2)
            .map(|i| &hms[i..i + 2])
            .collect::<Vec<_>>()
            .join(":")
    } else {
        hms.to_string()
    };

    // hour only
    if out.len() == 2 && all_digits(&out) {
        out.push_str(":00");
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

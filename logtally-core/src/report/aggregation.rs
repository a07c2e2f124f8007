use crate::record::{LogRecord, RESPONSE_TIME_FIELD};
use crate::report::{
    AVERAGE_PRECISION, AggregationError, EndpointAggregate, ReportError, ReportKind, ReportRow,
};
use ahash::AHashMap;
use serde_json::Value;
use tracing::{debug, error};

/// Build the rows for `kind`.
pub fn build_report(kind: ReportKind, logs: &[LogRecord]) -> Result<Vec<ReportRow>, ReportError> {
    match kind {
        ReportKind::Average => generate_report(logs),
        ReportKind::UserAgent => Err(ReportError::UnknownReportKind { kind }),
    }
}

/// Per-endpoint request count and mean response time.
///
/// Rows follow the order in which each URL first appears. Records without a
/// `url` or `response_time` are ignored; a `response_time` that is present but
/// not a number fails the whole report.
pub fn generate_report(logs: &[LogRecord]) -> Result<Vec<ReportRow>, ReportError> {
    let stats = aggregate(logs).map_err(|e| {
        error!("critical error while generating report: {e}");
        ReportError::Generation(e)
    })?;

    debug!("aggregated {} endpoints", stats.len());

    Ok(stats
        .iter()
        .map(|agg| {
            ReportRow::new(
                agg.url.clone(),
                agg.count,
                format!("{:.*}", AVERAGE_PRECISION, agg.average()),
            )
        })
        .collect())
}

fn aggregate(logs: &[LogRecord]) -> Result<Vec<EndpointAggregate>, AggregationError> {
    let mut stats: Vec<EndpointAggregate> = Vec::new();
    let mut index: AHashMap<&str, usize> = AHashMap::new();

    for log in logs {
        let Some(url) = log.url() else {
            continue;
        };
        let Some(raw) = log.get(RESPONSE_TIME_FIELD).filter(|v| !v.is_null()) else {
            continue;
        };
        let response_time = response_time(url, raw)?;

        let slot = *index.entry(url).or_insert_with(|| {
            stats.push(EndpointAggregate::new(url));
            stats.len() - 1
        });
        stats[slot].record(response_time);
    }

    Ok(stats)
}

fn response_time(url: &str, raw: &Value) -> Result<f64, AggregationError> {
    raw.as_f64()
        .ok_or_else(|| AggregationError::NonNumericResponseTime {
            url: url.to_string(),
            value: raw.clone(),
        })
}

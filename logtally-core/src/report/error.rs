use crate::report::ReportKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("response_time for '{url}' is not a number: {value}")]
    NonNumericResponseTime { url: String, value: serde_json::Value },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown report type: {kind}")]
    UnknownReportKind { kind: ReportKind },

    #[error("report generation failed")]
    Generation(#[source] AggregationError),

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

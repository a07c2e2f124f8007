//! Endpoint Report
//!
//! Turns parsed log records into the per-endpoint table: how many requests
//! each URL received and how long they took on average.
//!
//! Records are grouped by their `url` field. Groups appear in the order their
//! URL was first seen, so the same input always gives the same table.
//!
//! Pipeline, one run of the binary:
//!
//! ```text
//! files --read_logs--> Vec<LogRecord>
//!       --filter_by_date (optional)--> records from one day
//!       --build_report / generate_report--> Vec<ReportRow>
//!       --write_report--> grid table on stdout
//! ```

mod aggregation;
mod constants;
mod error;
mod kind;
mod render;
mod types;

pub use aggregation::*;
pub use constants::*;
pub use error::*;
pub use kind::*;
pub use render::*;
pub use types::*;

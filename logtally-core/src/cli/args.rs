use crate::logging::{DEFAULT_ERROR_LOG, LogConfig};
use crate::report::ReportKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "logtally",
    version,
    about = "Per-endpoint request report from NDJSON access logs"
)]
pub struct ReportArgs {
    /// Log file(s) to read, newline-delimited JSON
    #[arg(long, required = true, num_args = 1..)]
    pub file: Vec<PathBuf>,

    /// Report type
    #[arg(long, value_enum, default_value_t = ReportKind::Average)]
    pub report: ReportKind,

    /// Only count requests from this day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// File receiving error diagnostics
    #[arg(long, env = "LOGTALLY_ERROR_LOG", default_value = DEFAULT_ERROR_LOG)]
    pub error_log: PathBuf,
}

impl ReportArgs {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            error_log: Some(self.error_log.clone()),
            ..LogConfig::default()
        }
    }
}

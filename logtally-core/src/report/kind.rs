use crate::report::AVERAGE_HEADERS;
use clap::ValueEnum;
use std::fmt;

/// Which report to build.
///
/// Only `Average` is generated; `UserAgent` is accepted on the command line
/// but has no generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportKind {
    /// Request count and mean response time per endpoint
    #[default]
    #[value(name = "average")]
    Average,
    /// Breakdown by user agent (not available)
    #[value(name = "user_agent")]
    UserAgent,
}

impl ReportKind {
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Average => "average",
            ReportKind::UserAgent => "user_agent",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Average => "ParseLogs",
            ReportKind::UserAgent => "UserAgentAnalysis",
        }
    }

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            ReportKind::Average => AVERAGE_HEADERS,
            ReportKind::UserAgent => &[],
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

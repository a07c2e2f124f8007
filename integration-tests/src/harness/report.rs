use crate::harness::{CapturedEvent, LogFixture, capture_events};
use clap::Parser;
use logtally_core::cli::{ReportArgs, run_report};
use logtally_core::report::ReportError;

pub struct ReportRun {
    pub result: Result<(), ReportError>,
    pub stdout: String,
    pub events: Vec<CapturedEvent>,
}

impl ReportRun {
    /// Messages of the captured diagnostics at `level`.
    pub fn messages(&self, level: tracing::Level) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| e.level == level)
            .map(CapturedEvent::message)
            .collect()
    }

    /// Data rows of the rendered table as `(handler, total, avg)` cells.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        self.stdout
            .lines()
            .filter(|l| l.starts_with('|'))
            .skip(1)
            .map(|l| {
                let cells: Vec<String> = l
                    .trim_matches('|')
                    .split('|')
                    .map(|c| c.trim().to_string())
                    .collect();
                (cells[0].clone(), cells[1].clone(), cells[2].clone())
            })
            .collect()
    }
}

/// Parse `extra` after `--file <fixture files>` and run the report in-process.
pub fn run(fixture: &LogFixture, extra: &[&str]) -> ReportRun {
    let mut argv: Vec<String> = vec!["logtally".into(), "--file".into()];
    argv.extend(fixture.files().iter().map(|p| p.display().to_string()));
    argv.extend(extra.iter().map(|s| s.to_string()));
    argv.push("--error-log".into());
    argv.push(fixture.path().join("errors.log").display().to_string());

    let args = ReportArgs::try_parse_from(argv).expect("valid arguments");
    let mut out = Vec::new();
    let (result, events) = capture_events(|| run_report(&args, &mut out));

    ReportRun {
        result,
        stdout: String::from_utf8(out).expect("utf-8 output"),
        events,
    }
}

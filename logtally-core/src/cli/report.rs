use crate::cli::ReportArgs;
use crate::ingest::{filter_by_date, read_logs};
use crate::report::{ReportError, build_report, write_report};
use std::io::Write;
use tracing::info;

/// Run one report end to end and write the table to `out`.
///
/// Nothing is written to `out` unless the whole report was generated.
pub fn run_report<W: Write>(args: &ReportArgs, out: &mut W) -> Result<(), ReportError> {
    let logs = read_logs(&args.file);

    let kind = args.report;
    info!("generating {} report ({})", kind, kind.title());

    let logs = match args.date.as_deref() {
        Some(date) => {
            info!("filtering logs by date: {date}");
            let filtered = filter_by_date(logs, Some(date));
            info!("{} log records match {date}", filtered.len());
            filtered
        }
        None => logs,
    };

    let rows = build_report(kind, &logs)?;
    write_report(out, kind.headers(), &rows)?;
    Ok(())
}

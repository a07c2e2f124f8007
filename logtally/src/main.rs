use clap::Parser;
use logtally_core::cli::{ReportArgs, run_report};
use logtally_core::logging::init_logging;
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = ReportArgs::parse();

    // Held until main returns so the error log is flushed.
    let _guard = match init_logging(&args.log_config()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("logtally: logging disabled: {e:#}");
            None
        }
    };

    let stdout = io::stdout();
    match run_report(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", anyhow::Error::from(e));
            ExitCode::FAILURE
        }
    }
}

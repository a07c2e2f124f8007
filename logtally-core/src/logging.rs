use anyhow::{Context, anyhow};
use chrono::Local;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, prelude::*};

pub const DEFAULT_ERROR_LOG: &str = "logs.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Console filter used when `RUST_LOG` is not set.
    pub level: String,

    /// Append-only file receiving error events. `None` disables it.
    pub error_log: Option<PathBuf>,

    /// Whether to write diagnostics to stderr.
    pub console_output: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "debug".into(),
            error_log: Some(PathBuf::from(DEFAULT_ERROR_LOG)),
            console_output: true,
        }
    }
}

/// Keeps the file sink alive. Dropping it flushes pending lines.
#[must_use = "dropping the guard stops the error log writer"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// `timestamp - component - level - message`
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format(TIMESTAMP_FORMAT),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. Call once, at startup.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<LoggingGuard> {
    let (subscriber, guard) = build_subscriber(config)?;
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;
    Ok(guard)
}

fn build_subscriber(
    config: &LogConfig,
) -> anyhow::Result<(Box<dyn Subscriber + Send + Sync>, LoggingGuard)> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level {:?}", config.level))?,
    };

    let console_layer = config.console_output.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_writer(io::stderr)
            .with_filter(filter)
    });

    let appender = match config.error_log.as_deref().map(error_log_appender) {
        Some(Ok(appender)) => Some(appender),
        // Console diagnostics still work without the file sink.
        Some(Err(e)) if config.console_output => {
            eprintln!("logtally: error log disabled: {e:#}");
            None
        }
        Some(Err(e)) => return Err(e),
        None => None,
    };

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .event_format(LineFormat)
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(LevelFilter::ERROR);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer);

    Ok((Box::new(subscriber), LoggingGuard { _file: guard }))
}

fn error_log_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let (dir, file_name) = split_log_path(path)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .with_context(|| format!("failed to open error log {}", path.display()))
}

/// A bare file name lives in the working directory.
fn split_log_path(path: &Path) -> anyhow::Result<(&Path, String)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("error log path {} has no file name", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    Ok((dir, file_name.to_string_lossy().into_owned()))
}

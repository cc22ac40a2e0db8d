use std::fs::File;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "signup-tui.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("logging already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the background log writer alive; logs are flushed when dropped.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Parses a filter directive such as `"debug"` or `"signup_tui=trace"`.
///
/// Returns `Ok(None)` when no directive was given, meaning logging stays off.
pub fn parse_filter(directive: Option<&str>) -> Result<Option<EnvFilter>, LoggingError> {
    match directive.map(str::trim) {
        None | Some("") => Ok(None),
        Some(directive) => Ok(Some(EnvFilter::try_new(directive)?)),
    }
}

/// Routes `tracing` output to `path` when `directive` is set.
///
/// The terminal UI owns stdout, so nothing is ever written there.
pub fn init_file_logging(
    path: &Path,
    directive: Option<&str>,
) -> Result<Option<LogGuard>, LoggingError> {
    let Some(filter) = parse_filter(directive)? else {
        return Ok(None);
    };

    let file = File::create(path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(Some(LogGuard { _guard: guard }))
}

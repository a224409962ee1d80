use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Send logs to a daily file under `dir`; the terminal belongs to the TUI.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("slot-picker")
        .filename_suffix("log")
        .build(dir)
        .wrap_err_with(|| format!("failed to open log dir {}", dir.display()))?;

    let (writer, guard) = non_blocking(file_appender);

    let file_layer = fmt::layer().with_ansi(false).with_writer(writer);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(env_filter)
        .try_init()
        .wrap_err("failed to install tracing subscriber")?;

    Ok(guard)
}

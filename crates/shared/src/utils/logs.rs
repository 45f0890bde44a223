use std::path::Path;
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "bigcommerce";

fn log_file_name(component: &str) -> String {
    format!("{LOG_FILE_PREFIX}_{component}.log")
}

/// Installs a daily JSON file layer under `log_dir` plus a console layer
/// driven by `RUST_LOG`.
pub fn init_logger(component: &str, log_dir: impl AsRef<Path>) {
    let file_appender =
        RollingFileAppender::new(Rotation::DAILY, log_dir.as_ref(), log_file_name(component));
    let (file_writer, guard) = non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .json()
        .with_filter(EnvFilter::new("info"));

    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .init();

    std::mem::forget(guard);
}

//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber: an [`EnvFilter`] built from
//! the configured level and a plain-text fmt layer writing to a rotating log
//! file in the plugin data directory.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
const LOG_FILE: &str = "bookcase.log";

/// Initializes the tracing subscriber with file-based output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set (any `EnvFilter` directive, e.g.
///    `bookcase=debug`)
/// 2. Default: `"info"`
///
/// An unparsable directive falls back to `"info"`.
///
/// # File Location
///
/// Logs are written to `~/.local/share/zellij/bookcase/bookcase.log`, rotated
/// at 10 MB with 3 backups.
///
/// # Initialization Behavior
///
/// - Creates data directory if it doesn't exist
/// - Silently returns if directory creation fails (logging is optional)
/// - Idempotent: Safe to call multiple times (only first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(data_dir.join(LOG_FILE));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}

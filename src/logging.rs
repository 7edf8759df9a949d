//! Tracing setup
//!
//! The terminal belongs to the UI while a form is shown, so log output only
//! goes to a file. Set `FORMPANE_LOG_DIR` to enable it; `RUST_LOG` overrides
//! the default filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the directory log files are written to
pub const LOG_DIR_ENV: &str = "FORMPANE_LOG_DIR";

const DEFAULT_FILTER: &str = "formpane=info";

/// Install the global subscriber if logging was requested.
///
/// Returns the path of the log file, or `None` when logging stays disabled.
pub fn init() -> Option<PathBuf> {
    let log_dir = std::env::var_os(LOG_DIR_ENV).map(PathBuf::from)?;
    fs::create_dir_all(&log_dir).ok()?;

    let log_path = log_dir.join(format!("formpane.{}.log", std::process::id()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::info!(path = ?log_path, "tracing initialized");
    Some(log_path)
}

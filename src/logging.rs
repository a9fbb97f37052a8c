//! File-backed logging setup.
//!
//! The TUI owns stdout and stderr, so diagnostics go to a log file under
//! the config directory instead. Controlled with `FOLIO_LOG` (env-filter
//! syntax), defaulting to `info`.

use anyhow::{Context, Result};
use std::fs::OpenOptions;

use crate::config::Config;

/// Initializes the global tracing subscriber writing to `folio.log`.
///
/// Idempotent-ish: returns an error if a global subscriber is already set,
/// which callers may ignore in tests.
pub fn init() -> Result<()> {
    let log_path = Config::config_dir()?.join("folio.log");
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).context(format!(
            "Failed to create log directory: {}",
            parent.display()
        ))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_env("FOLIO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(file)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {e}"))?;

    Ok(())
}

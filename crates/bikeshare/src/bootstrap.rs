use std::path::{Path, PathBuf};

use bikeshare_core::error::{BikeshareError, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` uses the conventional upper-case level names and is mapped to
/// a [`tracing_subscriber::EnvFilter`] directive; an unrecognised level falls
/// back to `"info"`. Output goes to `log_file` when given, otherwise stderr,
/// keeping stdout free for the interactive prompts.
pub fn setup_logging(log_level: &str, log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let directive = match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    };
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Arc::new(file));
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        None => {
            let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

// ── Data-directory check ───────────────────────────────────────────────────────

/// Fail early when the configured data directory does not exist, rather than
/// at the first city load inside the session.
pub fn ensure_data_dir(data_dir: &Path) -> Result<()> {
    if !data_dir.is_dir() {
        return Err(BikeshareError::DataDirNotFound(data_dir.to_path_buf()));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

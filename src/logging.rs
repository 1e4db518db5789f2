//! Tracing setup.
//!
//! The reader owns the terminal while it runs, so it only ever logs to a
//! file. Dump mode logs to stderr. `RUST_LOG` overrides the default level
//! in both cases.

use std::fs;
use std::io;
use std::path::Path;

use color_eyre::eyre::{Result, eyre};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "storytui.log";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Human readable events on stderr.
pub fn init_stderr(default_level: &str) -> Result<()> {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(env_filter(default_level));

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {e}"))
}

/// Events appended to `dir/storytui.log`. Keep the guard alive until exit
/// or buffered events are lost.
pub fn init_file(dir: &Path, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(env_filter(default_level));

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| eyre!("failed to initialise logging: {e}"))?;

    tracing::info!(path = %dir.join(LOG_FILE_NAME).display(), "logging to file");
    Ok(guard)
}

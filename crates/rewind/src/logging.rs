//! Tracing setup.

use crate::config::Settings;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Sends tracing output to the configured log file.
///
/// `RUST_LOG` wins over the configured filter. A subscriber that is already
/// installed is left alone.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

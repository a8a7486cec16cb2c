//! Logging setup for the TUI session.
//!
//! While the app runs, ratatui owns the terminal, so log output goes to a
//! file rather than stderr. Logging is off unless enabled in the config.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Install the file logger described by `config`. A no-op when logging is
/// disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = match &config.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(
            fern::log_file(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?,
        )
        .apply()
        .context("Logger already initialized")?;

    Ok(())
}

fn default_log_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("ticketist").join("ticketist.log"))
}

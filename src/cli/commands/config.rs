//! Config command implementation.
//!
//! `path` and `init` never parse the existing file, so a broken config can
//! always be located and replaced.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::PomodoroError;
use crate::output::format_config;

/// Render the effective configuration.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn show(config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    format_config(config, format)
}

/// Print the file the configuration is read from.
#[must_use]
pub fn path(path: &Path) -> String {
    path.display().to_string()
}

/// Write a configuration file with default values.
///
/// # Errors
///
/// Returns an error if `path` exists and `force` is not set, or the file
/// cannot be written.
pub fn init(path: &Path, force: bool) -> Result<String, PomodoroError> {
    if path.exists() && !force {
        return Err(PomodoroError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    Config::default().save_to_path(path)?;
    log::info!("Wrote default config to {}", path.display());
    Ok(format!("Wrote default config to {}", path.display())
        .green()
        .to_string())
}

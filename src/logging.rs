//! Log setup.
//!
//! Logs go through the `log` facade and are written by `env_logger` to
//! `~/.pomodoro/pomodoro.log`, never to the terminal the UI draws on.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use crate::config::Paths;

/// Initialise the global logger, appending to the log file in `paths`.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be opened, or a
/// logger is already installed.
pub fn init(paths: &Paths, default_level: &str) -> Result<()> {
    paths
        .ensure_dirs()
        .context("Failed to create data directory")?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.log_file)
        .with_context(|| format!("Failed to open log file {}", paths.log_file.display()))?;

    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .context("Logger already initialised")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join(".pomodoro"));

        // Another test may already have installed a logger; only the file
        // creation is guaranteed.
        let _ = init(&paths, "debug");
        assert!(paths.log_file.exists());
    }
}

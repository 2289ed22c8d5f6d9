//! Configuration management for pomodoro.
//!
//! This module handles loading and saving configuration from `~/.pomodoro/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, FocusConfig, GeneralConfig, SoundConfig};

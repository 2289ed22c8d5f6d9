//! Configuration settings for pomodoro.
//!
//! Settings are loaded from `~/.pomodoro/config.yaml`. The file only supplies
//! starting values; durations adjusted while the timer runs are never written
//! back.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomodoroError;
use crate::features::focus::durations::{BoundedMinutes, BREAK_DEFAULT, FOCUS_DEFAULT};
use crate::features::focus::{Defaults, DEFAULT_SOUND_URL};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Interval lengths.
    pub focus: FocusConfig,
    /// Transition sound and notifications.
    pub sound: SoundConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to `colored`'s global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Interval lengths.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FocusConfig {
    /// Focus length in minutes (5-60).
    #[serde(default = "default_focus_minutes")]
    pub focus_minutes: u32,
    /// Break length in minutes (1-15).
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Transition sound settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SoundConfig {
    /// Play the sound through an external player.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Sound file or URL handed to the player.
    #[serde(default = "default_sound_url")]
    pub url: String,
    /// Player command and arguments; the URL is appended.
    #[serde(default = "default_player")]
    pub player: Vec<String>,
    /// Ring the terminal bell.
    #[serde(default)]
    pub bell: bool,
    /// Enable desktop notifications.
    #[serde(default = "default_true")]
    pub notifications: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_focus_minutes() -> u32 {
    FOCUS_DEFAULT
}

const fn default_break_minutes() -> u32 {
    BREAK_DEFAULT
}

const fn default_true() -> bool {
    true
}

fn default_sound_url() -> String {
    DEFAULT_SOUND_URL.to_string()
}

fn default_player() -> Vec<String> {
    ["mpv", "--no-video", "--really-quiet"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
            log_level: default_log_level(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_minutes: default_focus_minutes(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            url: default_sound_url(),
            player: default_player(),
            bell: false,
            notifications: default_true(),
        }
    }
}

impl FocusConfig {
    /// Clamp both lengths into their allowed ranges.
    ///
    /// Returns one message per value that had to change, for the caller to
    /// report once logging is up.
    #[must_use = "adjustments should be reported"]
    pub fn normalize(&mut self) -> Vec<String> {
        let focus = BoundedMinutes::focus(self.focus_minutes).get();
        let brk = BoundedMinutes::break_(self.break_minutes).get();

        let mut adjustments = Vec::new();
        if focus != self.focus_minutes {
            adjustments.push(format!(
                "focus_minutes {} out of range, using {focus}",
                self.focus_minutes
            ));
        }
        if brk != self.break_minutes {
            adjustments.push(format!(
                "break_minutes {} out of range, using {brk}",
                self.break_minutes
            ));
        }

        self.focus_minutes = focus;
        self.break_minutes = brk;
        adjustments
    }

    /// The durations the timer starts with.
    #[must_use]
    pub const fn defaults(&self) -> Defaults {
        Defaults {
            focus_minutes: self.focus_minutes,
            break_minutes: self.break_minutes,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// Values are returned as written; call [`FocusConfig::normalize`] to
    /// clamp the durations.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomodoroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomodoroError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| PomodoroError::Config(format!("Failed to serialize config: {e}")))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents).map_err(|e| {
            PomodoroError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

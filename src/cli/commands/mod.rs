//! Command implementations for pomodoro.
//!
//! Each command returns the text to print; an empty string prints nothing.

mod completions;
pub mod config;
mod run;

pub use completions::completions;
pub use run::{resolve_defaults, run};

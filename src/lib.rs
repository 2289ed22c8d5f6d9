//! pomodoro - A terminal Pomodoro timer
//!
//! Alternates between focusing and break intervals, ticking once per second
//! and ringing a chime at each switch. The timer logic lives in
//! [`features::focus`]; the CLI, config, logging and terminal front ends are
//! built around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomodoroError;
pub use features::focus::{Pomodoro, Session, SessionLabel};

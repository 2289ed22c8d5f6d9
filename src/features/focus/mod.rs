//! Focus/break timer.
//!
//! - `session`: the focusing/on-break interval value and its pure transitions
//! - `durations`: bounded minute adjusters
//! - `machine`: the Pomodoro state machine
//! - `ticker`: the one-second tick source
//! - `chime`: transition notifications
//! - `timer`: formatting and status helpers

pub mod chime;
pub mod durations;
pub mod machine;
pub mod session;
pub mod ticker;
pub mod timer;

pub use chime::{Chime, Chimes, DEFAULT_SOUND_URL};
pub use durations::BoundedMinutes;
pub use machine::{Defaults, Pomodoro, Snapshot, Transition};
pub use session::{Session, SessionLabel};
pub use ticker::{Ticker, TICK_INTERVAL};
pub use timer::{
    format_minutes, format_seconds, parse_minutes, progress, remaining_text, render_progress_bar,
    status_title,
};

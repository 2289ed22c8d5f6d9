//! The Pomodoro state machine.
//!
//! Owns the optional [`Session`], the running flag and the two duration
//! adjusters. The event loop calls [`Pomodoro::tick`] once per ticker tick
//! and re-reads [`Pomodoro::tick_delay`] after every control action to
//! enable or disable its ticker.

use std::time::Duration;

use serde::Serialize;

use super::chime::Chime;
use super::durations::{BoundedMinutes, BREAK_DEFAULT, FOCUS_DEFAULT};
use super::session::{Session, SessionLabel};
use super::ticker::TICK_INTERVAL;

/// Durations a timer starts with.
///
/// [`Pomodoro::stop`] always returns to `Defaults::default()` (25/5),
/// whatever the starting values were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Focus length in minutes.
    pub focus_minutes: u32,
    /// Break length in minutes.
    pub break_minutes: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            focus_minutes: FOCUS_DEFAULT,
            break_minutes: BREAK_DEFAULT,
        }
    }
}

/// Outcome of a tick that switched intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Label of the interval that ended.
    pub from: SessionLabel,
    /// The session that replaced it.
    pub to: Session,
}

/// Everything a renderer needs to draw the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Active session, if any.
    pub session: Option<Session>,
    /// Focus length in minutes.
    pub focus_minutes: u32,
    /// Break length in minutes.
    pub break_minutes: u32,
    /// Whether ticks are being applied.
    pub timer_running: bool,
}

/// A single Pomodoro timer.
pub struct Pomodoro {
    session: Option<Session>,
    running: bool,
    focus: BoundedMinutes,
    brk: BoundedMinutes,
    chime: Box<dyn Chime>,
}

impl Pomodoro {
    /// Create an idle, paused timer.
    ///
    /// Out-of-range starting durations are clamped into the adjuster bounds.
    #[must_use]
    pub fn new(start: Defaults, chime: Box<dyn Chime>) -> Self {
        Self {
            session: None,
            running: false,
            focus: BoundedMinutes::focus(start.focus_minutes),
            brk: BoundedMinutes::break_(start.break_minutes),
            chime,
        }
    }

    /// Toggle between running and paused.
    ///
    /// Starting from idle creates a fresh focusing session. Resuming keeps the
    /// existing session exactly as it was paused.
    pub fn play_pause(&mut self) {
        self.running = !self.running;
        if self.running && self.session.is_none() {
            let session = Session::focusing(self.focus.get());
            log::info!(
                "Starting {} for {} minutes",
                session.label,
                self.focus.get()
            );
            self.session = Some(session);
        } else {
            log::debug!(
                "Timer {}",
                if self.running { "resumed" } else { "paused" }
            );
        }
    }

    /// Stop the timer, drop the session and reset durations to 25/5.
    pub fn stop(&mut self) {
        log::info!("Timer stopped");
        self.running = false;
        self.session = None;
        self.focus.set(FOCUS_DEFAULT);
        self.brk.set(BREAK_DEFAULT);
    }

    /// Apply one tick.
    ///
    /// Does nothing while paused. When the current interval has already run
    /// out, switches to the next one and rings the chime.
    pub fn tick(&mut self) -> Option<Transition> {
        if !self.running {
            return None;
        }
        let current = self.session?;

        let (next, switched) = current.advance(self.focus.get(), self.brk.get());
        self.session = Some(next);

        if !switched {
            return None;
        }

        log::info!(
            "{} finished, {} for {} seconds",
            current.label,
            next.label,
            next.time_remaining
        );
        self.chime.ring(next.label);
        Some(Transition {
            from: current.label,
            to: next,
        })
    }

    /// Ticker delay matching the current state: one second while running.
    #[must_use]
    pub const fn tick_delay(&self) -> Option<Duration> {
        if self.running {
            Some(TICK_INTERVAL)
        } else {
            None
        }
    }

    /// Whether durations may be changed right now.
    ///
    /// Only while no session exists; a paused session keeps its lengths.
    #[must_use]
    pub const fn durations_editable(&self) -> bool {
        self.session.is_none()
    }

    /// Lengthen the focus interval by one step. Returns true if it changed.
    pub fn increase_focus(&mut self) -> bool {
        self.durations_editable() && self.focus.increase()
    }

    /// Shorten the focus interval by one step. Returns true if it changed.
    pub fn decrease_focus(&mut self) -> bool {
        self.durations_editable() && self.focus.decrease()
    }

    /// Lengthen the break interval by one step. Returns true if it changed.
    pub fn increase_break(&mut self) -> bool {
        self.durations_editable() && self.brk.increase()
    }

    /// Shorten the break interval by one step. Returns true if it changed.
    pub fn decrease_break(&mut self) -> bool {
        self.durations_editable() && self.brk.decrease()
    }

    #[must_use]
    pub const fn session(&self) -> Option<Session> {
        self.session
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn focus_minutes(&self) -> u32 {
        self.focus.get()
    }

    #[must_use]
    pub const fn break_minutes(&self) -> u32 {
        self.brk.get()
    }

    /// Current state as a plain value for renderers.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            session: self.session,
            focus_minutes: self.focus.get(),
            break_minutes: self.brk.get(),
            timer_running: self.running,
        }
    }
}

impl std::fmt::Debug for Pomodoro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pomodoro")
            .field("session", &self.session)
            .field("running", &self.running)
            .field("focus", &self.focus.get())
            .field("break", &self.brk.get())
            .finish_non_exhaustive()
    }
}

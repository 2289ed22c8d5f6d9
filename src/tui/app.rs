//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::features::focus::{format_minutes, Pomodoro, Snapshot, Ticker};

/// Upper bound on how long the loop blocks waiting for input.
const MAX_POLL: Duration = Duration::from_millis(250);

/// Key help shown in the status bar.
pub const HELP: &str = "space:play/pause | s:stop | f/F:focus -/+ | b/B:break -/+ | q:quit";

/// Application state.
pub struct App {
    /// The timer being driven.
    pomodoro: Pomodoro,
    /// Tick source, enabled exactly while the timer runs.
    ticker: Ticker,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app around an idle timer.
    #[must_use]
    pub fn new(pomodoro: Pomodoro) -> Self {
        Self {
            pomodoro,
            ticker: Ticker::disabled(),
            status: Some("Press space to start, ? for help".to_string()),
            should_quit: false,
        }
    }

    /// Current timer state.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        self.pomodoro.snapshot()
    }

    /// Whether the duration controls are active.
    #[must_use]
    pub const fn durations_editable(&self) -> bool {
        self.pomodoro.durations_editable()
    }

    /// How long the event loop may wait before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker
            .time_until_next(now)
            .map_or(MAX_POLL, |wait| wait.min(MAX_POLL))
    }

    /// Toggle play/pause.
    pub fn play_pause(&mut self, now: Instant) {
        self.pomodoro.play_pause();
        self.sync_ticker(now);
        self.status = Some(if self.pomodoro.is_running() {
            "Running".to_string()
        } else {
            "Paused".to_string()
        });
    }

    /// Stop and reset.
    pub fn stop(&mut self, now: Instant) {
        self.pomodoro.stop();
        self.sync_ticker(now);
        self.status = Some("Stopped. Durations reset.".to_string());
    }

    pub fn increase_focus(&mut self) {
        let changed = self.pomodoro.increase_focus();
        self.report_adjustment(changed, "Focus", self.pomodoro.focus_minutes());
    }

    pub fn decrease_focus(&mut self) {
        let changed = self.pomodoro.decrease_focus();
        self.report_adjustment(changed, "Focus", self.pomodoro.focus_minutes());
    }

    pub fn increase_break(&mut self) {
        let changed = self.pomodoro.increase_break();
        self.report_adjustment(changed, "Break", self.pomodoro.break_minutes());
    }

    pub fn decrease_break(&mut self) {
        let changed = self.pomodoro.decrease_break();
        self.report_adjustment(changed, "Break", self.pomodoro.break_minutes());
    }

    fn report_adjustment(&mut self, changed: bool, name: &str, minutes: u32) {
        self.status = Some(if changed {
            format!("{name}: {}", format_minutes(minutes))
        } else if self.pomodoro.durations_editable() {
            format!("{name} is already at its limit")
        } else {
            "Stop the timer to change durations".to_string()
        });
    }

    /// Apply a tick if one is due. Returns true if the timer advanced.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        if let Some(transition) = self.pomodoro.tick() {
            self.status = Some(format!(
                "{} finished. {} begins.",
                transition.from, transition.to.label
            ));
        }
        true
    }

    /// Show key help.
    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }

    fn sync_ticker(&mut self, now: Instant) {
        self.ticker.set_delay(self.pomodoro.tick_delay(), now);
    }
}

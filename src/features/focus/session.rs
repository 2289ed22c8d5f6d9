//! Focus/break sessions.
//!
//! A [`Session`] is a plain value: the interval type and the seconds left in
//! it. Advancing it is done by pure functions that return a new value, so the
//! machine in [`super::machine`] only ever replaces its session wholesale.

use serde::{Deserialize, Serialize};

/// Which interval a session represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLabel {
    /// Working interval.
    Focusing,
    /// Rest interval.
    OnBreak,
}

impl SessionLabel {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }

    /// The label that follows this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Focusing => Self::OnBreak,
            Self::OnBreak => Self::Focusing,
        }
    }
}

impl std::fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The active interval and its remaining time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Interval type.
    pub label: SessionLabel,
    /// Seconds left in the interval.
    pub time_remaining: u32,
}

impl Session {
    /// A fresh focusing session of the given length.
    #[must_use]
    pub const fn focusing(minutes: u32) -> Self {
        Self {
            label: SessionLabel::Focusing,
            time_remaining: minutes * 60,
        }
    }

    /// A fresh break session of the given length.
    #[must_use]
    pub const fn on_break(minutes: u32) -> Self {
        Self {
            label: SessionLabel::OnBreak,
            time_remaining: minutes * 60,
        }
    }

    /// The same session one second later. Never goes below zero.
    #[must_use]
    pub const fn next_tick(self) -> Self {
        Self {
            label: self.label,
            time_remaining: self.time_remaining.saturating_sub(1),
        }
    }

    /// The session that replaces this one once it runs out.
    #[must_use]
    pub const fn next_session(self, focus_minutes: u32, break_minutes: u32) -> Self {
        match self.label {
            SessionLabel::Focusing => Self::on_break(break_minutes),
            SessionLabel::OnBreak => Self::focusing(focus_minutes),
        }
    }

    /// Whether the interval has run out.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.time_remaining == 0
    }

    /// Advance by one tick: count down, or switch interval once at zero.
    ///
    /// Returns the new session and whether it was an interval switch.
    #[must_use]
    pub const fn advance(self, focus_minutes: u32, break_minutes: u32) -> (Self, bool) {
        if self.is_expired() {
            (self.next_session(focus_minutes, break_minutes), true)
        } else {
            (self.next_tick(), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Session::focusing(25),
            Session {
                label: SessionLabel::Focusing,
                time_remaining: 1500
            }
        );
        assert_eq!(Session::on_break(5).time_remaining, 300);
        assert_eq!(Session::on_break(5).label, SessionLabel::OnBreak);
    }

    #[test]
    fn test_next_tick_counts_down() {
        let session = Session::focusing(1).next_tick();
        assert_eq!(session.time_remaining, 59);
        assert_eq!(session.label, SessionLabel::Focusing);
    }

    #[test]
    fn test_next_tick_saturates_at_zero() {
        let zero = Session {
            label: SessionLabel::OnBreak,
            time_remaining: 0,
        };
        assert_eq!(zero.next_tick(), zero);
    }

    #[test]
    fn test_next_session_alternates() {
        let focus = Session::focusing(25);
        assert_eq!(focus.next_session(25, 5), Session::on_break(5));
        assert_eq!(Session::on_break(5).next_session(30, 5), Session::focusing(30));
    }

    #[test]
    fn test_advance_every_remaining_value() {
        for t in 1..=120 {
            let session = Session {
                label: SessionLabel::Focusing,
                time_remaining: t,
            };
            let (next, switched) = session.advance(25, 5);
            assert!(!switched);
            assert_eq!(next.time_remaining, t - 1);
            assert_eq!(next.label, SessionLabel::Focusing);

            let session = Session {
                label: SessionLabel::OnBreak,
                time_remaining: t,
            };
            let (next, switched) = session.advance(25, 5);
            assert!(!switched);
            assert_eq!(next.time_remaining, t - 1);
            assert_eq!(next.label, SessionLabel::OnBreak);
        }
    }

    #[test]
    fn test_advance_at_zero_switches() {
        let expired = Session {
            label: SessionLabel::Focusing,
            time_remaining: 0,
        };
        assert_eq!(expired.advance(25, 7), (Session::on_break(7), true));

        let expired = Session {
            label: SessionLabel::OnBreak,
            time_remaining: 0,
        };
        assert_eq!(expired.advance(40, 7), (Session::focusing(40), true));
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SessionLabel::Focusing.to_string(), "Focusing");
        assert_eq!(SessionLabel::OnBreak.to_string(), "On Break");
        assert_eq!(SessionLabel::Focusing.next(), SessionLabel::OnBreak);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Session::focusing(25)).unwrap();
        assert_eq!(json, r#"{"label":"focusing","time_remaining":1500}"#);
    }
}

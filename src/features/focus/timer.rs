//! Timer display helpers.
//!
//! Formatting and parsing for durations, plus the pure functions the
//! renderers use to describe a session.

use chrono::Duration;
use once_cell::sync::Lazy;
use regex::Regex;

use super::session::{Session, SessionLabel};

static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+)h)?(?:(\d+)m?)?$")
        .unwrap_or_else(|e| panic!("Invalid duration regex: {e}"))
});

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a whole number of minutes as MM:00.
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format_duration_mmss(Duration::minutes(i64::from(minutes)))
}

/// Format a second count as MM:SS.
#[must_use]
pub fn format_seconds(seconds: u32) -> String {
    format_duration_mmss(Duration::seconds(i64::from(seconds)))
}

/// Parse a whole-minute duration like "25", "25m", "1h" or "1h30m".
///
/// Seconds are not accepted: interval lengths are configured in minutes.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<u32> {
    let s: String = s.trim().to_lowercase().split_whitespace().collect();
    if s.is_empty() {
        return None;
    }

    let caps = DURATION_PATTERN.captures(&s)?;
    let hours = caps.get(1).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;
    let minutes = caps.get(2).map(|m| m.as_str().parse::<u32>()).transpose().ok()?;

    if hours.is_none() && minutes.is_none() {
        return None;
    }
    hours
        .unwrap_or(0)
        .checked_mul(60)?
        .checked_add(minutes.unwrap_or(0))
}

/// Full length in minutes of the interval a session belongs to.
#[must_use]
pub const fn interval_minutes(label: SessionLabel, focus_minutes: u32, break_minutes: u32) -> u32 {
    match label {
        SessionLabel::Focusing => focus_minutes,
        SessionLabel::OnBreak => break_minutes,
    }
}

/// Heading for the active session, e.g. "Focusing for 25:00 minutes".
#[must_use]
pub fn status_title(session: &Session, focus_minutes: u32, break_minutes: u32) -> String {
    let minutes = interval_minutes(session.label, focus_minutes, break_minutes);
    format!("{} for {} minutes", session.label, format_minutes(minutes))
}

/// Remaining time, e.g. "24:59 remaining".
#[must_use]
pub fn remaining_text(session: &Session) -> String {
    format!("{} remaining", format_seconds(session.time_remaining))
}

/// Share of the current interval that has elapsed, in `0.0..=1.0`.
#[must_use]
pub fn progress(session: &Session, focus_minutes: u32, break_minutes: u32) -> f64 {
    let total = interval_minutes(session.label, focus_minutes, break_minutes) * 60;
    if total == 0 {
        return 1.0;
    }
    let remaining = session.time_remaining.min(total);
    1.0 - f64::from(remaining) / f64::from(total)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
        assert_eq!(format_minutes(60), "60:00");
        assert_eq!(format_seconds(1499), "24:59");
    }

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("25"), Some(25));
        assert_eq!(parse_minutes("25m"), Some(25));
        assert_eq!(parse_minutes(" 10 M "), Some(10));
        assert_eq!(parse_minutes("1h"), Some(60));
        assert_eq!(parse_minutes("1h30m"), Some(90));
    }

    #[test]
    fn test_parse_minutes_invalid() {
        assert_eq!(parse_minutes(""), None);
        assert_eq!(parse_minutes("abc"), None);
        assert_eq!(parse_minutes("90s"), None);
        assert_eq!(parse_minutes("m"), None);
        assert_eq!(parse_minutes("-5"), None);
        assert_eq!(parse_minutes("99999999999"), None);
    }

    #[test]
    fn test_status_title() {
        assert_eq!(
            status_title(&Session::focusing(25), 25, 5),
            "Focusing for 25:00 minutes"
        );
        assert_eq!(
            status_title(&Session::on_break(5), 25, 5),
            "On Break for 05:00 minutes"
        );
    }

    #[test]
    fn test_remaining_text() {
        let session = Session {
            label: SessionLabel::Focusing,
            time_remaining: 1499,
        };
        assert_eq!(remaining_text(&session), "24:59 remaining");
    }

    #[test]
    fn test_progress() {
        assert!(progress(&Session::focusing(25), 25, 5).abs() < f64::EPSILON);

        let halfway = Session {
            label: SessionLabel::OnBreak,
            time_remaining: 150,
        };
        assert!((progress(&halfway, 25, 5) - 0.5).abs() < 0.001);

        let done = Session {
            label: SessionLabel::Focusing,
            time_remaining: 0,
        };
        assert!((progress(&done, 25, 5) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
        assert_eq!(render_progress_bar(2.0, 4), "[████]");
    }
}

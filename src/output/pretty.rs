use chrono::{DateTime, Local};
use colored::Colorize;

use crate::config::Config;
use crate::error::PomodoroError;
use crate::features::focus::{
    format_minutes, progress, remaining_text, render_progress_bar, status_title, SessionLabel,
    Snapshot, Transition,
};

const BAR_WIDTH: usize = 20;

/// Focus and break lengths, e.g. "Focus 25:00 | Break 05:00".
pub fn format_durations_line(snapshot: &Snapshot) -> String {
    format!(
        "Focus {} | Break {}",
        format_minutes(snapshot.focus_minutes),
        format_minutes(snapshot.break_minutes)
    )
}

/// One-line status for line mode.
pub fn format_status_line(snapshot: &Snapshot) -> String {
    let Some(session) = snapshot.session else {
        return format!("{}  {}", "Stopped".dimmed(), format_durations_line(snapshot));
    };

    let title = status_title(&session, snapshot.focus_minutes, snapshot.break_minutes);
    let title = match session.label {
        SessionLabel::Focusing => title.red().bold(),
        SessionLabel::OnBreak => title.green().bold(),
    };
    let ratio = progress(&session, snapshot.focus_minutes, snapshot.break_minutes);

    let mut line = format!(
        "{}  {}  {}",
        title,
        remaining_text(&session),
        render_progress_bar(ratio, BAR_WIDTH)
    );
    if !snapshot.timer_running {
        line.push_str(&format!("  {}", "PAUSED".yellow().bold()));
    }
    line
}

/// Timestamped line announcing an interval switch.
pub fn format_transition_line(transition: &Transition, at: DateTime<Local>) -> String {
    let icon = match transition.to.label {
        SessionLabel::Focusing => "🍅",
        SessionLabel::OnBreak => "☕",
    };
    format!(
        "[{}] {} {} finished, {} begins",
        at.format("%H:%M:%S"),
        icon,
        transition.from,
        transition.to.label.to_string().bold()
    )
}

/// Effective configuration as YAML under a heading.
///
/// # Errors
///
/// Returns `PomodoroError::Yaml` if serialization fails.
pub fn format_config_pretty(config: &Config) -> Result<String, PomodoroError> {
    let yaml = serde_yaml::to_string(config)?;
    Ok(format!("{}\n{}", "Effective configuration".bold(), yaml.trim_end()))
}

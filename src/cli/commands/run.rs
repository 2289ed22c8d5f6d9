//! Run command implementation.
//!
//! Resolves the starting durations, builds the timer and hands it to the
//! full-screen UI or to the line-mode loop.

use std::io::Write;
use std::time::Instant;

use chrono::{DateTime, Local};

use crate::cli::args::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::error::PomodoroError;
use crate::features::focus::{
    chime, parse_minutes, BoundedMinutes, Defaults, Pomodoro, Ticker, Transition,
};
use crate::output::{format_snapshot, format_transition};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if a duration flag is invalid or the terminal fails.
pub fn run(args: &RunArgs, config: &Config, format: OutputFormat) -> Result<String, PomodoroError> {
    let defaults = resolve_defaults(args, config)?;
    let chimes = chime::from_config(&config.sound, args.no_sound);
    log::debug!(
        "Running with {}m focus / {}m break, {} chime(s)",
        defaults.focus_minutes,
        defaults.break_minutes,
        chimes.len()
    );

    let pomodoro = Pomodoro::new(defaults, Box::new(chimes));

    if args.plain {
        run_plain(pomodoro, format)?;
    } else {
        crate::tui::run(pomodoro)?;
    }
    Ok(String::new())
}

/// Combine duration flags with the configured defaults.
///
/// # Errors
///
/// Returns `PomodoroError::InvalidDuration` if a flag does not parse or lies
/// outside its allowed range.
pub fn resolve_defaults(args: &RunArgs, config: &Config) -> Result<Defaults, PomodoroError> {
    let mut defaults = config.focus.defaults();

    if let Some(ref raw) = args.focus {
        defaults.focus_minutes = checked_minutes("focus", raw, BoundedMinutes::focus(0))?;
    }
    if let Some(ref raw) = args.break_ {
        defaults.break_minutes = checked_minutes("break", raw, BoundedMinutes::break_(0))?;
    }

    Ok(defaults)
}

fn checked_minutes(name: &str, raw: &str, bounds: BoundedMinutes) -> Result<u32, PomodoroError> {
    let minutes = parse_minutes(raw).ok_or_else(|| {
        PomodoroError::InvalidDuration(format!("'{raw}' is not a {name} duration"))
    })?;

    if !bounds.accepts(minutes) {
        let (min, max) = bounds.bounds();
        return Err(PomodoroError::InvalidDuration(format!(
            "{name} must be between {min} and {max} minutes, got {minutes}"
        )));
    }
    Ok(minutes)
}

/// Line-mode loop: starts immediately and runs until interrupted.
fn run_plain(mut pomodoro: Pomodoro, format: OutputFormat) -> Result<(), PomodoroError> {
    let mut stdout = std::io::stdout();
    let mut ticker = Ticker::disabled();

    pomodoro.play_pause();
    ticker.set_delay(pomodoro.tick_delay(), Instant::now());
    print_snapshot(&mut stdout, &pomodoro, format)?;

    loop {
        if let Some(wait) = ticker.time_until_next(Instant::now()) {
            std::thread::sleep(wait);
        }
        if !ticker.poll(Instant::now()) {
            continue;
        }

        if let Some(transition) = pomodoro.tick() {
            print_transition(&mut stdout, &transition, Local::now(), format)?;
        }
        print_snapshot(&mut stdout, &pomodoro, format)?;
    }
}

fn print_transition(
    out: &mut impl Write,
    transition: &Transition,
    at: DateTime<Local>,
    format: OutputFormat,
) -> Result<(), PomodoroError> {
    let text = format_transition(transition, at, format)?;
    if format == OutputFormat::Pretty {
        // Keep the last status line above the announcement.
        writeln!(out)?;
    }
    writeln!(out, "{text}")?;
    Ok(())
}

fn print_snapshot(
    out: &mut impl Write,
    pomodoro: &Pomodoro,
    format: OutputFormat,
) -> Result<(), PomodoroError> {
    let text = format_snapshot(&pomodoro.snapshot(), format)?;
    match format {
        // Overwrite the previous status line in place.
        OutputFormat::Pretty => write!(out, "\r\x1b[2K{text}")?,
        OutputFormat::Json => writeln!(out, "{text}")?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::chime::Silent;

    fn args(focus: Option<&str>, brk: Option<&str>) -> RunArgs {
        RunArgs {
            focus: focus.map(ToString::to_string),
            break_: brk.map(ToString::to_string),
            ..RunArgs::default()
        }
    }

    #[test]
    fn test_resolve_defaults_from_config() {
        let mut config = Config::default();
        config.focus.focus_minutes = 40;
        let defaults = resolve_defaults(&args(None, None), &config).unwrap();
        assert_eq!(defaults.focus_minutes, 40);
        assert_eq!(defaults.break_minutes, 5);
    }

    #[test]
    fn test_resolve_defaults_flags_override() {
        let defaults =
            resolve_defaults(&args(Some("1h"), Some("10m")), &Config::default()).unwrap();
        assert_eq!(defaults.focus_minutes, 60);
        assert_eq!(defaults.break_minutes, 10);
    }

    #[test]
    fn test_resolve_defaults_rejects_out_of_range() {
        let err = resolve_defaults(&args(Some("90"), None), &Config::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid duration: focus must be between 5 and 60 minutes, got 90"
        );

        let err = resolve_defaults(&args(None, Some("0")), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("break must be between 1 and 15"));
    }

    #[test]
    fn test_resolve_defaults_rejects_garbage() {
        let err = resolve_defaults(&args(Some("soon"), None), &Config::default()).unwrap_err();
        assert!(matches!(err, PomodoroError::InvalidDuration(_)));
    }

    #[test]
    fn test_print_snapshot_json_lines() {
        let mut pomodoro = Pomodoro::new(Defaults::default(), Box::new(Silent));
        pomodoro.play_pause();

        let mut buf = Vec::new();
        print_snapshot(&mut buf, &pomodoro, OutputFormat::Json).unwrap();
        pomodoro.tick();
        print_snapshot(&mut buf, &pomodoro, OutputFormat::Json).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(r#""time_remaining":1500"#));
        assert!(lines[1].contains(r#""time_remaining":1499"#));
    }

    #[test]
    fn test_print_transition_json_between_snapshots() {
        let mut pomodoro = Pomodoro::new(
            Defaults {
                focus_minutes: 5,
                break_minutes: 1,
            },
            Box::new(Silent),
        );
        pomodoro.play_pause();
        for _ in 0..300 {
            pomodoro.tick();
        }

        let mut buf = Vec::new();
        let transition = pomodoro.tick().unwrap();
        print_transition(&mut buf, &transition, Local::now(), OutputFormat::Json).unwrap();
        print_snapshot(&mut buf, &pomodoro, OutputFormat::Json).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let event: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(event["transition"]["from"], "focusing");
        assert_eq!(event["transition"]["to"]["label"], "on_break");
        assert!(lines[1].contains(r#""time_remaining":60"#));
    }
}

//! UI rendering for the TUI.
//!
//! Three panels mirror the timer's presentation targets: durations,
//! controls, and session status.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::features::focus::{
    format_minutes, progress, remaining_text, status_title, SessionLabel, Snapshot,
};
use crate::tui::app::{App, HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let snapshot = app.snapshot();

    // Create layout: header, durations, controls, status, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Durations
            Constraint::Length(3), // Controls
            Constraint::Min(6),    // Session status
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, &snapshot, chunks[0]);
    render_durations(frame, &snapshot, app.durations_editable(), chunks[1]);
    render_controls(frame, &snapshot, chunks[2]);
    render_session(frame, &snapshot, chunks[3]);
    render_status_bar(frame, app, chunks[4]);
}

const fn label_color(label: SessionLabel) -> Color {
    match label {
        SessionLabel::Focusing => Color::Red,
        SessionLabel::OnBreak => Color::Green,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let color = snapshot
        .session
        .map_or(Color::Cyan, |session| label_color(session.label));

    let header = Paragraph::new(" Pomodoro ")
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the focus and break duration adjusters.
fn render_durations(frame: &mut Frame<'_>, snapshot: &Snapshot, editable: bool, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let style = if editable {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let focus = Paragraph::new(format!(
        "[f] - Focus Duration: {} + [F]",
        format_minutes(snapshot.focus_minutes)
    ))
    .style(style)
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    let brk = Paragraph::new(format!(
        "[b] - Break Duration: {} + [B]",
        format_minutes(snapshot.break_minutes)
    ))
    .style(style)
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(focus, columns[0]);
    frame.render_widget(brk, columns[1]);
}

/// Render the play/pause and stop controls.
fn render_controls(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let play_pause = if snapshot.timer_running {
        Span::styled("[space] ⏸ Pause", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("[space] ▶ Play", Style::default().fg(Color::Green))
    };

    let stop_style = if snapshot.session.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let controls = Paragraph::new(Line::from(vec![
        play_pause,
        Span::raw("    "),
        Span::styled("[s] ■ Stop", stop_style),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(controls, area);
}

/// Render the active session: title, remaining time, progress.
fn render_session(frame: &mut Frame<'_>, snapshot: &Snapshot, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Session ");

    let Some(session) = snapshot.session else {
        let idle = Paragraph::new("No session running")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(idle, area);
        return;
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Remaining
            Constraint::Length(1), // Paused marker
            Constraint::Length(1), // Gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let color = label_color(session.label);
    let title = Paragraph::new(status_title(
        &session,
        snapshot.focus_minutes,
        snapshot.break_minutes,
    ))
    .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let remaining = Paragraph::new(remaining_text(&session)).alignment(Alignment::Center);
    frame.render_widget(remaining, rows[1]);

    if !snapshot.timer_running {
        let paused = Paragraph::new("PAUSED")
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(paused, rows[2]);
    }

    let ratio = progress(&session, snapshot.focus_minutes, snapshot.break_minutes);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color))
        .ratio(ratio.clamp(0.0, 1.0));
    frame.render_widget(gauge, rows[3]);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

//! Terminal User Interface (TUI) for pomodoro.
//!
//! Full-screen timer built with ratatui and crossterm. The loop is
//! single-threaded: it waits for input no longer than the time left until
//! the next tick, then applies any tick that has come due.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomodoroError;
use crate::features::focus::Pomodoro;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(pomodoro: Pomodoro) -> Result<(), PomodoroError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| PomodoroError::terminal("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomodoroError::terminal("Failed to setup terminal", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomodoroError::terminal("Failed to create terminal", e))?;

    let mut app = App::new(pomodoro);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomodoroError> {
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomodoroError::terminal("Failed to draw", e))?;

        if let Some(action) = event::next_action(app.poll_timeout(Instant::now()))? {
            apply(app, action);
        }

        app.on_tick(Instant::now());
    }

    Ok(())
}

fn apply(app: &mut App, action: event::Action) {
    use event::Action;

    match action {
        Action::Quit => app.should_quit = true,
        Action::PlayPause => app.play_pause(Instant::now()),
        Action::Stop => app.stop(Instant::now()),
        Action::FocusIncrease => app.increase_focus(),
        Action::FocusDecrease => app.decrease_focus(),
        Action::BreakIncrease => app.increase_break(),
        Action::BreakDecrease => app.decrease_break(),
        Action::Help => app.show_help(),
    }
}

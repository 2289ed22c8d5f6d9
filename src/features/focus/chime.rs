//! Transition notifications.
//!
//! A chime is rung once whenever the timer switches between focusing and
//! break. Ringing is fire-and-forget: implementations log failures and
//! return nothing, so the timer can never observe them.

use std::io::Write;
use std::process::{Command, Stdio};

use notify_rust::Notification;

use super::session::SessionLabel;
use crate::config::SoundConfig;

/// Remote sound played on every transition.
pub const DEFAULT_SOUND_URL: &str = "https://bigsoundbank.com/UPLOAD/mp3/1482.mp3";

/// Something that announces an interval switch.
#[cfg_attr(test, mockall::automock)]
pub trait Chime {
    /// Announce that `next` has just begun.
    fn ring(&self, next: SessionLabel);
}

impl<C: Chime + ?Sized> Chime for Box<C> {
    fn ring(&self, next: SessionLabel) {
        (**self).ring(next);
    }
}

/// Does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Chime for Silent {
    fn ring(&self, _next: SessionLabel) {}
}

/// Writes the terminal bell character to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn ring(&self, _next: SessionLabel) {
        let mut stderr = std::io::stderr();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|()| stderr.flush()) {
            log::warn!("Failed to ring terminal bell: {e}");
        }
    }
}

/// Plays a sound file or URL through an external audio player.
#[derive(Debug, Clone)]
pub struct SoundCommand {
    /// Player executable followed by its arguments.
    player: Vec<String>,
    /// Sound location appended as the last argument.
    url: String,
}

impl SoundCommand {
    /// Create a sound command. `player` must name at least the executable.
    #[must_use]
    pub fn new(player: Vec<String>, url: impl Into<String>) -> Self {
        Self {
            player,
            url: url.into(),
        }
    }

    /// Executable and arguments to spawn, or `None` without a player.
    #[must_use]
    pub fn argv(&self) -> Option<(&str, Vec<&str>)> {
        let (program, args) = self.player.split_first()?;
        let args = args
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.url.as_str()))
            .collect();
        Some((program.as_str(), args))
    }
}

impl Chime for SoundCommand {
    fn ring(&self, _next: SessionLabel) {
        let Some((program, args)) = self.argv() else {
            log::warn!("No sound player configured; skipping sound");
            return;
        };

        let spawned = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match spawned {
            Ok(mut child) => {
                log::debug!("Spawned {program} (pid {}) for {}", child.id(), self.url);
                // Reap the player in the background so it never becomes a zombie.
                std::thread::spawn(move || {
                    if let Err(e) = child.wait() {
                        log::warn!("Sound player did not exit cleanly: {e}");
                    }
                });
            }
            Err(e) => log::warn!("Failed to start sound player {program}: {e}"),
        }
    }
}

/// Shows a desktop notification naming the interval that just began.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotification;

impl DesktopNotification {
    /// Notification body for a transition into `next`.
    #[must_use]
    pub const fn message(next: SessionLabel) -> &'static str {
        match next {
            SessionLabel::Focusing => "Break is over. Time to focus.",
            SessionLabel::OnBreak => "Focus session complete. Take a break.",
        }
    }
}

impl Chime for DesktopNotification {
    fn ring(&self, next: SessionLabel) {
        let result = Notification::new()
            .appname("pomodoro")
            .summary(next.display_name())
            .body(Self::message(next))
            .show();

        if let Err(e) = result {
            log::warn!("Failed to show desktop notification: {e}");
        }
    }
}

/// Rings every contained chime in order.
#[derive(Default)]
pub struct Chimes(Vec<Box<dyn Chime>>);

impl Chimes {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a chime.
    #[must_use]
    pub fn with(mut self, chime: impl Chime + 'static) -> Self {
        self.0.push(Box::new(chime));
        self
    }

    /// Number of chimes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Chime for Chimes {
    fn ring(&self, next: SessionLabel) {
        for chime in &self.0 {
            chime.ring(next);
        }
    }
}

/// Build the chime set described by the sound settings.
///
/// `muted` overrides the settings and yields a set that does nothing.
#[must_use]
pub fn from_config(sound: &SoundConfig, muted: bool) -> Chimes {
    let mut chimes = Chimes::new();
    if muted {
        return chimes;
    }

    if sound.enabled && !sound.player.is_empty() {
        chimes = chimes.with(SoundCommand::new(sound.player.clone(), sound.url.clone()));
    }
    if sound.bell {
        chimes = chimes.with(TerminalBell);
    }
    if sound.notifications {
        chimes = chimes.with(DesktopNotification);
    }
    chimes
}

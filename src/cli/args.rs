use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A terminal Pomodoro timer")]
#[command(long_about = "pomodoro - A terminal Pomodoro timer

Alternates between focusing and break intervals, counting down once per
second and playing a sound whenever the interval changes.

QUICK START:
  pomodoro                      Open the timer (25m focus / 5m break)
  pomodoro run --focus 50m      Start with a longer focus interval
  pomodoro run --plain          Line output instead of the full-screen UI

KEYS:
  space/p  play or pause       s  stop and reset
  f/F      focus -/+           b/B  break -/+
  ?        help                q  quit

For more information on a specific command, run:
  pomodoro <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Config file to use instead of ~/.pomodoro/config.yaml
    #[arg(long, global = true, env = "POMODORO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the timer
    ///
    /// Opens the full-screen timer. Durations given here replace the
    /// configured starting values for this run; 'stop' always resets to
    /// 25m focus / 5m break.
    ///
    /// # Examples
    ///
    ///   pomodoro run
    ///   pomodoro run --focus 45 --break 10
    ///   pomodoro run --plain --no-sound
    #[command(alias = "r")]
    Run(RunArgs),

    /// Inspect or create the configuration file
    ///
    /// # Examples
    ///
    ///   pomodoro config show
    ///   pomodoro config show -o json
    ///   pomodoro config path
    ///   pomodoro config init
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomodoro completions zsh > ~/.zsh/completions/_pomodoro
    ///   pomodoro completions fish | source
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Focus length (5-60 minutes, e.g. 25, 25m, 1h)
    #[arg(long, short = 'f')]
    pub focus: Option<String>,

    /// Break length (1-15 minutes, e.g. 5, 5m)
    #[arg(long = "break", short = 'b')]
    pub break_: Option<String>,

    /// Print status lines instead of opening the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Do not play a sound or show notifications on transitions
    #[arg(long)]
    pub no_sound: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

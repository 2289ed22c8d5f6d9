use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomodoro::cli::args::{Cli, Commands, ConfigCommands, OutputFormat, RunArgs};
use pomodoro::cli::commands;
use pomodoro::config::{Config, GeneralConfig, Paths};
use pomodoro::error::PomodoroError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomodoroError> {
    let cli = Cli::parse();
    let paths = Paths::default();
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file.clone());

    // `completions`, `config path` and `config init` work without reading the
    // config file, so a broken file can still be replaced.
    let output = match cli.command {
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
        Some(Commands::Config(args)) => match args.command {
            ConfigCommands::Path => commands::config::path(&config_path),
            ConfigCommands::Init { force } => {
                start_logging(&paths, &GeneralConfig::default().log_level);
                commands::config::init(&config_path, force)?
            }
            ConfigCommands::Show => {
                let (config, format) = load_config(&paths, &config_path, cli.output)?;
                commands::config::show(&config, format)?
            }
        },
        Some(Commands::Run(args)) => {
            let (config, format) = load_config(&paths, &config_path, cli.output)?;
            commands::run(&args, &config, format)?
        }
        None => {
            let (config, format) = load_config(&paths, &config_path, cli.output)?;
            commands::run(&RunArgs::default(), &config, format)?
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Read the config file, start logging at its level, then clamp durations
/// and report every adjustment.
fn load_config(
    paths: &Paths,
    path: &Path,
    output: Option<OutputFormat>,
) -> Result<(Config, OutputFormat), PomodoroError> {
    let mut config = Config::load_from_path(path)?;
    config.general.color.apply();

    start_logging(paths, &config.general.log_level);
    log::debug!("Loaded config from {}", path.display());

    for adjustment in config.focus.normalize() {
        log::warn!("{adjustment}");
        eprintln!("{}: {adjustment}", "warning".yellow().bold());
    }

    let format = output.unwrap_or(config.general.default_output);
    Ok((config, format))
}

fn start_logging(paths: &Paths, level: &str) {
    if let Err(e) = pomodoro::logging::init(paths, level) {
        eprintln!("{}: logging disabled: {e:#}", "warning".yellow().bold());
    }
}

//! Command-line adapter.
//!
//! [`run`] is the whole CLI behind `main`: it applies the global output
//! flags, loads configuration, initialises logging and dispatches to the
//! subcommand handlers.

pub mod check;
pub mod command;
pub mod favorites;
pub mod output;
pub mod quote;

use std::path::Path;

use command::{CheckCommand, Cli, ColorChoice, Commands};

use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Run a parsed command line.
///
/// # Errors
///
/// Returns the first error raised by configuration loading or the handler.
pub async fn run(cli: Cli) -> Result<()> {
    output::set_mode(output::Mode::from_flags(cli.json, cli.quiet));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    match cli.command {
        Commands::Quote(args) => {
            let config = load_config(&cli.config, cli.log_level)?;
            quote::execute(&args.order, &config)
        }
        Commands::Favorites(command) => {
            let config = load_config(&cli.config, cli.log_level)?;
            favorites::execute(command, &config).await
        }
        Commands::Check(CheckCommand::Config) => check::config(&cli.config),
    }
}

/// Load configuration (defaults if the file is absent) and start logging.
fn load_config(path: &Path, log_level: Option<String>) -> Result<Config> {
    let mut config = Config::load_or_default(path)?;
    if let Some(level) = log_level {
        config.logging.level = level;
    }
    config.init_logging();
    Ok(config)
}

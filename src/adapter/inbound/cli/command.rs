//! Command-line interface definitions.
//!
//! Defines the `basin` CLI using `clap`: quoting an order file, managing
//! favorite laundromats and validating configuration.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Laundromat cart, quote and favorites tool
#[derive(Parser, Debug)]
#[command(name = "basin")]
#[command(version, about)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "basin.toml")]
    pub config: PathBuf,

    /// Override the configured log level (e.g. "debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the basin CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a cart from an order file and print its lines and subtotal
    Quote(QuoteArgs),

    /// Manage favorite laundromats
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Arguments for `basin quote`.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Path to the TOML order file.
    pub order: PathBuf,
}

/// Subcommands for `basin favorites`.
#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// List favorites in the order they were added.
    List,
    /// Add a laundromat to favorites.
    Add {
        /// Laundromat ID.
        id: String,
    },
    /// Remove a laundromat from favorites.
    Remove {
        /// Laundromat ID.
        id: String,
    },
    /// Add the laundromat if absent, remove it if present.
    Toggle {
        /// Laundromat ID.
        id: String,
    },
}

/// Subcommands for `basin check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_name() {
        assert_eq!(Cli::command().get_name(), "basin");
    }

    #[test]
    fn parse_quote() {
        let cli = Cli::try_parse_from(["basin", "quote", "order.toml"]).unwrap();
        match cli.command {
            Commands::Quote(args) => assert_eq!(args.order, PathBuf::from("order.toml")),
            other => panic!("expected quote, got {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("basin.toml"));
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "basin",
            "quote",
            "order.toml",
            "--json",
            "--config",
            "other.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn parse_favorites_toggle() {
        let cli = Cli::try_parse_from(["basin", "favorites", "toggle", "lm-7"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Favorites(FavoritesCommand::Toggle { ref id }) if id == "lm-7"
        ));
    }

    #[test]
    fn favorites_add_requires_id() {
        assert!(Cli::try_parse_from(["basin", "favorites", "add"]).is_err());
    }

    #[test]
    fn parse_check_config() {
        let cli = Cli::try_parse_from(["basin", "check", "config"]).unwrap();
        assert!(matches!(cli.command, Commands::Check(CheckCommand::Config)));
    }

    #[test]
    fn parse_color_never() {
        let cli = Cli::try_parse_from(["basin", "--color", "never", "favorites", "list"]).unwrap();
        assert!(matches!(cli.color, ColorChoice::Never));
    }
}

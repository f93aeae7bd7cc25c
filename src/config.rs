//! Command line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::catalog::FilterState;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PRODUCT_CATALOG_LOG";

#[derive(Debug, Parser)]
#[command(name = "product-catalog")]
#[command(about = "Filterable product table for the terminal")]
#[command(version)]
#[command(after_help = "Environment:\n  PRODUCT_CATALOG_LOG   Log filter (default: info)")]
pub struct Cli {
    /// Load users.json, categories.json and products.json from DIR
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Theme preset: terminal, dracula, nord
    #[arg(long, default_value = "terminal")]
    pub theme: String,

    /// Start with this user's tab selected
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Start with this search text
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Print the screen as plain text and exit
    #[arg(long, conflicts_with = "hooks")]
    pub snapshot: bool,

    /// Print test hook regions as JSON and exit
    #[arg(long)]
    pub hooks: bool,

    /// Width for --snapshot / --hooks
    #[arg(long, default_value_t = 100)]
    pub width: u16,

    /// Height for --snapshot / --hooks
    #[arg(long, default_value_t = 30)]
    pub height: u16,

    /// Write logs to PATH
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, env = LOG_ENV, default_value = "info", hide = true)]
    pub log: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Snapshot,
    Hooks,
}

impl Mode {
    /// Modes that print to stdout and exit.
    pub fn is_one_shot(&self) -> bool {
        !matches!(self, Self::Interactive)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: Option<PathBuf>,
    pub theme: String,
    pub user: Option<String>,
    pub query: Option<String>,
    pub mode: Mode,
    /// Size for one-shot modes; interactive mode uses the terminal's.
    pub width: u16,
    pub height: u16,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mode = if cli.snapshot {
            Mode::Snapshot
        } else if cli.hooks {
            Mode::Hooks
        } else {
            Mode::Interactive
        };

        Self {
            data_dir: cli.data_dir,
            theme: cli.theme,
            user: cli.user,
            query: cli.query,
            mode,
            width: cli.width.max(1),
            height: cli.height.max(1),
            log_file: cli.log_file,
            log_filter: cli.log,
        }
    }
}

impl Config {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    /// Initial filter state, built with the regular transitions.
    pub fn initial_filter(&self) -> FilterState {
        let mut state = FilterState::new();
        if let Some(user) = &self.user {
            state.select_user(user.as_str());
        }
        if let Some(query) = &self.query {
            state.set_query(query.as_str());
        }
        state
    }
}

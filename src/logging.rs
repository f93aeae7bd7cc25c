//! Tracing subscriber setup.
//!
//! The interactive screen owns stdout and stderr, so it only logs when
//! `--log-file` is given. One-shot modes log to stderr.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{CatalogError, Result};

fn env_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber for this run.
///
/// A subscriber that is already installed is kept.
pub fn init(config: &Config) -> Result<()> {
    let filter = env_filter(&config.log_filter);

    let installed = match &config.log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None if config.mode.is_one_shot() => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        None => return Ok(()),
    };

    if installed.is_ok() {
        tracing::debug!(filter = %config.log_filter, "logging initialized");
    }
    Ok(())
}

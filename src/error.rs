//! Errors raised at the edges: loading fixtures and driving the terminal.
//!
//! Filtering and joining never fail; nothing in `catalog::join` or
//! `catalog::filter` returns this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Id;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid fixture data in {path}: {source}")]
    Json {
        /// File path, or `<embedded:NAME>` for the built-in dataset.
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {collection} id {id}")]
    DuplicateId { collection: &'static str, id: Id },

    #[error("unknown theme '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("failed to encode hook regions: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

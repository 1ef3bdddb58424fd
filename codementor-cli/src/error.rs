//! Error type for the `codementor` binary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by rendering, configuration and the preview server.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot bind preview server to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize page manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected lookup response for BIN {bin}: {source}")]
    Schema {
        bin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("File error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl LookupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LookupError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

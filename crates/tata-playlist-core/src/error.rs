use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Duplicate channel id in catalogue: {id}")]
    DuplicateChannelId { id: String },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown config key: {key}")]
    ConfigKeyNotFound { key: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlaylistError>;

impl PlaylistError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Write { .. } => 2,
            Self::ConfigParse { .. } => 3,
            Self::ConfigKeyNotFound { .. } => 4,
            Self::DuplicateChannelId { .. } => 5,
            _ => 1,
        }
    }
}

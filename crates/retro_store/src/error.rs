use std::path::PathBuf;

use thiserror::Error;

/// Failure reported by a [`KeyValueStore`](crate::KeyValueStore) backend
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage i/o failed at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key `{0}` (allowed: [A-Za-z0-9_-]+)")]
    InvalidKey(String),

    #[error("storage rejected write: {0}")]
    Rejected(String),
}

/// Failure of a [`ClientStateStore`](crate::ClientStateStore) mutation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("failed to encode persisted state: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

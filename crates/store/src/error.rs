use std::path::PathBuf;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure to read or write a persisted document. Every variant names the path.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed document {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            StoreError::NotFound { path }
            | StoreError::Parse { path, .. }
            | StoreError::Io { path, .. } => path,
        }
    }
}

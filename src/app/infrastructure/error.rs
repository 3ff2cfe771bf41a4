use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot open {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Path of the file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            AppError::Load { path, .. } | AppError::Save { path, .. } => path.as_path(),
        }
    }

    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            AppError::Load { source, .. } | AppError::Save { source, .. } => source.kind(),
        }
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

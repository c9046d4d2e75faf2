//! Buffer Error Types

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for opening a buffer
pub type OpenResult<T> = Result<T, OpenError>;

/// Error type for opening or mapping a file
#[derive(Debug, Error)]
pub enum OpenError {
    /// File does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Permission denied
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// File opened but the mapping failed
    #[error("cannot map '{}': {source}", path.display())]
    Map {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other IO failure while opening
    #[error("cannot open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl OpenError {
    /// Classify an IO error raised while opening `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => OpenError::NotFound { path },
            io::ErrorKind::PermissionDenied => OpenError::PermissionDenied { path },
            _ => OpenError::Io { path, source: err },
        }
    }

    /// Path of the file that failed to open
    pub fn path(&self) -> &Path {
        match self {
            OpenError::NotFound { path }
            | OpenError::PermissionDenied { path }
            | OpenError::NotAFile { path }
            | OpenError::Map { path, .. }
            | OpenError::Io { path, .. } => path,
        }
    }
}

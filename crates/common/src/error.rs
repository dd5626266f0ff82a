use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("IO error on {}: {source}", path.display())]
    PathIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // walkdir's own message already names the path
    #[error("Failed to walk: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl LlfError {
    /// Maps an I/O error on `path`, keeping permission failures distinguishable.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::PermissionDenied {
            LlfError::PermissionDenied(path.display().to_string())
        } else {
            LlfError::PathIo {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }

    /// True when a walk error was caused by missing access rights.
    pub fn is_permission_denied(err: &walkdir::Error) -> bool {
        err.io_error()
            .map(|e| e.kind() == std::io::ErrorKind::PermissionDenied)
            .unwrap_or(false)
    }
}

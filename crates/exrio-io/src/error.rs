//! Error types for I/O operations.
//!
//! Every failure falls into one of two kinds: the file could not be opened
//! and decoded ([`IoError::Open`]), or it could not be written
//! ([`IoError::Write`]). Both carry the path and the underlying cause.

use std::fmt::Display;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File missing, unreadable, malformed, or holding channels the
    /// adapter cannot map.
    #[error("unable to read image file \"{}\": {reason}", path.display())]
    Open {
        /// File that failed.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// Unwritable path, disk error, or pixel data that does not describe a
    /// valid image.
    #[error("unable to write image file \"{}\": {reason}", path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },
}

impl IoError {
    /// Creates an [`IoError::Open`] error.
    pub fn open(path: &Path, reason: impl Display) -> Self {
        Self::Open {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Creates an [`IoError::Write`] error.
    pub fn write(path: &Path, reason: impl Display) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Path the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// Returns `true` for [`IoError::Open`].
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns `true` for [`IoError::Write`].
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_path_and_cause() {
        let err = IoError::open(Path::new("missing.exr"), "No such file or directory");
        assert_eq!(
            err.to_string(),
            "unable to read image file \"missing.exr\": No such file or directory"
        );
        assert!(err.is_open());
        assert_eq!(err.path(), Path::new("missing.exr"));

        let err = IoError::write(Path::new("/out.exr"), "permission denied");
        assert!(err.is_write());
        assert!(err.to_string().starts_with("unable to write image file \"/out.exr\""));
    }
}

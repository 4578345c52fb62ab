//! Error types for the generation engine.
//!
//! Per-file pipelines catch these at their boundary and turn them into alerts,
//! so callers of `generate`, `list_different` and `watch` only see them for
//! setup failures (bad glob, watcher could not start).

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias with [`CssDtsError`] as the default error.
pub type Result<T, E = CssDtsError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CssDtsError {
    /// Filesystem failure on a specific path
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet could not be compiled
    #[error("failed to compile {}: {message}", .file.display())]
    Compile { file: PathBuf, message: String },

    /// Export names could not be extracted from compiled CSS
    #[error("failed to extract class names from {}: {message}", .file.display())]
    Extract { file: PathBuf, message: String },

    /// A glob pattern is malformed
    #[error("invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The filesystem watcher failed
    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),
}

impl CssDtsError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        CssDtsError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Attach a path to `std::io::Result` values.
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn at_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| CssDtsError::io(path, source))
    }
}

// src/error.rs

use std::io;
use std::path::{Path, PathBuf};

/// Result alias used across the crate. Defaults to [`LexError`].
pub type Result<T, E = LexError> = std::result::Result<T, E>;

/// Failures that can happen while loading, reading or writing the files a run touches.
///
/// None of these abort the pipeline on their own: each stage boundary logs the
/// error and carries on with an empty value.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// The file does not exist.
    #[error("file not found: '{}'", .path.display())]
    MissingFile { path: PathBuf },

    /// Any other I/O failure on `path`.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The layered configuration could not be built or deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl LexError {
    /// Maps an [`io::Error`] raised on `path` into the matching variant.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            LexError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            LexError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

//! Error types for config path resolution.
//!
//! Only an explicitly pinned executable that cannot be found, or a second
//! attempt to initialize the process-wide resolver, is an error. Every other
//! missing input degrades to an absent path field instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving config paths.
#[derive(Error, Debug)]
pub enum PathsError {
    /// The explicitly supplied executable path does not name an existing file.
    #[error("Executable not found at {path}")]
    InvalidArgument { path: PathBuf },

    /// The process-wide resolver was already created, either by an earlier
    /// `init_global` or by `global`, so the supplied metadata was not applied.
    #[error("Process-wide config path resolver is already initialized")]
    GlobalAlreadyInitialized,
}

impl PathsError {
    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PathsError::InvalidArgument { path } => Some(path),
            PathsError::GlobalAlreadyInitialized => None,
        }
    }
}

//! CLI exit codes for scripting and automation.
//!
//! Invariants:
//! - Exit code 2 is reserved for a pinned executable that does not exist.

use config_paths::PathsError;

/// Structured exit codes for config-paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - paths resolved and printed.
    Success = 0,

    /// General error - output could not be rendered or written.
    GeneralError = 1,

    /// Invalid argument - the `--exe` path does not name an existing file.
    InvalidArgument = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Extension trait to find the exit code for an `anyhow::Error`.
pub trait ExitCodeExt {
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        match self.downcast_ref::<PathsError>() {
            Some(PathsError::InvalidArgument { .. }) => ExitCode::InvalidArgument,
            Some(PathsError::GlobalAlreadyInitialized) | None => ExitCode::GeneralError,
        }
    }
}

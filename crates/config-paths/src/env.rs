//! Environment variable access for the config override channel.
//!
//! Responsibilities:
//! - Read environment variables with empty/whitespace filtering.
//! - Expose the `APP_CONFIG_FILE` override value.
//!
//! Does NOT handle:
//! - Interpreting the override (URI vs. filesystem path, see `resolver`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use crate::constants::APP_CONFIG_FILE_ENV;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Returns the value of the `APP_CONFIG_FILE` override, if set.
pub fn app_config_file_override() -> Option<String> {
    env_var_or_none(APP_CONFIG_FILE_ENV)
}

//! Shared test utilities for config-paths integration tests.
//!
//! Invariants / Assumptions:
//! - Commands never inherit the host's override or pinned-executable env vars.

use assert_cmd::Command;

/// Returns a hermetic `config-paths` command for integration testing.
pub fn paths_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("config-paths");

    cmd.env_remove("APP_CONFIG_FILE")
        .env_remove("CONFIG_PATHS_EXE")
        .env_remove("RUST_LOG");

    cmd
}

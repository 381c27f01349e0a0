//! The resolved set of config locations.
//!
//! Responsibilities:
//! - Hold one immutable resolution result (`ResolvedPaths`).
//! - Provide `combine`, the null-propagating path join.
//!
//! Invariants:
//! - `application_config_uri` is `None` whenever `application_uri` is empty
//!   and no override applied.
//! - Roaming/local fields are only populated when user config was requested
//!   and no executable was pinned.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Config locations for one application identity.
///
/// Built once by the resolver and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    pub(crate) has_entry_identity: bool,
    pub(crate) application_uri: String,
    pub(crate) application_config_uri: Option<String>,
    pub(crate) roaming_config_directory: Option<PathBuf>,
    pub(crate) roaming_config_file: Option<PathBuf>,
    pub(crate) local_config_directory: Option<PathBuf>,
    pub(crate) local_config_file: Option<PathBuf>,
    pub(crate) company_name: String,
    pub(crate) product_name: String,
    pub(crate) product_version: String,
    pub(crate) includes_user_config: bool,
}

impl ResolvedPaths {
    /// Whether an entry-point identity was found.
    pub fn has_entry_identity(&self) -> bool {
        self.has_entry_identity
    }

    /// Absolute path or URI of the running executable; empty if unknown.
    pub fn application_uri(&self) -> &str {
        &self.application_uri
    }

    /// Location of the application's own config file.
    pub fn application_config_uri(&self) -> Option<&str> {
        self.application_config_uri.as_deref()
    }

    pub fn roaming_config_directory(&self) -> Option<&Path> {
        self.roaming_config_directory.as_deref()
    }

    pub fn roaming_config_file(&self) -> Option<&Path> {
        self.roaming_config_file.as_deref()
    }

    pub fn local_config_directory(&self) -> Option<&Path> {
        self.local_config_directory.as_deref()
    }

    pub fn local_config_file(&self) -> Option<&Path> {
        self.local_config_file.as_deref()
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn product_version(&self) -> &str {
        &self.product_version
    }

    /// Whether user (roaming/local) resolution was attempted.
    pub fn includes_user_config(&self) -> bool {
        self.includes_user_config
    }

    /// False only when user config was requested but no roaming file could
    /// be placed. A resolution that never asked for user config reports true
    /// so callers treat the category as a no-op.
    pub fn has_roaming_config(&self) -> bool {
        self.roaming_config_file.is_some() || !self.includes_user_config
    }

    /// Same convention as [`has_roaming_config`](Self::has_roaming_config).
    pub fn has_local_config(&self) -> bool {
        self.local_config_file.is_some() || !self.includes_user_config
    }

    /// True when both resolutions agree on every path field.
    pub fn same_paths(&self, other: &ResolvedPaths) -> bool {
        self.application_uri == other.application_uri
            && self.application_config_uri == other.application_config_uri
            && self.roaming_config_directory == other.roaming_config_directory
            && self.roaming_config_file == other.roaming_config_file
            && self.local_config_directory == other.local_config_directory
            && self.local_config_file == other.local_config_file
    }
}

/// Joins `base` and `segment`, or returns `None` if either is absent.
///
/// An absent part anywhere in a chain of `combine` calls makes the whole
/// result absent, so a partially derived suffix never yields a path.
pub fn combine<A, B>(base: Option<A>, segment: Option<B>) -> Option<PathBuf>
where
    A: AsRef<Path>,
    B: AsRef<Path>,
{
    Some(base?.as_ref().join(segment?))
}

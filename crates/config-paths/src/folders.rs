//! Per-user base directories.
//!
//! Responsibilities:
//! - Define the `SpecialFolderProvider` collaborator (roaming and local roots).
//! - Provide `PlatformFolders`, backed by the `directories` crate.
//!
//! Does NOT handle:
//! - Creating directories.
//!
//! Invariants:
//! - A root that is not rooted is unusable; the resolver skips that category.

use std::path::{Path, PathBuf};

/// Resolves the per-user data roots user config files live under.
pub trait SpecialFolderProvider: Send + Sync {
    /// Root for settings that follow the user across machines.
    ///
    /// - Linux: `$XDG_DATA_HOME` or `~/.local/share`
    /// - macOS: `~/Library/Application Support`
    /// - Windows: `%AppData%` (`{FOLDERID_RoamingAppData}`)
    fn roaming_root(&self) -> Option<PathBuf>;

    /// Root for settings that stay on this machine.
    ///
    /// - Linux: `$XDG_DATA_HOME` or `~/.local/share`
    /// - macOS: `~/Library/Application Support`
    /// - Windows: `%LocalAppData%` (`{FOLDERID_LocalAppData}`)
    fn local_root(&self) -> Option<PathBuf>;
}

/// Platform-standard folders via [`directories::BaseDirs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformFolders;

impl SpecialFolderProvider for PlatformFolders {
    fn roaming_root(&self) -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.data_dir().to_path_buf())
    }

    fn local_root(&self) -> Option<PathBuf> {
        directories::BaseDirs::new().map(|dirs| dirs.data_local_dir().to_path_buf())
    }
}

/// Returns the root only if it is usable as a base for user config paths.
pub(crate) fn usable_root(root: Option<PathBuf>) -> Option<PathBuf> {
    root.filter(|p| is_rooted(p))
}

/// A path is rooted when it starts at a root or a prefix (`/`, `C:\`, `\\server`).
pub(crate) fn is_rooted(path: &Path) -> bool {
    path.has_root() || path.is_absolute()
}

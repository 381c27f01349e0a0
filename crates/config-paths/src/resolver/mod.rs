//! Config path resolution and the process-wide cache.
//!
//! Responsibilities:
//! - Own the identity, folder and hashing collaborators.
//! - Resolve pinned executables on demand (never cached).
//! - Serve the unpinned resolution from a shared snapshot, upgrading it when
//!   user config is first requested and rebuilding it after `refresh`.
//!
//! Does NOT handle:
//! - Reading or writing config file contents.
//!
//! Invariants:
//! - Snapshots are immutable; concurrent readers share one `Arc`.
//! - Construction races are settled at publish time; the loser's work is
//!   discarded.
//! - A snapshot built before a `refresh` is never cached after it.

mod build;
mod cache;
mod names;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::PathsError;
use crate::folders::{PlatformFolders, SpecialFolderProvider};
use crate::hashing::{IdentityHasher, Sha256IdentityHasher};
use crate::identity::{EntryMetadata, IdentityProvider, ProcessIdentityProvider};
use crate::paths::ResolvedPaths;

use build::{Collaborators, build_paths, pinned_application_uri};
use cache::PathsCache;

static GLOBAL: OnceLock<ConfigPathResolver> = OnceLock::new();

/// Resolves where an application's config files live.
///
/// # Example
///
/// ```no_run
/// use config_paths::{ConfigPathResolver, PathsError, entry_metadata};
///
/// # fn main() -> Result<(), PathsError> {
/// let resolver = ConfigPathResolver::init_global(entry_metadata!())?;
/// let paths = resolver.current();
/// if let Some(file) = paths.roaming_config_file() {
///     println!("roaming overrides: {}", file.display());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ConfigPathResolver {
    identity: Arc<dyn IdentityProvider>,
    folders: Arc<dyn SpecialFolderProvider>,
    hasher: Arc<dyn IdentityHasher>,
    cache: PathsCache,
}

impl std::fmt::Debug for ConfigPathResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigPathResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl ConfigPathResolver {
    /// Creates a resolver over `identity` with platform folders and the
    /// default SHA-256 hasher.
    pub fn new(identity: impl IdentityProvider + 'static) -> Self {
        Self {
            identity: Arc::new(identity),
            folders: Arc::new(PlatformFolders),
            hasher: Arc::new(Sha256IdentityHasher),
            cache: PathsCache::default(),
        }
    }

    pub fn with_folders(mut self, folders: impl SpecialFolderProvider + 'static) -> Self {
        self.folders = Arc::new(folders);
        self.cache.clear();
        self
    }

    pub fn with_hasher(mut self, hasher: impl IdentityHasher + 'static) -> Self {
        self.hasher = Arc::new(hasher);
        self.cache.clear();
        self
    }

    /// The process-wide resolver.
    ///
    /// Unless [`init_global`](Self::init_global) ran first, it knows no entry
    /// metadata and falls back to the bare executable path.
    pub fn global() -> &'static ConfigPathResolver {
        GLOBAL.get_or_init(|| Self::new(ProcessIdentityProvider::without_entry_module()))
    }

    /// Initializes the process-wide resolver with the host binary's metadata.
    ///
    /// Must run before anything calls [`global`](Self::global).
    ///
    /// # Errors
    /// Returns [`PathsError::GlobalAlreadyInitialized`] if the process-wide
    /// resolver already exists; `metadata` is then discarded and the existing
    /// resolver stays reachable through `global`.
    pub fn init_global(
        metadata: EntryMetadata,
    ) -> Result<&'static ConfigPathResolver, PathsError> {
        let mut initialized = false;
        let resolver = GLOBAL.get_or_init(|| {
            initialized = true;
            Self::new(ProcessIdentityProvider::new(metadata))
        });

        if initialized {
            Ok(resolver)
        } else {
            tracing::warn!(
                "Process-wide config path resolver already initialized, metadata ignored"
            );
            Err(PathsError::GlobalAlreadyInitialized)
        }
    }

    /// Resolves paths, optionally for an explicitly named executable.
    ///
    /// Without `explicit_exe` this is [`cached`](Self::cached). With it, a
    /// fresh resolution is built every call and no user paths are computed.
    ///
    /// # Errors
    /// Returns [`PathsError::InvalidArgument`] if `explicit_exe` does not name
    /// an existing file.
    pub fn paths(
        &self,
        explicit_exe: Option<&Path>,
        include_user_config: bool,
    ) -> Result<Arc<ResolvedPaths>, PathsError> {
        match explicit_exe {
            Some(exe) => self.resolve(Some(exe), include_user_config).map(Arc::new),
            None => Ok(self.cached(include_user_config)),
        }
    }

    /// The shared resolution for the running application.
    ///
    /// Rebuilt when nothing is cached or when user config is requested and
    /// the cached snapshot lacks it. Never downgraded.
    pub fn cached(&self, include_user_config: bool) -> Arc<ResolvedPaths> {
        if let Some(paths) = self.cache.get(include_user_config) {
            return paths;
        }

        let generation = self.cache.generation();
        tracing::debug!(include_user_config, generation, "Building config paths snapshot");
        let fresh = Arc::new(build_paths(&self.collaborators(), None, include_user_config));
        self.cache.publish(fresh, include_user_config, generation)
    }

    /// Shorthand for `cached(true)`.
    pub fn current(&self) -> Arc<ResolvedPaths> {
        self.cached(true)
    }

    /// Drops the shared snapshot; the next access rebuilds it from scratch.
    /// Snapshots that were still being built when this ran are not cached.
    pub fn refresh(&self) {
        self.cache.clear();
        tracing::debug!("Config paths snapshot cleared");
    }

    /// Builds a resolution without touching the cache.
    ///
    /// # Errors
    /// Returns [`PathsError::InvalidArgument`] if `explicit_exe` does not name
    /// an existing file.
    pub fn resolve(
        &self,
        explicit_exe: Option<&Path>,
        include_user_config: bool,
    ) -> Result<ResolvedPaths, PathsError> {
        let pinned = explicit_exe.map(pinned_application_uri).transpose()?;
        Ok(build_paths(&self.collaborators(), pinned, include_user_config))
    }

    fn collaborators(&self) -> Collaborators<'_> {
        Collaborators {
            identity: self.identity.as_ref(),
            folders: self.folders.as_ref(),
            hasher: self.hasher.as_ref(),
        }
    }
}

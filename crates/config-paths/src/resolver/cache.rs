//! Process-wide snapshot slot for the unpinned resolution.
//!
//! Invariants:
//! - The slot only ever holds a complete, immutable `Arc<ResolvedPaths>`.
//! - A snapshot built with user config is never replaced by one without.
//! - `clear` drops the snapshot unconditionally and bumps the generation;
//!   snapshots built against an older generation are never stored.

use std::sync::{Arc, PoisonError, RwLock};

use crate::paths::ResolvedPaths;

#[derive(Debug, Default)]
struct Slot {
    paths: Option<Arc<ResolvedPaths>>,
    generation: u64,
}

#[derive(Debug, Default)]
pub(crate) struct PathsCache {
    slot: RwLock<Slot>,
}

/// A snapshot serves a request unless the request needs user config the
/// snapshot was built without.
fn satisfies(paths: &ResolvedPaths, include_user_config: bool) -> bool {
    !include_user_config || paths.includes_user_config
}

impl PathsCache {
    /// Returns the cached snapshot if it serves the request.
    pub(crate) fn get(&self, include_user_config: bool) -> Option<Arc<ResolvedPaths>> {
        let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        slot.paths
            .as_ref()
            .filter(|paths| satisfies(paths, include_user_config))
            .cloned()
    }

    /// The generation a snapshot built now must be published against.
    pub(crate) fn generation(&self) -> u64 {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .generation
    }

    /// Publishes `candidate` unless a concurrent caller already stored a
    /// snapshot that serves the request, and returns whichever is kept.
    ///
    /// If the cache was cleared since `generation` was read, `candidate` is
    /// handed back to the caller without being stored.
    pub(crate) fn publish(
        &self,
        candidate: Arc<ResolvedPaths>,
        include_user_config: bool,
        generation: u64,
    ) -> Arc<ResolvedPaths> {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.generation != generation {
            tracing::debug!(
                built = generation,
                current = slot.generation,
                "Config paths cleared during build, snapshot not cached"
            );
            return candidate;
        }

        if let Some(existing) = slot
            .paths
            .as_ref()
            .filter(|paths| satisfies(paths, include_user_config))
        {
            return Arc::clone(existing);
        }

        slot.paths = Some(Arc::clone(&candidate));
        candidate
    }

    pub(crate) fn clear(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        slot.paths = None;
        slot.generation = slot.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(includes_user_config: bool, uri: &str) -> Arc<ResolvedPaths> {
        Arc::new(ResolvedPaths {
            includes_user_config,
            application_uri: uri.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = PathsCache::default();
        assert!(cache.get(false).is_none());
        assert!(cache.get(true).is_none());
    }

    #[test]
    fn test_user_snapshot_serves_both_requests() {
        let cache = PathsCache::default();
        cache.publish(snapshot(true, "a"), true, 0);
        assert!(cache.get(true).is_some());
        assert!(cache.get(false).is_some());
    }

    #[test]
    fn test_plain_snapshot_does_not_serve_user_request() {
        let cache = PathsCache::default();
        cache.publish(snapshot(false, "a"), false, 0);
        assert!(cache.get(false).is_some());
        assert!(cache.get(true).is_none());
    }

    #[test]
    fn test_publish_keeps_existing_sufficient_snapshot() {
        let cache = PathsCache::default();
        let first = cache.publish(snapshot(true, "first"), true, 0);
        let kept = cache.publish(snapshot(true, "second"), true, 0);
        assert!(Arc::ptr_eq(&first, &kept));
        assert_eq!(kept.application_uri(), "first");
    }

    #[test]
    fn test_publish_upgrades_plain_snapshot() {
        let cache = PathsCache::default();
        cache.publish(snapshot(false, "plain"), false, 0);
        let upgraded = cache.publish(snapshot(true, "user"), true, 0);
        assert_eq!(upgraded.application_uri(), "user");
        assert_eq!(cache.get(false).unwrap().application_uri(), "user");
    }

    #[test]
    fn test_clear_drops_snapshot() {
        let cache = PathsCache::default();
        cache.publish(snapshot(true, "a"), true, 0);
        cache.clear();
        assert!(cache.get(false).is_none());
    }

    #[test]
    fn test_snapshot_built_before_clear_is_not_stored() {
        let cache = PathsCache::default();
        let generation = cache.generation();
        cache.clear();

        let returned = cache.publish(snapshot(true, "stale"), true, generation);
        assert_eq!(returned.application_uri(), "stale");
        assert!(cache.get(false).is_none());
        assert!(cache.get(true).is_none());
    }

    #[test]
    fn test_publish_after_clear_with_fresh_generation_is_stored() {
        let cache = PathsCache::default();
        cache.publish(snapshot(true, "old"), true, cache.generation());
        cache.clear();

        cache.publish(snapshot(true, "new"), true, cache.generation());
        assert_eq!(cache.get(true).unwrap().application_uri(), "new");
    }
}

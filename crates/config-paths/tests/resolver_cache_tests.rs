//! Integration tests for the shared config paths snapshot.
//!
//! These tests verify reuse, monotonic upgrade, refresh and the fact that
//! pinned executables bypass the cache.

mod common;

use std::sync::Arc;
use std::thread;

use common::counting_resolver;

#[test]
fn test_current_is_idempotent() {
    let (resolver, identity) = counting_resolver();

    let first = resolver.current();
    let second = resolver.current();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.same_paths(&second));
    assert_eq!(identity.lookups(), 1);
}

#[test]
fn test_user_config_request_upgrades_snapshot() {
    let (resolver, identity) = counting_resolver();

    let plain = resolver.cached(false);
    assert!(!plain.includes_user_config());
    assert!(plain.roaming_config_file().is_none());

    let upgraded = resolver.cached(true);
    assert!(upgraded.includes_user_config());
    assert!(upgraded.roaming_config_file().is_some());
    assert!(upgraded.local_config_file().is_some());
    assert_eq!(identity.lookups(), 2);
}

#[test]
fn test_snapshot_is_never_downgraded() {
    let (resolver, identity) = counting_resolver();

    let upgraded = resolver.cached(true);
    let again = resolver.cached(false);

    assert!(Arc::ptr_eq(&upgraded, &again));
    assert!(again.roaming_config_file().is_some());
    assert_eq!(identity.lookups(), 1);
}

#[test]
fn test_plain_requests_reuse_plain_snapshot() {
    let (resolver, identity) = counting_resolver();

    resolver.cached(false);
    resolver.cached(false);

    assert_eq!(identity.lookups(), 1);
}

#[test]
fn test_refresh_forces_rebuild() {
    let (resolver, identity) = counting_resolver();

    let before = resolver.current();
    resolver.refresh();
    let after = resolver.current();

    assert_eq!(identity.lookups(), 2);
    assert!(!Arc::ptr_eq(&before, &after));
    assert!(before.same_paths(&after));
}

#[test]
fn test_refresh_clears_upgrade() {
    let (resolver, _identity) = counting_resolver();

    resolver.cached(true);
    resolver.refresh();
    let plain = resolver.cached(false);

    assert!(!plain.includes_user_config());
    assert!(plain.roaming_config_file().is_none());
}

#[test]
fn test_paths_without_exe_uses_cache() {
    let (resolver, identity) = counting_resolver();

    let a = resolver.paths(None, true).unwrap();
    let b = resolver.paths(None, true).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(identity.lookups(), 1);
}

#[test]
fn test_pinned_exe_is_never_cached() {
    let (resolver, identity) = counting_resolver();
    let dir = tempfile::tempdir().unwrap();
    let exe = dir.path().join("tool");
    std::fs::write(&exe, b"#!/bin/sh\n").unwrap();

    let a = resolver.paths(Some(&exe), true).unwrap();
    let b = resolver.paths(Some(&exe), true).unwrap();
    let current = resolver.current();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(a.application_uri(), exe.to_string_lossy());
    assert!(a.roaming_config_file().is_none());
    assert_ne!(current.application_uri(), a.application_uri());
    // Pinned resolutions never consult the entry module.
    assert_eq!(identity.lookups(), 1);
}

#[test]
fn test_pinned_missing_exe_fails() {
    let (resolver, _identity) = counting_resolver();
    let dir = tempfile::tempdir().unwrap();

    for name in ["missing", "missing.exe", "nested/missing"] {
        let result = resolver.paths(Some(&dir.path().join(name)), false);
        assert!(
            matches!(result, Err(config_paths::PathsError::InvalidArgument { .. })),
            "{name} should be rejected"
        );
    }
}

#[test]
fn test_concurrent_readers_share_one_snapshot() {
    let (resolver, _identity) = counting_resolver();
    let resolver = Arc::new(resolver);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || resolver.current())
        })
        .collect();

    let snapshots: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("reader thread panicked"))
        .collect();

    let canonical = resolver.current();
    for snapshot in &snapshots {
        assert!(snapshot.same_paths(&canonical));
    }
    // Later readers all see the published snapshot.
    assert!(Arc::ptr_eq(&canonical, &resolver.current()));
}

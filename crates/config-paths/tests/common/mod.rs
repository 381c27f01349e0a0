//! Shared fakes for config-paths integration tests.
//!
//! Responsibilities:
//! - Provide an identity provider that counts how often it is consulted.
//! - Provide fixed roaming/local roots.
//!
//! Invariants:
//! - No fake reads the real environment or the real executable.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use config_paths::{
    ConfigPathResolver, EntryModuleInfo, IdentityProvider, SpecialFolderProvider,
};

/// Identity provider for a fixed application that counts entry lookups.
#[derive(Debug, Clone, Default)]
pub struct CountingIdentity {
    pub lookups: Arc<AtomicUsize>,
}

impl CountingIdentity {
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl IdentityProvider for CountingIdentity {
    fn entry_module(&self) -> Option<EntryModuleInfo> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Some(EntryModuleInfo {
            company: Some("Contoso".to_string()),
            product: Some("Widgets".to_string()),
            version: Some("3.1.0.0".to_string()),
            manifest_module_name: "widgets".to_string(),
            code_base: Some("file:///opt/contoso/widgets/widgets".to_string()),
            ..Default::default()
        })
    }

    fn current_executable_path(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/opt/contoso/widgets/widgets"))
    }

    fn base_directory(&self) -> PathBuf {
        PathBuf::from("/opt/contoso/widgets")
    }

    fn friendly_domain_name(&self) -> String {
        "widgets".to_string()
    }

    fn config_file_override(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HomeFolders;

impl SpecialFolderProvider for HomeFolders {
    fn roaming_root(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/home/alice/.roaming"))
    }

    fn local_root(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/home/alice/.local/share"))
    }
}

/// A resolver over a counting identity, plus a handle on its counter.
pub fn counting_resolver() -> (ConfigPathResolver, CountingIdentity) {
    let identity = CountingIdentity::default();
    let resolver = ConfigPathResolver::new(identity.clone()).with_folders(HomeFolders);
    (resolver, identity)
}

//! Tests for config path resolution.
//!
//! Responsibilities:
//! - Test application URI derivation (entry module, single-file, process).
//! - Test application config URI derivation and the override channel.
//! - Test product identity and user directory placement.
//!
//! Does NOT handle:
//! - Process-wide caching behavior (see `tests/resolver_cache_tests.rs`).
//!
//! Invariants:
//! - Collaborators are in-memory fakes; no test reads the real environment.

use std::path::{Path, PathBuf};

use crate::folders::SpecialFolderProvider;
use crate::identity::{EntryModuleInfo, IdentityProvider};


/// Identity provider returning fixed values.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    pub entry: Option<EntryModuleInfo>,
    pub exe: Option<PathBuf>,
    pub base: PathBuf,
    pub friendly: String,
    pub override_value: Option<String>,
}

impl IdentityProvider for StaticIdentity {
    fn entry_module(&self) -> Option<EntryModuleInfo> {
        self.entry.clone()
    }

    fn current_executable_path(&self) -> Option<PathBuf> {
        self.exe.clone()
    }

    fn base_directory(&self) -> PathBuf {
        self.base.clone()
    }

    fn friendly_domain_name(&self) -> String {
        self.friendly.clone()
    }

    fn config_file_override(&self) -> Option<String> {
        self.override_value.clone()
    }
}

/// Folder provider returning fixed roots.
#[derive(Debug, Clone, Default)]
pub struct FixedFolders {
    pub roaming: Option<PathBuf>,
    pub local: Option<PathBuf>,
}

impl SpecialFolderProvider for FixedFolders {
    fn roaming_root(&self) -> Option<PathBuf> {
        self.roaming.clone()
    }

    fn local_root(&self) -> Option<PathBuf> {
        self.local.clone()
    }
}

pub fn app_dir() -> PathBuf {
    Path::new("/opt/contoso/widgets").to_path_buf()
}

pub fn roaming_root() -> PathBuf {
    PathBuf::from("/home/alice/.roaming")
}

pub fn local_root() -> PathBuf {
    PathBuf::from("/home/alice/.local/share")
}

pub fn folders() -> FixedFolders {
    FixedFolders {
        roaming: Some(roaming_root()),
        local: Some(local_root()),
    }
}

/// A fully described, non-single-file entry module.
pub fn widgets_entry() -> EntryModuleInfo {
    EntryModuleInfo {
        company: Some("Contoso".to_string()),
        product: Some("Widgets".to_string()),
        version: Some("2.0.0.0".to_string()),
        entry_namespace: Some("Contoso.Widgets".to_string()),
        entry_type_name: Some("Program".to_string()),
        manifest_module_name: "widgets".to_string(),
        is_single_file: false,
        strong_name: None,
        code_base: Some("file:///opt/contoso/widgets/Widgets".to_string()),
    }
}

pub fn widgets_identity() -> StaticIdentity {
    StaticIdentity {
        entry: Some(widgets_entry()),
        exe: Some(app_dir().join("widgets")),
        base: app_dir(),
        friendly: "widgets".to_string(),
        override_value: None,
    }
}

//! Identity information about the running application.
//!
//! Responsibilities:
//! - Define the `IdentityProvider` collaborator the resolver queries.
//! - Describe entry module metadata (`EntryModuleInfo`, `EntryMetadata`).
//! - Provide `ProcessIdentityProvider`, backed by the current executable and
//!   build-embedded metadata.
//!
//! Does NOT handle:
//! - Turning identity into paths (see `resolver`).
//!
//! Invariants:
//! - Every field may be absent; absence is never an error.

use std::path::{Path, PathBuf};

use url::Url;

use crate::env::app_config_file_override;
use crate::hashing::StrongNameIdentity;

/// Metadata about the module that started the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryModuleInfo {
    /// Company attribute, if the module declares one.
    pub company: Option<String>,
    /// Product attribute, if the module declares one.
    pub product: Option<String>,
    /// Module version string.
    pub version: Option<String>,
    /// `.`-separated namespace of the entry point type.
    pub entry_namespace: Option<String>,
    /// Name of the entry point type.
    pub entry_type_name: Option<String>,
    /// File name of the module on disk.
    pub manifest_module_name: String,
    /// The module is bundled into a single-file executable and has no
    /// location of its own.
    pub is_single_file: bool,
    /// Signed identity, when the module carries one.
    pub strong_name: Option<StrongNameIdentity>,
    /// URI the module was loaded from.
    pub code_base: Option<String>,
}

/// Supplies identity information about the running application.
///
/// Implementations depend on the host; the resolver treats every missing
/// piece as a signal to degrade, never as a failure.
pub trait IdentityProvider: Send + Sync {
    /// Metadata of the entry module, if one can be found.
    fn entry_module(&self) -> Option<EntryModuleInfo>;

    /// Path of the current process's main executable.
    ///
    /// `None` when process introspection is unsupported.
    fn current_executable_path(&self) -> Option<PathBuf>;

    /// Directory the application was started from.
    fn base_directory(&self) -> PathBuf;

    /// Friendly name of the hosting domain, or an empty string.
    fn friendly_domain_name(&self) -> String;

    /// Alternate application config location, if one was configured.
    fn config_file_override(&self) -> Option<String> {
        app_config_file_override()
    }
}

/// Entry metadata a binary embeds at build time.
///
/// Usually built with [`entry_metadata!`](crate::entry_metadata) from the
/// binary's own crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    pub company: Option<String>,
    pub product: Option<String>,
    pub version: Option<String>,
    pub entry_namespace: Option<String>,
    pub entry_type_name: Option<String>,
    pub strong_name: Option<StrongNameIdentity>,
    pub is_single_file: bool,
}

impl EntryMetadata {
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the entry namespace. Rust module paths (`a::b`) are accepted and
    /// stored `.`-separated.
    pub fn with_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.entry_namespace = Some(namespace.as_ref().replace("::", "."));
        self
    }

    pub fn with_entry_type(mut self, name: impl Into<String>) -> Self {
        self.entry_type_name = Some(name.into());
        self
    }

    pub fn with_strong_name(mut self, strong_name: StrongNameIdentity) -> Self {
        self.strong_name = Some(strong_name);
        self
    }

    pub fn single_file(mut self, is_single_file: bool) -> Self {
        self.is_single_file = is_single_file;
        self
    }
}

/// Captures the calling crate's package metadata as [`EntryMetadata`].
///
/// Product and version come from `CARGO_PKG_NAME` / `CARGO_PKG_VERSION`,
/// the namespace from `module_path!()`.
#[macro_export]
macro_rules! entry_metadata {
    () => {
        $crate::EntryMetadata::default()
            .with_product(env!("CARGO_PKG_NAME"))
            .with_version(env!("CARGO_PKG_VERSION"))
            .with_namespace(module_path!())
    };
}

/// Identity provider for the current process.
///
/// The entry module is the current executable, described by the metadata
/// supplied at construction. Without metadata there is no entry module and
/// the resolver falls back to the bare executable path.
#[derive(Debug, Clone, Default)]
pub struct ProcessIdentityProvider {
    metadata: Option<EntryMetadata>,
}

impl ProcessIdentityProvider {
    pub fn new(metadata: EntryMetadata) -> Self {
        Self {
            metadata: Some(metadata),
        }
    }

    /// A provider that knows nothing about an entry module.
    pub fn without_entry_module() -> Self {
        Self { metadata: None }
    }
}

/// Combines embedded metadata with the module file it was loaded from.
///
/// Without an executable path the metadata still stands; only the module
/// name and code base are left empty.
fn describe_entry(metadata: &EntryMetadata, exe: Option<&Path>) -> EntryModuleInfo {
    let manifest_module_name = exe
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let code_base = exe
        .filter(|_| !metadata.is_single_file)
        .and_then(|exe| Url::from_file_path(exe).ok())
        .map(String::from);

    EntryModuleInfo {
        company: metadata.company.clone(),
        product: metadata.product.clone(),
        version: metadata.version.clone(),
        entry_namespace: metadata.entry_namespace.clone(),
        entry_type_name: metadata.entry_type_name.clone(),
        manifest_module_name,
        is_single_file: metadata.is_single_file,
        strong_name: metadata.strong_name.clone(),
        code_base,
    }
}

impl IdentityProvider for ProcessIdentityProvider {
    fn entry_module(&self) -> Option<EntryModuleInfo> {
        let metadata = self.metadata.as_ref()?;
        Some(describe_entry(metadata, self.current_executable_path().as_deref()))
    }

    fn current_executable_path(&self) -> Option<PathBuf> {
        match std::env::current_exe() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!(error = %e, "Current executable path unavailable");
                None
            }
        }
    }

    fn base_directory(&self) -> PathBuf {
        self.current_executable_path()
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_default()
    }

    fn friendly_domain_name(&self) -> String {
        self.current_executable_path()
            .as_deref()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

//! One resolution pass: identity in, `ResolvedPaths` out.
//!
//! Responsibilities:
//! - Derive the application URI (pinned executable, entry module, or process).
//! - Derive the application config URI (override channel or `.config` suffix).
//! - Derive product identity and the user directory suffix.
//! - Place the roaming and local `user.config` files.
//!
//! Does NOT handle:
//! - Caching (see `cache`).
//!
//! Invariants:
//! - A pinned executable never yields user paths.
//! - A remote (HTTP) config URI never yields user paths.
//! - A suffix with any missing part yields no user paths at all.

use std::path::{Component, Path, PathBuf};

use url::Url;

use crate::constants::{CONFIG_EXTENSION, SINGLE_FILE_MODULE_EXTENSION, USER_CONFIG_FILENAME};
use crate::error::PathsError;
use crate::folders::{SpecialFolderProvider, is_rooted, usable_root};
use crate::hashing::{HashCandidates, IdentityHasher, compute_suffix};
use crate::identity::{EntryModuleInfo, IdentityProvider};
use crate::paths::{ResolvedPaths, combine};
use crate::sanitize::sanitize;

use super::names::ProductIdentity;

/// The collaborators one resolution pass reads from.
pub(crate) struct Collaborators<'a> {
    pub(crate) identity: &'a dyn IdentityProvider,
    pub(crate) folders: &'a dyn SpecialFolderProvider,
    pub(crate) hasher: &'a dyn IdentityHasher,
}

/// Validates an explicitly pinned executable and returns its absolute path.
///
/// # Errors
/// Returns [`PathsError::InvalidArgument`] if no file exists at `exe`.
pub(crate) fn pinned_application_uri(exe: &Path) -> Result<String, PathsError> {
    let absolute = std::path::absolute(exe).map_err(|_| PathsError::InvalidArgument {
        path: exe.to_path_buf(),
    })?;

    if !absolute.is_file() {
        return Err(PathsError::InvalidArgument { path: absolute });
    }

    Ok(absolute.to_string_lossy().into_owned())
}

/// Runs steps 1-4 of a resolution. `pinned` is the already validated
/// application URI of an explicitly named executable.
pub(crate) fn build_paths(
    collaborators: &Collaborators<'_>,
    pinned: Option<String>,
    include_user_config: bool,
) -> ResolvedPaths {
    let identity = collaborators.identity;
    let is_pinned = pinned.is_some();
    let base_directory = identity.base_directory();

    let mut paths = ResolvedPaths {
        includes_user_config: include_user_config && !is_pinned,
        ..Default::default()
    };

    let entry = match pinned {
        Some(uri) => {
            paths.application_uri = uri;
            None
        }
        None => {
            let entry = identity.entry_module();
            paths.has_entry_identity = entry.is_some();
            paths.application_uri = match &entry {
                Some(info) if !info.is_single_file && !info.manifest_module_name.is_empty() => {
                    base_directory
                        .join(&info.manifest_module_name)
                        .to_string_lossy()
                        .into_owned()
                }
                _ => executable_uri(identity),
            };
            entry
        }
    };
    let is_single_file = entry.as_ref().is_some_and(|e| e.is_single_file);

    tracing::debug!(
        application_uri = %paths.application_uri,
        pinned = is_pinned,
        single_file = is_single_file,
        "Resolved application URI"
    );

    paths.application_config_uri = application_config_uri(
        identity.config_file_override(),
        &base_directory,
        &paths.application_uri,
        is_single_file,
    );

    if is_pinned || !include_user_config {
        return paths;
    }

    let is_remote = paths
        .application_config_uri
        .as_deref()
        .is_some_and(is_remote_uri);

    let names = ProductIdentity::resolve(entry.as_ref(), is_remote);
    paths.company_name = names.company.clone();
    paths.product_name = names.product.clone();
    paths.product_version = names.version.clone();

    if is_remote {
        tracing::debug!("Remote application config, skipping user config paths");
        return paths;
    }

    let dir_suffix = directory_suffix(collaborators, &names, entry.as_ref(), &paths.application_uri);

    if let Some(root) = usable_root(collaborators.folders.roaming_root()) {
        paths.roaming_config_directory = combine(Some(root), dir_suffix.as_ref());
        paths.roaming_config_file =
            combine(paths.roaming_config_directory.as_ref(), Some(USER_CONFIG_FILENAME));
    } else {
        tracing::warn!("No usable roaming data folder, roaming user config unavailable");
    }

    if let Some(root) = usable_root(collaborators.folders.local_root()) {
        paths.local_config_directory = combine(Some(root), dir_suffix.as_ref());
        paths.local_config_file =
            combine(paths.local_config_directory.as_ref(), Some(USER_CONFIG_FILENAME));
    } else {
        tracing::warn!("No usable local data folder, local user config unavailable");
    }

    paths
}

fn executable_uri(identity: &dyn IdentityProvider) -> String {
    identity
        .current_executable_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Step 2: the application's own config file.
pub(crate) fn application_config_uri(
    override_value: Option<String>,
    base_directory: &Path,
    application_uri: &str,
    is_single_file: bool,
) -> Option<String> {
    if let Some(value) = override_value {
        return Some(override_config_uri(&value, base_directory));
    }

    if application_uri.is_empty() {
        return None;
    }

    let target = if is_single_file {
        retarget_single_file(application_uri, cfg!(windows))
    } else {
        application_uri.to_string()
    };

    Some(format!("{target}{CONFIG_EXTENSION}"))
}

/// Interprets the override channel value.
///
/// An absolute `file:` URI becomes its local path; any other absolute URI is
/// used verbatim. Anything else is a filesystem path, rooted at
/// `base_directory` when relative and then normalized to a full path.
fn override_config_uri(value: &str, base_directory: &Path) -> String {
    match parse_absolute_uri(value) {
        Some(url) if url.scheme() == "file" => match url.to_file_path() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Using file URI config override");
                path.to_string_lossy().into_owned()
            }
            Err(()) => value.to_string(),
        },
        Some(_) => {
            tracing::debug!(uri = value, "Using URI config override");
            value.to_string()
        }
        None => {
            let path = Path::new(value);
            let joined = if is_rooted(path) {
                path.to_path_buf()
            } else {
                base_directory.join(path)
            };
            let resolved = full_path(&joined);
            tracing::debug!(path = %resolved.display(), "Using path config override");
            resolved.to_string_lossy().into_owned()
        }
    }
}

/// Makes `path` absolute and folds `.` and `..` components lexically.
/// Symlinks are not followed and the file need not exist.
pub(crate) fn full_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut full = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match full.components().next_back() {
                Some(Component::Normal(_)) => {
                    full.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => full.push(component.as_os_str()),
            },
            _ => full.push(component.as_os_str()),
        }
    }
    full
}

/// Parses `value` as an absolute URI. Windows drive paths (`C:\app.config`)
/// are paths, not URIs with a one-letter scheme.
pub(crate) fn parse_absolute_uri(value: &str) -> Option<Url> {
    Url::parse(value).ok().filter(|url| url.scheme().len() > 1)
}

/// Single-file bundles have no module file of their own; the config sits
/// beside a `.dll`-named sibling. Windows swaps the extension, elsewhere it
/// is appended.
pub(crate) fn retarget_single_file(application_uri: &str, swap_extension: bool) -> String {
    if swap_extension {
        PathBuf::from(application_uri)
            .with_extension(SINGLE_FILE_MODULE_EXTENSION)
            .to_string_lossy()
            .into_owned()
    } else {
        format!("{application_uri}.{SINGLE_FILE_MODULE_EXTENSION}")
    }
}

/// True for `http://` and `https://` URIs (ASCII case-insensitive).
pub(crate) fn is_remote_uri(uri: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        uri.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// `<company>/<name-prefix><hash-suffix>/<version>`, or `None` if any part
/// cannot be derived.
fn directory_suffix(
    collaborators: &Collaborators<'_>,
    names: &ProductIdentity,
    entry: Option<&EntryModuleInfo>,
    application_uri: &str,
) -> Option<PathBuf> {
    let part1 = Some(sanitize(&names.company, true)).filter(|s| !s.is_empty());

    let mut name_prefix = sanitize(&collaborators.identity.friendly_domain_name(), true);
    if name_prefix.is_empty() {
        name_prefix = sanitize(&names.product, true);
    }

    // A single-file module has no location of its own to sign or load from.
    let module = entry.filter(|e| !e.is_single_file);
    let candidates = HashCandidates {
        strong_name: module.and_then(|e| e.strong_name.as_ref()),
        code_base: module.and_then(|e| e.code_base.as_deref()),
        executable_path: Some(application_uri).filter(|uri| !uri.is_empty()),
    };
    let hash_suffix = compute_suffix(collaborators.hasher, &candidates);

    let part2 = match hash_suffix {
        Some(hash) if !name_prefix.is_empty() => Some(format!("{name_prefix}{hash}")),
        _ => None,
    };
    let part3 = Some(sanitize(&names.version, false)).filter(|s| !s.is_empty());

    if part1.is_none() || part2.is_none() {
        tracing::debug!(
            has_company = part1.is_some(),
            has_name_and_hash = part2.is_some(),
            "Directory suffix incomplete, no user config paths"
        );
    }

    combine(combine(part1, part2), part3)
}

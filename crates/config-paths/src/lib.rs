//! Config file location resolution.
//!
//! This crate works out where an application's configuration lives: its own
//! `.config` file next to the executable, and per-user `user.config`
//! overrides under the roaming and local data folders. User directories are
//! named after the company, product and version of the entry module, plus a
//! hash of its identity so applications sharing a company name never collide.

pub mod constants;
mod env;
mod error;
pub mod folders;
pub mod hashing;
pub mod identity;
mod paths;
mod resolver;
mod sanitize;

pub use env::{app_config_file_override, env_var_or_none};
pub use error::PathsError;
pub use folders::{PlatformFolders, SpecialFolderProvider};
pub use hashing::{
    HashCandidates, IdentityHasher, IdentityKind, Sha256IdentityHasher, StrongNameIdentity,
    UnsupportedHasher, compute_suffix,
};
pub use identity::{EntryMetadata, EntryModuleInfo, IdentityProvider, ProcessIdentityProvider};
pub use paths::{ResolvedPaths, combine};
pub use resolver::ConfigPathResolver;
pub use sanitize::sanitize;

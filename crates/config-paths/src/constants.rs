//! Centralized constants for config path resolution.
//!
//! File names, suffixes and defaults that show up on disk are kept here so
//! that the layout of a resolved config tree is defined in one place.

// =============================================================================
// File Names & Suffixes
// =============================================================================

/// File name of the per-user override file inside the roaming/local directories.
pub const USER_CONFIG_FILENAME: &str = "user.config";

/// Suffix appended to the application path to form the application config path.
pub const CONFIG_EXTENSION: &str = ".config";

/// Extension used when retargeting a single-file deployment's executable path.
pub const SINGLE_FILE_MODULE_EXTENSION: &str = "dll";

// =============================================================================
// Override Channel
// =============================================================================

/// Environment variable naming an alternate application config location.
pub const APP_CONFIG_FILE_ENV: &str = "APP_CONFIG_FILE";

// =============================================================================
// Identity Defaults
// =============================================================================

/// Version used when no version can be derived for the entry module.
pub const DEFAULT_PRODUCT_VERSION: &str = "1.0.0.0";

/// Maximum length of a sanitized segment when length limiting is requested.
pub const MAX_SEGMENT_LENGTH: usize = 25;

/// Number of digest bytes kept before encoding an identity hash.
pub const IDENTITY_HASH_BYTES: usize = 20;

//! Identity hashing for collision-resistant directory suffixes.
//!
//! Responsibilities:
//! - Define the `IdentityHasher` capability (hash support check + digest).
//! - Provide the default SHA-256 backed hasher and a directory-safe encoding.
//! - Pick the first usable identity tier (strong name, code base URL, path).
//!
//! Does NOT handle:
//! - Deciding whether a suffix is used at all (see `resolver`).
//!
//! Invariants:
//! - Unsupported hashing is a normal `None`, never an error or a panic.
//! - Tiers are tried in the fixed order StrongName, Url, Path.
//! - Only the Url tier is case-normalized before hashing.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::constants::IDENTITY_HASH_BYTES;

const BASE32_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz012345";

/// Produces path-safe digests of identity material.
///
/// Implementations that cannot hash on the current platform report it
/// through [`IdentityHasher::supports_hashing`] instead of failing.
pub trait IdentityHasher: Send + Sync {
    /// Whether hashing is available at all.
    fn supports_hashing(&self) -> bool;

    /// Hashes `bytes` into a printable, path-safe string.
    ///
    /// Returns `None` when the digest cannot be produced.
    fn hash_bytes(&self, bytes: &[u8]) -> Option<String>;
}

/// Default hasher: SHA-256, truncated to 20 bytes, base-32 encoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256IdentityHasher;

impl IdentityHasher for Sha256IdentityHasher {
    fn supports_hashing(&self) -> bool {
        true
    }

    fn hash_bytes(&self, bytes: &[u8]) -> Option<String> {
        let digest = Sha256::digest(bytes);
        Some(encode_dir_name(&digest[..IDENTITY_HASH_BYTES]))
    }
}

/// Hasher for hosts where no digest implementation is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedHasher;

impl IdentityHasher for UnsupportedHasher {
    fn supports_hashing(&self) -> bool {
        false
    }

    fn hash_bytes(&self, _bytes: &[u8]) -> Option<String> {
        None
    }
}

/// Encodes bytes with the lowercase `a-z0-5` base-32 alphabet.
///
/// Every 5 input bytes (zero padded) become 8 output characters. The low 5
/// bits of each byte come first, followed by three characters assembled
/// from the remaining high bits.
pub fn encode_dir_name(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(5) * 8);
    let mut push = |value: u8| out.push(BASE32_ALPHABET[usize::from(value & 0x1F)] as char);

    for chunk in bytes.chunks(5) {
        let mut group = [0u8; 5];
        group[..chunk.len()].copy_from_slice(chunk);
        let [b0, b1, b2, b3, b4] = group;

        for b in group {
            push(b);
        }
        push(((b0 & 0xE0) >> 5) | ((b3 & 0x60) >> 2));
        push(((b1 & 0xE0) >> 5) | ((b4 & 0x60) >> 2));

        let mut tail = b2 >> 5;
        if b3 & 0x80 != 0 {
            tail |= 0x08;
        }
        if b4 & 0x80 != 0 {
            tail |= 0x10;
        }
        push(tail);
    }

    out
}

/// Which identity signal produced a hash suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    StrongName,
    Url,
    Path,
}

impl IdentityKind {
    /// Label embedded in the directory suffix.
    pub fn label(self) -> &'static str {
        match self {
            IdentityKind::StrongName => "StrongName",
            IdentityKind::Url => "Url",
            IdentityKind::Path => "Path",
        }
    }
}

impl fmt::Display for IdentityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A signed module identity: name, version and public key token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrongNameIdentity {
    pub name: String,
    pub version: String,
    pub public_key_token: Vec<u8>,
}

impl StrongNameIdentity {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        public_key_token: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            public_key_token: public_key_token.into(),
        }
    }

    /// An identity without a public key token is not signed.
    pub fn is_signed(&self) -> bool {
        !self.public_key_token.is_empty()
    }

    fn hash_input(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity(self.public_key_token.len() + self.name.len() + self.version.len());
        bytes.extend_from_slice(&self.public_key_token);
        bytes.extend_from_slice(self.name.as_bytes());
        bytes.extend_from_slice(self.version.as_bytes());
        bytes
    }
}

/// Identity signals available for hashing, in no particular state of
/// completeness.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashCandidates<'a> {
    pub strong_name: Option<&'a StrongNameIdentity>,
    pub code_base: Option<&'a str>,
    pub executable_path: Option<&'a str>,
}

type TierInput<'a> = Box<dyn Fn() -> Option<Vec<u8>> + 'a>;

impl<'a> HashCandidates<'a> {
    /// Ordered `(kind, producer)` tiers. A producer yields `None` when its
    /// signal is absent.
    fn tiers(&self) -> [(IdentityKind, TierInput<'a>); 3] {
        let strong_name = self.strong_name;
        let code_base = self.code_base;
        let executable_path = self.executable_path;

        [
            (
                IdentityKind::StrongName,
                Box::new(move || {
                    strong_name
                        .filter(|s| s.is_signed())
                        .map(StrongNameIdentity::hash_input)
                }),
            ),
            (
                IdentityKind::Url,
                Box::new(move || {
                    code_base
                        .filter(|u| !u.is_empty())
                        .map(|u| u.to_lowercase().into_bytes())
                }),
            ),
            (
                IdentityKind::Path,
                Box::new(move || {
                    executable_path
                        .filter(|p| !p.is_empty())
                        .map(|p| p.as_bytes().to_vec())
                }),
            ),
        ]
    }
}

/// Computes `"_" + kind + "_" + hash` from the first tier that is present
/// and hashes successfully.
///
/// Returns `None` when hashing is unsupported or no tier produced a hash.
/// Callers treat that as "no suffix contribution", not as an error.
pub fn compute_suffix(
    hasher: &dyn IdentityHasher,
    candidates: &HashCandidates<'_>,
) -> Option<String> {
    if !hasher.supports_hashing() {
        tracing::debug!("Identity hashing unsupported, no directory suffix hash");
        return None;
    }

    candidates.tiers().into_iter().find_map(|(kind, input)| {
        let hash = hasher.hash_bytes(&input()?).filter(|h| !h.is_empty());
        match hash {
            Some(hash) => {
                tracing::debug!(kind = %kind, "Computed identity hash suffix");
                Some(format!("_{}_{}", kind, hash))
            }
            None => {
                tracing::debug!(kind = %kind, "Identity hash tier failed, trying next");
                None
            }
        }
    })
}

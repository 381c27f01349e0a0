//! Company, product and version derivation for the entry module.
//!
//! Declared attributes win. When any of them is missing (and the config is
//! not remote) product and company are recovered from the entry type's
//! namespace, then from the entry type name. A missing version becomes
//! `1.0.0.0`.

use crate::constants::DEFAULT_PRODUCT_VERSION;
use crate::identity::EntryModuleInfo;

/// The names the user config directory is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ProductIdentity {
    pub(crate) company: String,
    pub(crate) product: String,
    pub(crate) version: String,
}

type Producer<'a> = &'a dyn Fn() -> Option<String>;

/// Evaluates producers in order and returns the first non-empty result.
fn first_non_empty(producers: &[Producer<'_>]) -> String {
    producers
        .iter()
        .find_map(|produce| produce().filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

/// `Contoso.Widgets.App` -> `App`. A trailing dot or no dot yields the whole
/// namespace.
fn last_segment(namespace: &str) -> &str {
    match namespace.rfind('.') {
        Some(i) if i + 1 < namespace.len() => &namespace[i + 1..],
        _ => namespace,
    }
}

/// `Contoso.Widgets.App` -> `Contoso`.
fn first_segment(namespace: &str) -> &str {
    namespace
        .find('.')
        .map_or(namespace, |i| &namespace[..i])
}

fn trimmed(value: Option<&String>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}

impl ProductIdentity {
    pub(crate) fn resolve(entry: Option<&EntryModuleInfo>, is_remote: bool) -> Self {
        let mut identity = Self {
            company: trimmed(entry.and_then(|e| e.company.as_ref())),
            product: trimmed(entry.and_then(|e| e.product.as_ref())),
            version: trimmed(entry.and_then(|e| e.version.as_ref())),
        };

        let incomplete = identity.company.is_empty()
            || identity.product.is_empty()
            || identity.version.is_empty();

        if incomplete && !is_remote {
            let namespace = entry.and_then(|e| e.entry_namespace.as_deref());
            let type_name = entry.and_then(|e| e.entry_type_name.as_deref());

            if identity.product.is_empty() {
                identity.product = first_non_empty(&[
                    &|| namespace.map(|ns| last_segment(ns).trim().to_string()),
                    &|| type_name.map(|name| name.trim().to_string()),
                ]);
            }

            if identity.company.is_empty() {
                let product = identity.product.clone();
                identity.company = first_non_empty(&[
                    &|| namespace.map(|ns| first_segment(ns).trim().to_string()),
                    &|| Some(product.clone()),
                ]);
            }

            tracing::debug!(
                company = %identity.company,
                product = %identity.product,
                "Derived product identity from entry namespace"
            );
        }

        if identity.version.is_empty() {
            identity.version = DEFAULT_PRODUCT_VERSION.to_string();
        }

        identity
    }
}

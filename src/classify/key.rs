//! Object key classification.

use super::Role;
use super::patterns::PRIMARY_KEYS;

/// Whether `key` names a high-salience field. Exact match, ignoring ASCII case.
pub fn is_primary_key(key: &str) -> bool {
    PRIMARY_KEYS
        .iter()
        .any(|primary| primary.eq_ignore_ascii_case(key))
}

/// Classify an object key as [`Role::KeyPrimary`] or [`Role::KeyDefault`].
pub fn classify_key(key: &str) -> Role {
    if is_primary_key(key) {
        Role::KeyPrimary
    } else {
        Role::KeyDefault
    }
}

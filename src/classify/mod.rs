//! Semantic classification of tool-output keys, scalar values and diff lines.
//!
//! Every function here is pure and total: the same input always yields the
//! same [`Role`], and no input (empty, odd, or malformed) fails. The rendering
//! pipeline asks these functions what a piece of data *means* and picks the
//! visual style from the answer.
//!
//! # Module Structure
//!
//! - [`patterns`]: static keyword tables and the matchers compiled from them.
//! - [`key`]: primary vs default object keys.
//! - [`value`]: status semantics of scalars (error / warning / ok / text).
//! - [`diff`]: unified-diff line markers.

pub mod diff;
pub mod key;
pub mod patterns;
pub mod value;


use std::fmt;

use serde::Serialize;

pub use diff::classify_diff_line;
pub use key::{classify_key, is_primary_key};
pub use value::{
    Scalar, classify_json_value, classify_value, is_error_like, is_success_like, is_warning_like,
};

/// Semantic tag attached to a key, a value, or a diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// High-salience object key (`status`, `error`, ...).
    KeyPrimary,
    /// Any other object key.
    KeyDefault,
    /// Value signalling an error.
    ValueStatusError,
    /// Value signalling a warning or incomplete outcome.
    ValueStatusWarning,
    /// Value signalling success.
    ValueStatusOk,
    /// Value with no status meaning.
    ValueText,
    /// Diff line added (`+`).
    DiffAdded,
    /// Diff line removed (`-`).
    DiffRemoved,
    /// Diff file header (`---`/`+++`) or hunk header (`@@`).
    DiffHeader,
    /// Unchanged diff line or unprefixed text.
    DiffContext,
}

/// Which classifier a [`Role`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleCategory {
    Key,
    Value,
    Diff,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 10] = [
        Role::KeyPrimary,
        Role::KeyDefault,
        Role::ValueStatusError,
        Role::ValueStatusWarning,
        Role::ValueStatusOk,
        Role::ValueText,
        Role::DiffAdded,
        Role::DiffRemoved,
        Role::DiffHeader,
        Role::DiffContext,
    ];

    /// Canonical upper-snake tag, e.g. `"VALUE_STATUS_ERROR"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::KeyPrimary => "KEY_PRIMARY",
            Role::KeyDefault => "KEY_DEFAULT",
            Role::ValueStatusError => "VALUE_STATUS_ERROR",
            Role::ValueStatusWarning => "VALUE_STATUS_WARNING",
            Role::ValueStatusOk => "VALUE_STATUS_OK",
            Role::ValueText => "VALUE_TEXT",
            Role::DiffAdded => "DIFF_ADDED",
            Role::DiffRemoved => "DIFF_REMOVED",
            Role::DiffHeader => "DIFF_HEADER",
            Role::DiffContext => "DIFF_CONTEXT",
        }
    }

    pub fn category(self) -> RoleCategory {
        match self {
            Role::KeyPrimary | Role::KeyDefault => RoleCategory::Key,
            Role::ValueStatusError
            | Role::ValueStatusWarning
            | Role::ValueStatusOk
            | Role::ValueText => RoleCategory::Value,
            Role::DiffAdded | Role::DiffRemoved | Role::DiffHeader | Role::DiffContext => {
                RoleCategory::Diff
            }
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

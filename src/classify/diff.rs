//! Unified-diff line classification.

use super::Role;
use super::patterns::{DIFF_FILE_MARKERS, DIFF_HUNK_MARKER};

/// Classify one line of unified-diff text by its leading marker.
///
/// File and hunk headers are checked before the single `+`/`-` markers,
/// since `+++`/`---` also begin with those characters.
pub fn classify_diff_line(line: &str) -> Role {
    if DIFF_FILE_MARKERS.iter().any(|m| line.starts_with(m)) {
        return Role::DiffHeader;
    }
    if line.starts_with(DIFF_HUNK_MARKER) {
        return Role::DiffHeader;
    }
    if line.starts_with('+') {
        Role::DiffAdded
    } else if line.starts_with('-') {
        Role::DiffRemoved
    } else {
        Role::DiffContext
    }
}

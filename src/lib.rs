// Library exports for the renderer binary, the hook crate, and tests.
//
// Layering:
//
//   - `classify`: pure, total classification of keys, values and diff lines.
//                 No I/O and no shared mutable state.
//   - `schema`:  the v1.x renderability gate and typed response view.
//   - `render`:  styled-line model, classified tree/diff renderers, ANSI output.
//   - `config`:  YAML configuration and environment overrides.
//   - `debug`:   file-backed `log` implementation used by both binaries.
//   - `cli`:     argument parsing for the `mcp-render` binary.

/// Application version (root crate version, for use by sub-crates).
/// Sub-crates should receive this via parameter rather than using
/// `env!("CARGO_PKG_VERSION")` which resolves to the sub-crate's version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod classify;
pub mod cli;
pub mod config;
pub mod debug;
pub mod render;
pub mod schema;

pub use classify::{
    Role, RoleCategory, Scalar, classify_diff_line, classify_json_value, classify_key,
    classify_value, is_error_like, is_primary_key, is_success_like, is_warning_like,
};
pub use config::{Config, HookConfig, RenderConfig};
pub use render::{render_json_str, render_response};
pub use schema::{ContentItem, SchemaError, ToolResponse, is_renderable};

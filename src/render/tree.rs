//! Classified tree rendering for structured (JSON) tool data.
//!
//! Walks a `serde_json::Value` and emits one line per scalar, with:
//!
//! - **Tree guides**: `│` columns at each nesting level
//! - **Key emphasis**: every object key styled through [`classify_key`]
//! - **Value status**: every scalar styled through [`classify_json_value`]
//! - **Collapsing**: containers deeper than `max_depth_expanded` shown as `{ N keys }`
//! - **Truncation**: long arrays and long strings are cut with a note
//! - **Embedded diffs**: multi-line strings that look like a diff are expanded
//!   below their key with per-line diff styling

use serde_json::{Map, Value};

use crate::classify::{Role, classify_json_value, classify_key, classify_value};
use crate::config::RenderConfig;

use super::diff::{looks_like_diff, render_diff_lines};
use super::theme::ThemeColors;
use super::types::{StyledLine, StyledSegment, push_line};

/// Generate the tree guide prefix for a given depth, e.g. `"│  │  "` at depth 2.
pub fn tree_guides(depth: usize) -> String {
    "│  ".repeat(depth)
}

/// Generate a collapsed summary for a container node, e.g. `{ 3 keys }`.
pub fn collapsed_summary(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("{{ {} keys }}", map.len()),
        Value::Array(arr) => format!("[ {} items ]", arr.len()),
        _ => String::new(),
    }
}

/// What introduces a child value on its line.
#[derive(Clone, Copy)]
enum Label<'k> {
    Key(&'k str),
    Item,
}

/// Renders a JSON value as a classified tree.
pub struct TreeRenderer<'a> {
    config: &'a RenderConfig,
    theme: &'a ThemeColors,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(config: &'a RenderConfig, theme: &'a ThemeColors) -> Self {
        Self { config, theme }
    }

    /// Render `value` starting at depth 0.
    pub fn render(&self, value: &Value, lines: &mut Vec<StyledLine>) {
        match value {
            Value::Object(map) if !map.is_empty() => self.render_entries(map, 0, lines),
            Value::Array(arr) if !arr.is_empty() => self.render_items(arr, 0, lines),
            Value::String(s) if s.contains('\n') => self.render_multiline(s, 0, lines),
            _ => push_line(lines, vec![self.scalar_segment(value)]),
        }
    }

    fn render_entries(&self, map: &Map<String, Value>, depth: usize, lines: &mut Vec<StyledLine>) {
        let mut keys: Vec<&String> = map.keys().collect();
        if self.config.sort_keys {
            keys.sort();
        }
        for key in keys {
            self.render_child(Label::Key(key), &map[key], depth, lines);
        }
    }

    fn render_items(&self, arr: &[Value], depth: usize, lines: &mut Vec<StyledLine>) {
        let shown = arr.len().min(self.config.max_array_display);
        for item in &arr[..shown] {
            self.render_child(Label::Item, item, depth, lines);
        }
        let hidden = arr.len() - shown;
        if hidden > 0 {
            push_line(
                lines,
                vec![
                    self.theme.guide_segment(&tree_guides(depth)),
                    self.theme.note_segment(&format!("... and {hidden} more items")),
                ],
            );
        }
    }

    /// Label segments for a child line. `inline` is true when the value
    /// follows on the same line.
    fn label_segments(&self, label: Label<'_>, depth: usize, inline: bool) -> Vec<StyledSegment> {
        let mut segments = vec![self.theme.guide_segment(&tree_guides(depth))];
        match label {
            Label::Key(key) => {
                segments.push(self.theme.role_segment(key, classify_key(key)));
                segments.push(self.theme.guide_segment(if inline { ": " } else { ":" }));
            }
            Label::Item => {
                segments.push(self.theme.guide_segment(if inline { "- " } else { "-" }));
            }
        }
        segments
    }

    fn render_child(
        &self,
        label: Label<'_>,
        value: &Value,
        depth: usize,
        lines: &mut Vec<StyledLine>,
    ) {
        let is_container = value.is_object() || value.is_array();
        let is_empty = match value {
            Value::Object(map) => map.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            _ => false,
        };

        if is_container && is_empty {
            let mut segments = self.label_segments(label, depth, true);
            segments.push(self.theme.guide_segment(if value.is_object() { "{}" } else { "[]" }));
            push_line(lines, segments);
            return;
        }

        if is_container && depth + 1 >= self.config.max_depth_expanded {
            let mut segments = self.label_segments(label, depth, true);
            segments.push(self.theme.note_segment(&collapsed_summary(value)));
            push_line(lines, segments);
            return;
        }

        match value {
            Value::Object(map) => {
                push_line(lines, self.label_segments(label, depth, false));
                self.render_entries(map, depth + 1, lines);
            }
            Value::Array(arr) => {
                push_line(lines, self.label_segments(label, depth, false));
                self.render_items(arr, depth + 1, lines);
            }
            Value::String(s) if s.contains('\n') => {
                push_line(lines, self.label_segments(label, depth, false));
                self.render_multiline(s, depth + 1, lines);
            }
            scalar => {
                let mut segments = self.label_segments(label, depth, true);
                segments.push(self.scalar_segment(scalar));
                push_line(lines, segments);
            }
        }
    }

    /// A multi-line string: diff styling when it looks like a diff, otherwise
    /// every line takes the status of the whole string.
    fn render_multiline(&self, text: &str, depth: usize, lines: &mut Vec<StyledLine>) {
        let prefix = tree_guides(depth);
        if looks_like_diff(text) {
            render_diff_lines(text, &prefix, lines, self.theme);
            return;
        }
        let role = classify_value(text);
        for line in text.lines() {
            push_line(
                lines,
                vec![
                    self.theme.guide_segment(&prefix),
                    self.theme.role_segment(self.truncate(line), role),
                ],
            );
        }
    }

    fn scalar_segment(&self, value: &Value) -> StyledSegment {
        let role = classify_json_value(value).unwrap_or(Role::ValueText);
        match value {
            Value::String(s) => self.theme.role_segment(self.truncate(s), role),
            Value::Null => self.theme.note_segment("null"),
            Value::Object(_) | Value::Array(_) => {
                self.theme.note_segment(&collapsed_summary(value))
            }
            other => self.theme.role_segment(other.to_string(), role),
        }
    }

    fn truncate(&self, text: &str) -> String {
        let max = self.config.max_string_length;
        if text.chars().count() <= max {
            return text.to_string();
        }
        let mut cut: String = text.chars().take(max).collect();
        cut.push('…');
        cut
    }
}

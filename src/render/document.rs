//! Whole-response rendering: metadata header, content items, fallbacks.

use serde_json::Value;

use crate::classify::{Role, classify_json_value, classify_key};
use crate::config::RenderConfig;
use crate::schema::{ContentItem, ToolResponse};

use super::diff::{looks_like_diff, render_diff_block, render_diff_lines};
use super::theme::ThemeColors;
use super::tree::TreeRenderer;
use super::types::{StyledLine, StyledSegment, push_line};

/// Metadata keys consumed by the header itself.
const HEADER_KEYS: &[&str] = &["tool", "tool_name", "status"];

/// Renders a [`ToolResponse`] into styled lines.
pub struct DocumentRenderer<'a> {
    config: &'a RenderConfig,
    theme: &'a ThemeColors,
}

impl<'a> DocumentRenderer<'a> {
    pub fn new(config: &'a RenderConfig, theme: &'a ThemeColors) -> Self {
        Self { config, theme }
    }

    pub fn render(&self, response: &ToolResponse) -> Vec<StyledLine> {
        let mut lines = Vec::new();
        self.render_header(response, &mut lines);

        match &response.content {
            Some(items) => {
                for item in items {
                    if !lines.is_empty() {
                        lines.push(StyledLine::default());
                    }
                    self.render_item(item, &mut lines);
                }
            }
            None => self.render_fallback(response, &mut lines),
        }

        lines
    }

    // -- Header --

    fn render_header(&self, response: &ToolResponse, lines: &mut Vec<StyledLine>) {
        let mut title = Vec::new();
        if let Some(tool) = response.tool_name() {
            title.push(self.theme.guide_segment("▶ "));
            title.push(self.theme.title_segment(tool));
        }
        if let Some(status) = response.metadata.get("status")
            && let Some(role) = classify_json_value(status)
        {
            if !title.is_empty() {
                title.push(StyledSegment::plain(" "));
            }
            title.push(self.theme.role_segment(format!("[{}]", scalar_text(status)), role));
        }
        if !title.is_empty() {
            push_line(lines, title);
        }

        let mut summary: Vec<StyledSegment> = Vec::new();
        for (key, value) in &response.metadata {
            if HEADER_KEYS.contains(&key.as_str()) {
                continue;
            }
            let Some(role) = classify_json_value(value) else {
                continue;
            };
            if !summary.is_empty() {
                summary.push(self.theme.guide_segment(" · "));
            }
            summary.push(self.theme.role_segment(key.as_str(), classify_key(key)));
            summary.push(self.theme.guide_segment(": "));
            summary.push(self.theme.role_segment(scalar_text(value), role));
        }
        if !summary.is_empty() {
            push_line(lines, summary);
        }
    }

    // -- Content --

    fn render_item(&self, item: &ContentItem, lines: &mut Vec<StyledLine>) {
        match item {
            ContentItem::Text { text } => self.render_text(text, lines),
            ContentItem::Data { data, title } => {
                if let Some(title) = title {
                    push_line(lines, vec![self.theme.title_segment(title)]);
                }
                TreeRenderer::new(self.config, self.theme).render(data, lines);
            }
            ContentItem::Diff { diff, path } => {
                render_diff_block(diff, path.as_deref(), lines, self.theme);
            }
            ContentItem::Error { message, code } => {
                let mut segments = vec![
                    self.theme.role_segment("✗ ", Role::ValueStatusError),
                    self.theme.role_segment(message.as_str(), Role::ValueStatusError),
                ];
                if let Some(code) = code {
                    segments.push(self.theme.note_segment(&format!(" [{}]", scalar_text(code))));
                }
                push_line(lines, segments);
            }
            ContentItem::Code { code, language } => {
                if let Some(language) = language {
                    push_line(lines, vec![self.theme.note_segment(language)]);
                }
                for line in code.lines() {
                    push_line(
                        lines,
                        vec![self.theme.guide_segment("│ "), StyledSegment::plain(line)],
                    );
                }
            }
            ContentItem::Other(value) => {
                TreeRenderer::new(self.config, self.theme).render(value, lines);
            }
        }
    }

    /// Plain text, switching to diff styling when the text is a diff.
    fn render_text(&self, text: &str, lines: &mut Vec<StyledLine>) {
        if looks_like_diff(text) {
            render_diff_lines(text, "", lines, self.theme);
        } else {
            for line in text.lines() {
                push_line(lines, vec![StyledSegment::plain(line)]);
            }
        }
    }

    /// No `content` array: prefer `formatted`, then `raw_text`.
    fn render_fallback(&self, response: &ToolResponse, lines: &mut Vec<StyledLine>) {
        let fallback = [&response.formatted, &response.raw_text]
            .into_iter()
            .flatten()
            .find(|v| v.is_string())
            .or_else(|| [&response.formatted, &response.raw_text].into_iter().flatten().next());

        match fallback {
            Some(Value::String(text)) => self.render_text(text, lines),
            Some(Value::Null) | None => {}
            Some(other) => TreeRenderer::new(self.config, self.theme).render(other, lines),
        }
    }
}

/// Display text for a scalar (strings unquoted).
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

//! Diff block rendering and detection of diff payloads inside text.

use crate::classify::{Role, classify_diff_line};

use super::theme::ThemeColors;
use super::types::{StyledLine, StyledSegment, push_line};

/// Whether `text` looks like a unified diff worth colouring line by line.
///
/// Needs at least two lines and either a hunk header or a `---` line directly
/// followed by a `+++` line. A lone `-` or `+` bullet list does not count.
pub fn looks_like_diff(text: &str) -> bool {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < 2 {
        return false;
    }
    let has_hunk = lines.iter().any(|l| l.starts_with("@@"));
    let has_file_pair = lines
        .windows(2)
        .any(|w| w[0].starts_with("---") && w[1].starts_with("+++"));
    has_hunk || has_file_pair
}

/// Append every line of `diff`, styled by its diff role, behind `prefix`.
pub fn render_diff_lines(
    diff: &str,
    prefix: &str,
    lines: &mut Vec<StyledLine>,
    theme: &ThemeColors,
) {
    for line in diff.lines() {
        let role = classify_diff_line(line);
        let mut segments: Vec<StyledSegment> = Vec::with_capacity(2);
        if !prefix.is_empty() {
            segments.push(theme.guide_segment(prefix));
        }
        segments.push(theme.role_segment(line, role));
        push_line(lines, segments);
    }
}

/// Render a diff content item: optional path title, then the styled lines.
pub fn render_diff_block(
    diff: &str,
    path: Option<&str>,
    lines: &mut Vec<StyledLine>,
    theme: &ThemeColors,
) {
    if let Some(path) = path {
        push_line(
            lines,
            vec![
                theme.role_segment("diff ", Role::DiffHeader),
                theme.title_segment(path),
            ],
        );
    }
    render_diff_lines(diff, "", lines, theme);
}

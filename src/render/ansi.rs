//! Serialize styled lines to terminal text with SGR escape sequences.
//!
//! Colours are written as 24-bit true colour (`38;2;R;G;B` / `48;2;R;G;B`).
//! Every styled segment is closed with a full reset, so segments never leak
//! attributes into each other or into whatever the terminal prints next.

use std::fmt::Write as _;

use super::types::{StyledLine, StyledSegment};

const RESET: &str = "\x1b[0m";

/// SGR parameters for a segment, e.g. `"1;38;2;243;139;168"`.
fn sgr_params(segment: &StyledSegment) -> String {
    let mut params: Vec<String> = Vec::new();
    if segment.bold {
        params.push("1".into());
    }
    if segment.dim {
        params.push("2".into());
    }
    if segment.italic {
        params.push("3".into());
    }
    if let Some([r, g, b]) = segment.fg {
        params.push(format!("38;2;{r};{g};{b}"));
    }
    if let Some([r, g, b]) = segment.bg {
        params.push(format!("48;2;{r};{g};{b}"));
    }
    params.join(";")
}

/// Append one segment to `out`.
fn write_segment(out: &mut String, segment: &StyledSegment, color: bool) {
    if segment.text.is_empty() {
        return;
    }
    if color && segment.has_style() {
        let _ = write!(out, "\x1b[{}m{}{RESET}", sgr_params(segment), segment.text);
    } else {
        out.push_str(&segment.text);
    }
}

/// Render a single line without a trailing newline.
pub fn line_to_ansi(line: &StyledLine, color: bool) -> String {
    let mut out = String::new();
    for segment in &line.segments {
        write_segment(&mut out, segment, color);
    }
    out
}

/// Render all lines, each terminated by `\n`.
pub fn to_ansi(lines: &[StyledLine], color: bool) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line_to_ansi(line, color));
        out.push('\n');
    }
    out
}

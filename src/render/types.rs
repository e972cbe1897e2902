//! Styled text model shared by the renderers.

/// A segment of styled text within a line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledSegment {
    /// The text content.
    pub text: String,
    /// Foreground color as [r, g, b].
    pub fg: Option<[u8; 3]>,
    /// Background color as [r, g, b].
    pub bg: Option<[u8; 3]>,
    pub bold: bool,
    pub italic: bool,
    pub dim: bool,
}

impl StyledSegment {
    /// Creates an unstyled segment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Whether any SGR attribute is set.
    pub fn has_style(&self) -> bool {
        self.fg.is_some() || self.bg.is_some() || self.bold || self.italic || self.dim
    }
}

/// A single line of styled output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    /// The styled segments making up this line.
    pub segments: Vec<StyledSegment>,
}

impl StyledLine {
    /// Creates a new styled line from segments.
    pub fn new(segments: Vec<StyledSegment>) -> Self {
        Self { segments }
    }

    /// Creates a plain unstyled line from text.
    pub fn plain(text: &str) -> Self {
        Self {
            segments: vec![StyledSegment::plain(text)],
        }
    }

    /// Text of the line with all styling dropped.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Append a line built from `segments`.
pub fn push_line(lines: &mut Vec<StyledLine>, segments: Vec<StyledSegment>) {
    lines.push(StyledLine::new(segments));
}

/// Join the plain text of every line with `\n`.
pub fn plain_text(lines: &[StyledLine]) -> String {
    lines
        .iter()
        .map(StyledLine::text)
        .collect::<Vec<_>>()
        .join("\n")
}

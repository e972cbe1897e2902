//! Colour palette and the mapping from [`Role`] to segment style.

use crate::classify::Role;

use super::types::StyledSegment;

/// Color palette used for rendered output.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Default foreground color [r, g, b].
    pub fg: [u8; 3],
    /// Default background color [r, g, b].
    pub bg: [u8; 3],
    /// The 16 ANSI colors [r, g, b] (indices 0–15).
    pub palette: [[u8; 3]; 16],
}

impl Default for ThemeColors {
    /// Catppuccin Mocha-inspired palette.
    fn default() -> Self {
        Self {
            fg: [205, 214, 244],
            bg: [30, 30, 46],
            palette: [
                [69, 71, 90],    // 0  Black (Surface0)
                [243, 139, 168], // 1  Red
                [166, 227, 161], // 2  Green
                [249, 226, 175], // 3  Yellow (warm gold)
                [137, 180, 250], // 4  Blue
                [203, 166, 247], // 5  Magenta (mauve)
                [148, 226, 213], // 6  Cyan (teal)
                [186, 194, 222], // 7  White (Subtext0)
                [108, 112, 134], // 8  Bright black (Overlay0)
                [235, 160, 172], // 9  Bright red (maroon)
                [166, 227, 161], // 10 Bright green
                [249, 226, 175], // 11 Bright yellow
                [116, 199, 236], // 12 Bright blue (sapphire)
                [245, 194, 231], // 13 Bright magenta (pink)
                [137, 220, 235], // 14 Bright cyan (sky)
                [205, 214, 244], // 15 Bright white (Text)
            ],
        }
    }
}

impl ThemeColors {
    /// Grey used for tree guides, gutters and secondary text.
    pub fn dim_color(&self) -> [u8; 3] {
        self.palette[8]
    }

    /// Build a segment for `text` styled according to `role`.
    pub fn role_segment(&self, text: impl Into<String>, role: Role) -> StyledSegment {
        let text = text.into();
        match role {
            Role::KeyPrimary => StyledSegment {
                text,
                fg: Some(self.palette[6]),
                bold: true,
                ..Default::default()
            },
            Role::KeyDefault => StyledSegment {
                text,
                fg: Some(self.palette[4]),
                ..Default::default()
            },
            Role::ValueStatusError => StyledSegment {
                text,
                fg: Some(self.palette[9]),
                bold: true,
                ..Default::default()
            },
            Role::ValueStatusWarning => StyledSegment {
                text,
                fg: Some(self.palette[3]),
                ..Default::default()
            },
            Role::ValueStatusOk | Role::DiffAdded => StyledSegment {
                text,
                fg: Some(self.palette[2]),
                ..Default::default()
            },
            Role::ValueText => StyledSegment::plain(text),
            Role::DiffRemoved => StyledSegment {
                text,
                fg: Some(self.palette[1]),
                ..Default::default()
            },
            Role::DiffHeader => StyledSegment {
                text,
                fg: Some(self.palette[6]),
                bold: true,
                ..Default::default()
            },
            Role::DiffContext => StyledSegment {
                text,
                dim: true,
                ..Default::default()
            },
        }
    }

    /// Tree guide / gutter segment (dim grey).
    pub fn guide_segment(&self, text: &str) -> StyledSegment {
        StyledSegment {
            text: text.to_string(),
            fg: Some(self.dim_color()),
            ..Default::default()
        }
    }

    /// Secondary annotation (dim grey italic).
    pub fn note_segment(&self, text: &str) -> StyledSegment {
        StyledSegment {
            text: text.to_string(),
            fg: Some(self.dim_color()),
            italic: true,
            ..Default::default()
        }
    }

    /// Title text (bright white bold).
    pub fn title_segment(&self, text: &str) -> StyledSegment {
        StyledSegment {
            text: text.to_string(),
            fg: Some(self.palette[15]),
            bold: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_style() {
        let theme = ThemeColors::default();
        for role in Role::ALL {
            let seg = theme.role_segment("x", role);
            assert_eq!(seg.text, "x");
            assert_eq!(seg.has_style(), role != Role::ValueText, "{role}");
        }
    }

    #[test]
    fn test_status_colors_are_distinct() {
        let theme = ThemeColors::default();
        let error = theme.role_segment("", Role::ValueStatusError).fg;
        let warning = theme.role_segment("", Role::ValueStatusWarning).fg;
        let ok = theme.role_segment("", Role::ValueStatusOk).fg;
        assert_ne!(error, warning);
        assert_ne!(warning, ok);
        assert_ne!(error, ok);
    }

    #[test]
    fn test_primary_keys_are_bold() {
        let theme = ThemeColors::default();
        assert!(theme.role_segment("status", Role::KeyPrimary).bold);
        assert!(!theme.role_segment("name", Role::KeyDefault).bold);
    }
}

//! Rendering pipeline: classified tool responses to terminal text.
//!
//! The pipeline is organised in three layers:
//!
//! ## Styled model
//! - [`types`]: `StyledSegment` / `StyledLine` and line accumulation helpers.
//! - [`theme`]: colour palette and the `Role` → style mapping.
//! - [`ansi`]: serialisation of styled lines to SGR escape sequences.
//!
//! ## Renderers
//! - [`tree`]: JSON data as a classified tree.
//! - [`diff`]: diff blocks and diff detection inside text.
//! - [`document`]: header, content items and fallbacks for a whole response.
//!
//! ## Entry points
//! - [`render_response`]: typed response to text.
//! - [`render_json_str`]: raw JSON text through the schema gate to text.

pub mod ansi;
pub mod diff;
pub mod document;
pub mod theme;
pub mod tree;
pub mod types;


use std::io::{Read, Write};

use crate::config::RenderConfig;
use crate::schema::{SchemaError, ToolResponse};

pub use document::DocumentRenderer;
pub use theme::ThemeColors;
pub use types::{StyledLine, StyledSegment};

/// Errors that can occur while rendering from a stream.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The input was not a renderable tool response.
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Render a response to styled lines with the default theme.
pub fn render_lines(response: &ToolResponse, config: &RenderConfig) -> Vec<StyledLine> {
    let theme = ThemeColors::default();
    DocumentRenderer::new(config, &theme).render(response)
}

/// Render a response to terminal text.
pub fn render_response(response: &ToolResponse, config: &RenderConfig) -> String {
    ansi::to_ansi(&render_lines(response, config), config.color)
}

/// Parse, gate and render JSON text.
pub fn render_json_str(text: &str, config: &RenderConfig) -> Result<String, SchemaError> {
    let response = ToolResponse::from_json_str(text)?;
    Ok(render_response(&response, config))
}

/// Read a response from `input` and write the rendered text to `output`.
pub fn render_stream<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    config: &RenderConfig,
) -> Result<usize, RenderError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let rendered = render_json_str(&text, config)?;
    output.write_all(rendered.as_bytes())?;
    output.flush()?;
    log::debug!("Rendered {} bytes of input into {} chars", text.len(), rendered.len());
    Ok(rendered.len())
}

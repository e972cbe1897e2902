//! PostToolUse hook that renders MCP tool responses for the terminal.
//!
//! Reads a hook envelope (`tool_name`, `tool_response`) from stdin, checks the
//! response against the v1.x schema gate, hands it to a [`Renderer`] and
//! writes a single JSON line to stdout. Anything that goes wrong results in
//! `{}`, which leaves the original tool output untouched.
//!
//! # Module layout
//!
//! - [`envelope`]: hook input and output wire types
//! - [`renderer`]: the `Renderer` trait, external-process and in-process renderers

pub mod envelope;
pub mod renderer;

use serde_json::Value;

use mcp_render::schema::is_renderable;

pub use envelope::{HookInput, HookResponse};
pub use renderer::{ExternalRenderer, InProcessRenderer, Renderer, RendererError};

/// Reasons the hook passes the original output through.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("invalid hook input: {0}")]
    InvalidInput(#[from] serde_json::Error),

    #[error("{tool_name}: tool_response is not JSON, passing through")]
    NotJson { tool_name: String },

    #[error("{tool_name}: tool_response has unexpected type {kind}")]
    UnexpectedType {
        tool_name: String,
        kind: &'static str,
    },

    #[error("{tool_name}: response does not match schema v1.x")]
    NotRenderable { tool_name: String },

    #[error("{tool_name}: rendering failed, using original output")]
    Render {
        tool_name: String,
        #[source]
        source: RendererError,
    },
}

/// Render the tool response in `input`, returning the rendered text.
pub fn process(input: &str, renderer: &dyn Renderer) -> Result<String, HookError> {
    let hook_input = HookInput::from_json_str(input)?;
    let tool_name = hook_input.tool_name().into_owned();

    let (data, json) = response_payload(&tool_name, hook_input.tool_response)?;
    if !is_renderable(&data) {
        return Err(HookError::NotRenderable { tool_name });
    }

    let rendered = renderer
        .render(&json)
        .map_err(|source| HookError::Render {
            tool_name: tool_name.clone(),
            source,
        })?;

    log::info!(
        "{tool_name}: successfully rendered {} chars",
        rendered.chars().count()
    );
    Ok(rendered)
}

/// Run the hook on `input` and return the JSON line to print. Never fails.
pub fn run(input: &str, renderer: &dyn Renderer) -> String {
    match process(input, renderer) {
        Ok(rendered) => HookResponse::rendered(rendered).to_json_line(),
        Err(e) => {
            log_failure(&e);
            HookResponse::passthrough().to_json_line()
        }
    }
}

/// Parsed tool response plus the JSON text to send to the renderer.
/// String responses are forwarded verbatim.
fn response_payload(
    tool_name: &str,
    tool_response: Option<Value>,
) -> Result<(Value, String), HookError> {
    match tool_response {
        Some(Value::String(text)) => match serde_json::from_str(&text) {
            Ok(data) => Ok((data, text)),
            Err(_) => Err(HookError::NotJson {
                tool_name: tool_name.to_string(),
            }),
        },
        Some(data @ Value::Object(_)) => {
            let json = serde_json::to_string(&data)?;
            Ok((data, json))
        }
        other => Err(HookError::UnexpectedType {
            tool_name: tool_name.to_string(),
            kind: envelope::json_type_name(other.as_ref()),
        }),
    }
}

fn log_failure(error: &HookError) {
    match error {
        HookError::NotRenderable { .. } => log::debug!("{error}"),
        HookError::Render { source, .. } => {
            log::warn!("{source}");
            log::warn!("{error}");
        }
        HookError::InvalidInput(_) => log::warn!("{error}"),
        HookError::NotJson { .. } | HookError::UnexpectedType { .. } => log::info!("{error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_payload_is_forwarded_verbatim() {
        let text = r#"{ "version": "1.3",  "metadata": {} }"#.to_string();
        let (data, json) = response_payload("t", Some(Value::String(text.clone()))).unwrap();
        assert_eq!(json, text);
        assert_eq!(data, json!({"version": "1.3", "metadata": {}}));
    }

    #[test]
    fn test_object_payload_is_serialized() {
        let (data, json) =
            response_payload("t", Some(json!({"version": "1.3", "metadata": {"a": 1}}))).unwrap();
        assert_eq!(json, r#"{"version":"1.3","metadata":{"a":1}}"#);
        assert_eq!(data["metadata"]["a"], 1);
    }

    #[test]
    fn test_payload_errors() {
        assert!(matches!(
            response_payload("t", Some(json!("not json"))),
            Err(HookError::NotJson { .. })
        ));
        assert!(matches!(
            response_payload("t", Some(json!([1]))),
            Err(HookError::UnexpectedType { kind: "array", .. })
        ));
        assert!(matches!(
            response_payload("t", None),
            Err(HookError::UnexpectedType { kind: "missing", .. })
        ));
    }

    #[test]
    fn test_error_messages_name_the_tool() {
        let err = HookError::NotJson {
            tool_name: "mcp__x__y".into(),
        };
        assert_eq!(
            err.to_string(),
            "mcp__x__y: tool_response is not JSON, passing through"
        );
    }
}

//! Hook wire types: the PostToolUse input envelope and the JSON line written
//! back to the caller.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event name echoed back in every rendered response.
pub const HOOK_EVENT_NAME: &str = "PostToolUse";

/// Tool name used in log lines when the envelope has none.
pub const UNKNOWN_TOOL: &str = "unknown";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The envelope read from stdin. Unknown fields are ignored.
///
/// `tool_name` is only used for log lines, so any JSON type is accepted.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub tool_name: Option<Value>,
    #[serde(default)]
    pub tool_response: Option<Value>,
}

impl HookInput {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn tool_name(&self) -> Cow<'_, str> {
        match &self.tool_name {
            Some(Value::String(name)) => Cow::Borrowed(name),
            None | Some(Value::Null) => Cow::Borrowed(UNKNOWN_TOOL),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// JSON type name for log messages.
pub fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "missing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// The JSON object written to stdout. Serializes to `{}` when there is
/// nothing to replace.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_specific_output: Option<HookSpecificOutput>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookSpecificOutput {
    pub hook_event_name: &'static str,
    #[serde(rename = "updatedMCPToolOutput")]
    pub updated_mcp_tool_output: String,
}

impl HookResponse {
    /// Leave the tool output unchanged.
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Replace the tool output with `rendered`.
    pub fn rendered(rendered: String) -> Self {
        Self {
            hook_specific_output: Some(HookSpecificOutput {
                hook_event_name: HOOK_EVENT_NAME,
                updated_mcp_tool_output: rendered,
            }),
        }
    }

    /// Serialize to a single JSON line, falling back to `{}`.
    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("Failed to serialize hook response: {e}");
            "{}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_ignores_unknown_fields() {
        let input = HookInput::from_json_str(
            r#"{"session_id":"s1","tool_name":"mcp__db__query","tool_response":"{}","cwd":"/"}"#,
        )
        .unwrap();
        assert_eq!(input.tool_name(), "mcp__db__query");
        assert_eq!(input.tool_response, Some(json!("{}")));
    }

    #[test]
    fn test_input_missing_fields() {
        let input = HookInput::from_json_str("{}").unwrap();
        assert_eq!(input.tool_name(), UNKNOWN_TOOL);
        assert!(input.tool_response.is_none());
    }

    #[test]
    fn test_input_non_string_tool_name() {
        let input =
            HookInput::from_json_str(r#"{"tool_name": 42, "tool_response": {"a": 1}}"#).unwrap();
        assert_eq!(input.tool_name(), "42");
        assert!(input.tool_response.is_some());
        let input = HookInput::from_json_str(r#"{"tool_name": null}"#).unwrap();
        assert_eq!(input.tool_name(), UNKNOWN_TOOL);
    }

    #[test]
    fn test_input_must_be_object() {
        assert!(HookInput::from_json_str("[1, 2]").is_err());
        assert!(HookInput::from_json_str("").is_err());
    }

    #[test]
    fn test_passthrough_is_empty_object() {
        assert_eq!(HookResponse::passthrough().to_json_line(), "{}");
    }

    #[test]
    fn test_rendered_shape() {
        let line = HookResponse::rendered("\u{1b}[1mhi\u{1b}[0m\n".to_string()).to_json_line();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            value,
            json!({
                "hookSpecificOutput": {
                    "hookEventName": "PostToolUse",
                    "updatedMCPToolOutput": "\u{1b}[1mhi\u{1b}[0m\n"
                }
            })
        );
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_json_type_name() {
        assert_eq!(json_type_name(None), "missing");
        assert_eq!(json_type_name(Some(&json!(3))), "number");
        assert_eq!(json_type_name(Some(&json!([]))), "array");
    }
}

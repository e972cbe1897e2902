//! Tool response envelope (schema v1.x) and the renderability gate.
//!
//! A response is renderable when it is an object with a `version` string
//! starting with `"1."`, a `metadata` object, and either a `content` array or
//! a `raw_text`/`formatted` fallback field. Anything else is passed through
//! untouched by the hook.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Required prefix of the `version` field.
pub const SCHEMA_VERSION_PREFIX: &str = "1.";

/// Errors produced when reading a tool response.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Input was not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    /// JSON did not pass the v1.x renderability gate.
    #[error("response does not match schema v1.x")]
    NotRenderable,
}

/// Whether `data` matches the v1.x response schema closely enough to render.
pub fn is_renderable(data: &Value) -> bool {
    let Some(obj) = data.as_object() else {
        return false;
    };

    let version_ok = obj
        .get("version")
        .and_then(Value::as_str)
        .is_some_and(|v| v.starts_with(SCHEMA_VERSION_PREFIX));
    if !version_ok {
        return false;
    }

    if !obj.get("metadata").is_some_and(Value::is_object) {
        return false;
    }

    let has_content = obj.get("content").is_some_and(Value::is_array);
    let has_fallback = obj.contains_key("raw_text") || obj.contains_key("formatted");
    has_content || has_fallback
}

/// Typed view of a renderable tool response.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolResponse {
    pub version: String,
    pub metadata: Map<String, Value>,
    #[serde(default)]
    pub content: Option<Vec<ContentItem>>,
    #[serde(default)]
    pub raw_text: Option<Value>,
    #[serde(default)]
    pub formatted: Option<Value>,
}

impl ToolResponse {
    /// Validate with [`is_renderable`], then deserialize.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        if !is_renderable(&value) {
            return Err(SchemaError::NotRenderable);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Parse JSON text, then apply [`ToolResponse::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self, SchemaError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Tool name from `metadata.tool` or `metadata.tool_name`.
    pub fn tool_name(&self) -> Option<&str> {
        self.metadata
            .get("tool")
            .or_else(|| self.metadata.get("tool_name"))
            .and_then(Value::as_str)
    }
}

/// One entry of the `content` array.
///
/// Entries with an unknown or missing `type` are kept verbatim as
/// [`ContentItem::Other`] and rendered as a data tree.
#[derive(Debug, Clone)]
pub enum ContentItem {
    Text {
        text: String,
    },
    Data {
        data: Value,
        title: Option<String>,
    },
    Diff {
        diff: String,
        path: Option<String>,
    },
    Error {
        message: String,
        code: Option<Value>,
    },
    Code {
        code: String,
        language: Option<String>,
    },
    Other(Value),
}

impl ContentItem {
    fn from_value(value: Value) -> Self {
        let kind = value.get("type").and_then(Value::as_str).unwrap_or("");
        let str_field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_string);

        let parsed = match kind {
            "text" => str_field("text").map(|text| ContentItem::Text { text }),
            "data" | "json" => value.get("data").map(|data| ContentItem::Data {
                data: data.clone(),
                title: str_field("title"),
            }),
            "diff" => str_field("diff").map(|diff| ContentItem::Diff {
                diff,
                path: str_field("path"),
            }),
            "error" => str_field("message").map(|message| ContentItem::Error {
                message,
                code: value.get("code").cloned(),
            }),
            "code" => str_field("code").map(|code| ContentItem::Code {
                code,
                language: str_field("language"),
            }),
            _ => None,
        };

        parsed.unwrap_or(ContentItem::Other(value))
    }
}

impl<'de> Deserialize<'de> for ContentItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ContentItem::from_value)
    }
}

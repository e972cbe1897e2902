//! Scalar value classification.
//!
//! Text is scanned by three independent predicates ([`is_error_like`],
//! [`is_warning_like`], [`is_success_like`]). All three are evaluated, then
//! the highest-priority hit wins: error, then warning, then success.
//! Booleans are status signals on their own; numbers and null never are.

use serde_json::Value;

use super::Role;
use super::patterns::{
    re_error_keywords, re_http_error_prefixed, re_http_error_reason, re_http_success_prefixed,
    re_http_success_reason, re_success_keywords, re_warning_keywords,
};

/// A scalar value as it appears in a tool response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Text(&'a str),
    Bool(bool),
    Integer(i64),
    Float(f64),
    Null,
}

impl<'a> Scalar<'a> {
    /// View a JSON value as a scalar. Arrays and objects return `None`.
    pub fn from_json(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Scalar::Text(s)),
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => Scalar::Integer(i),
                // u64 beyond i64 and floats both land here
                None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::Null => Some(Scalar::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(s: &'a str) -> Self {
        Scalar::Text(s)
    }
}

impl From<bool> for Scalar<'_> {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<i64> for Scalar<'_> {
    fn from(i: i64) -> Self {
        Scalar::Integer(i)
    }
}

impl From<f64> for Scalar<'_> {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}

impl<'a, T: Into<Scalar<'a>>> From<Option<T>> for Scalar<'a> {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Scalar::Null, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Error keywords, or a 4xx/5xx status code anchored to a prefix or reason phrase.
pub fn is_error_like(text: &str) -> bool {
    re_error_keywords().is_match(text)
        || re_http_error_prefixed().is_match(text)
        || re_http_error_reason().is_match(text)
}

/// Warning keywords.
pub fn is_warning_like(text: &str) -> bool {
    re_warning_keywords().is_match(text)
}

/// Success keywords, or a 2xx status code anchored to a prefix or reason phrase.
pub fn is_success_like(text: &str) -> bool {
    re_success_keywords().is_match(text)
        || re_http_success_prefixed().is_match(text)
        || re_http_success_reason().is_match(text)
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

fn classify_text(text: &str) -> Role {
    let hits = [
        (is_error_like(text), Role::ValueStatusError),
        (is_warning_like(text), Role::ValueStatusWarning),
        (is_success_like(text), Role::ValueStatusOk),
    ];
    hits.into_iter()
        .find_map(|(hit, role)| hit.then_some(role))
        .unwrap_or(Role::ValueText)
}

/// Classify a scalar into one of the four value roles.
pub fn classify_value<'a>(value: impl Into<Scalar<'a>>) -> Role {
    match value.into() {
        Scalar::Text(text) => classify_text(text),
        Scalar::Bool(true) => Role::ValueStatusOk,
        Scalar::Bool(false) => Role::ValueStatusError,
        Scalar::Integer(_) | Scalar::Float(_) | Scalar::Null => Role::ValueText,
    }
}

/// Classify a JSON scalar. Containers have no value role and return `None`.
pub fn classify_json_value(value: &Value) -> Option<Role> {
    Scalar::from_json(value).map(|scalar| classify_value(scalar))
}

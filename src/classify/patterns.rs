//! Static keyword tables and the compiled matchers built from them.
//!
//! The tables are plain `&'static [&'static str]` slices so they can be
//! inspected and tested directly. Matchers are compiled once on first use
//! and shared read-only afterwards.

use std::sync::OnceLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Keyword tables
// ---------------------------------------------------------------------------

/// Object keys rendered with primary emphasis. Matched exactly, ignoring case.
pub const PRIMARY_KEYS: &[&str] = &[
    "status", "error", "result", "tool", "type", "code", "message",
];

/// Words and phrases that mark a value as an error.
pub const ERROR_KEYWORDS: &[&str] = &[
    "error",
    "errors",
    "errored",
    "fail",
    "failed",
    "failing",
    "failure",
    "failures",
    "fatal",
    "exception",
    "invalid",
    "aborted",
    "crashed",
    "panicked",
    "refused",
    "denied",
];

/// Words and phrases that mark a value as a warning.
pub const WARNING_KEYWORDS: &[&str] = &[
    "warning",
    "warnings",
    "warn",
    "partial",
    "partially",
    "pending",
    "timeout",
    "timed out",
    "deprecated",
    "skipped",
    "retrying",
    "degraded",
];

/// Words and phrases that mark a value as a success.
///
/// `good` is left out on purpose: it shows up in too much ordinary prose.
pub const SUCCESS_KEYWORDS: &[&str] = &[
    "ok",
    "okay",
    "success",
    "successful",
    "successfully",
    "succeeded",
    "completed",
    "passed",
    "ready",
    "healthy",
];

/// Reason phrases that may follow a leading 4xx/5xx code.
pub const HTTP_ERROR_REASONS: &[&str] = &[
    "bad request",
    "unauthorized",
    "payment required",
    "forbidden",
    "not found",
    "method not allowed",
    "not acceptable",
    "request timeout",
    "conflict",
    "gone",
    "precondition failed",
    "payload too large",
    "unsupported media type",
    "unprocessable entity",
    "unprocessable content",
    "too many requests",
    "internal server error",
    "not implemented",
    "bad gateway",
    "service unavailable",
    "gateway timeout",
];

/// Reason phrases that may follow a leading 2xx code.
pub const HTTP_SUCCESS_REASONS: &[&str] = &[
    "ok",
    "created",
    "accepted",
    "non-authoritative information",
    "no content",
    "reset content",
];

/// Prefixes of unified-diff file header lines (`--- a/x`, `+++ b/x`).
pub const DIFF_FILE_MARKERS: &[&str] = &["---", "+++"];

/// Prefix of a hunk header. Combined diffs use three or more `@`.
pub const DIFF_HUNK_MARKER: &str = "@@";

// ---------------------------------------------------------------------------
// Pattern builders
// ---------------------------------------------------------------------------

/// Turn a keyword or phrase into a regex fragment. Words within a phrase
/// may be separated by any run of whitespace.
fn phrase_fragment(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// Case-insensitive, whole-word alternation over a keyword table.
fn keyword_pattern(words: &[&str]) -> String {
    let alternation = words
        .iter()
        .map(|w| phrase_fragment(w))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)\b(?:{alternation})\b")
}

/// Status code anchored to an `HTTP`, `HTTP/x.y`, `status` or `status code` prefix.
fn prefixed_status_pattern(class: &str) -> String {
    format!(r"(?i)\b(?:https?(?:/\d+(?:\.\d+)?)?|status(?:\s+code)?)\s*[:=]?\s*{class}\d{{2}}\b")
}

/// Status code at the start of the value followed directly by a reason phrase.
fn reason_status_pattern(class: &str, reasons: &[&str]) -> String {
    let alternation = reasons
        .iter()
        .map(|r| phrase_fragment(r))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)^\s*{class}\d{{2}}\s+(?:{alternation})\b")
}

// ---------------------------------------------------------------------------
// Compiled matchers
// ---------------------------------------------------------------------------

pub(super) fn re_error_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&keyword_pattern(ERROR_KEYWORDS))
            .expect("re_error_keywords: pattern is valid and should always compile")
    })
}

pub(super) fn re_warning_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&keyword_pattern(WARNING_KEYWORDS))
            .expect("re_warning_keywords: pattern is valid and should always compile")
    })
}

pub(super) fn re_success_keywords() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&keyword_pattern(SUCCESS_KEYWORDS))
            .expect("re_success_keywords: pattern is valid and should always compile")
    })
}

pub(super) fn re_http_error_prefixed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&prefixed_status_pattern("[45]"))
            .expect("re_http_error_prefixed: pattern is valid and should always compile")
    })
}

pub(super) fn re_http_error_reason() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&reason_status_pattern("[45]", HTTP_ERROR_REASONS))
            .expect("re_http_error_reason: pattern is valid and should always compile")
    })
}

pub(super) fn re_http_success_prefixed() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&prefixed_status_pattern("2"))
            .expect("re_http_success_prefixed: pattern is valid and should always compile")
    })
}

pub(super) fn re_http_success_reason() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&reason_status_pattern("2", HTTP_SUCCESS_REASONS))
            .expect("re_http_success_reason: pattern is valid and should always compile")
    })
}

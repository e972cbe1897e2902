//! Integration tests for the public rendering API and the `mcp-render` binary.

use std::io::Write;
use std::process::{Command, Stdio};

use mcp_render::render::render_stream;
use mcp_render::{Config, RenderConfig, Role, classify_value, render_json_str};

fn plain() -> RenderConfig {
    RenderConfig {
        color: false,
        ..Default::default()
    }
}

const DEPLOY_RESPONSE: &str = r#"{
    "version": "1.3",
    "metadata": {"tool": "deploy", "status": "partial", "region": "eu-west-1"},
    "content": [
        {"type": "data", "data": {
            "services": [
                {"name": "api", "status": "healthy"},
                {"name": "worker", "status": "failed", "error": "OOMKilled"}
            ]
        }},
        {"type": "diff", "path": "deploy.yaml", "diff": "--- a/deploy.yaml\n+++ b/deploy.yaml\n@@ -1 +1 @@\n-replicas: 2\n+replicas: 3"}
    ]
}"#;

// -- Library --

#[test]
fn test_full_response_plain() {
    let out = render_json_str(DEPLOY_RESPONSE, &plain()).unwrap();
    let expected = "\
▶ deploy [partial]
region: eu-west-1

services:
│  -
│  │  name: api
│  │  status: healthy
│  -
│  │  name: worker
│  │  status: failed
│  │  error: OOMKilled

diff deploy.yaml
--- a/deploy.yaml
+++ b/deploy.yaml
@@ -1 +1 @@
-replicas: 2
+replicas: 3
";
    assert_eq!(out, expected);
}

#[test]
fn test_full_response_colors_follow_roles() {
    let out = render_json_str(DEPLOY_RESPONSE, &RenderConfig::default()).unwrap();
    // Bold bright red for error values, green for ok values and added lines.
    assert!(out.contains("\x1b[1;38;2;235;160;172mfailed\x1b[0m"));
    assert!(out.contains("\x1b[38;2;166;227;161mhealthy\x1b[0m"));
    assert!(out.contains("\x1b[38;2;166;227;161m+replicas: 3\x1b[0m"));
    assert!(out.contains("\x1b[38;2;243;139;168m-replicas: 2\x1b[0m"));
    // Warning badge in the header.
    assert!(out.contains("\x1b[38;2;249;226;175m[partial]\x1b[0m"));
    assert_eq!(classify_value("partial"), Role::ValueStatusWarning);
}

#[test]
fn test_config_file_shapes_output() {
    let config = Config::from_yaml(
        "render:\n  color: false\n  sort_keys: true\n  max_array_display: 2\n  max_depth_expanded: 2\n",
    )
    .unwrap();
    let input = r#"{
        "version": "1.0",
        "metadata": {},
        "content": [{"type": "data", "data": {
            "zeta": [1, 2, 3, 4],
            "alpha": {"nested": {"deep": true}}
        }}]
    }"#;
    let out = render_json_str(input, &config.render).unwrap();
    assert_eq!(
        out,
        "alpha:\n│  nested: { 1 keys }\nzeta:\n│  - 1\n│  - 2\n│  ... and 2 more items\n"
    );
}

#[test]
fn test_render_stream_round_trip() {
    let mut out = Vec::new();
    render_stream(DEPLOY_RESPONSE.as_bytes(), &mut out, &plain()).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("▶ deploy [partial]\n"));
}

// -- Binary --

fn run_bin(args: &[&str], stdin: &str) -> (i32, String, String) {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mcp-render"))
        .args(args)
        .env_remove("NO_COLOR")
        .env("MCP_RENDER_CONFIG", "/nonexistent/mcp-render/config.yaml")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    let output = child.wait_with_output().expect("binary should finish");
    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_bin_renders_stdin() {
    let (code, stdout, _) = run_bin(
        &["--no-color"],
        r#"{"version":"1.3","metadata":{},"raw_text":"hello"}"#,
    );
    assert_eq!(code, 0);
    assert_eq!(stdout, "hello\n");
}

#[test]
fn test_bin_rejects_unrenderable_input() {
    let (code, stdout, stderr) = run_bin(&[], r#"{"hello":"world"}"#);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("schema"));
}

#[test]
fn test_bin_reads_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("response.json");
    std::fs::write(&path, r#"{"version":"1.3","metadata":{},"formatted":"from file"}"#).unwrap();
    let (code, stdout, _) = run_bin(&["--no-color", "--input", path.to_str().unwrap()], "");
    assert_eq!(code, 0);
    assert_eq!(stdout, "from file\n");
}

#[test]
fn test_bin_writes_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("logs").join("render.log");
    let (code, _, _) = run_bin(
        &["--no-color", "--log-file", log.to_str().unwrap()],
        r#"{"version":"1.3","metadata":{},"raw_text":"x"}"#,
    );
    assert_eq!(code, 0);
    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("[INFO ] Rendered 2 chars"));
}

#[test]
fn test_bin_classify() {
    let cases = [
        (["classify", "key", "status"], "KEY_PRIMARY"),
        (["classify", "value", "HTTP/1.1 201 Created"], "VALUE_STATUS_OK"),
        (["classify", "value", "took 500 ms"], "VALUE_TEXT"),
        (["classify", "diff", "@@ -1 +1 @@"], "DIFF_HEADER"),
    ];
    for (args, expected) in cases {
        let (code, stdout, _) = run_bin(&args, "");
        assert_eq!(code, 0, "{args:?}");
        assert_eq!(stdout.trim(), expected, "{args:?}");
    }
}

#[test]
fn test_bin_check() {
    let (code, stdout, _) = run_bin(&["check"], r#"{"version":"1.2","metadata":{},"content":[]}"#);
    assert_eq!((code, stdout.trim()), (0, "renderable"));
    let (code, stdout, _) = run_bin(&["check"], r#"{"version":"1.2","content":[]}"#);
    assert_eq!((code, stdout.trim()), (1, "not renderable"));
}

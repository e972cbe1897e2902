//! Renderers the hook can hand a tool response to.
//!
//! [`ExternalRenderer`] pipes the JSON through the `mcp-render` executable
//! with a timeout; [`InProcessRenderer`] calls the linked library directly.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use mcp_render::config::{HookConfig, RenderConfig};
use mcp_render::schema::SchemaError;

/// Maximum number of stderr characters kept in [`RendererError::Failed`].
pub const STDERR_LIMIT: usize = 200;

/// How often a running renderer is checked for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Errors a renderer can report. All of them cause the hook to pass the
/// original output through.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("mcp-render not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("mcp-render error: failed to start {}: {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("mcp-render failed with code {}: {stderr}", exit_code_text(.code))]
    Failed { code: Option<i32>, stderr: String },

    #[error("mcp-render timed out after {:.1}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    #[error("mcp-render error: {0}")]
    Io(#[from] io::Error),

    #[error("in-process render failed: {0}")]
    Render(#[from] SchemaError),
}

fn exit_code_text(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

/// Something that turns tool-response JSON into rendered terminal text.
pub trait Renderer {
    fn render(&self, json: &str) -> Result<String, RendererError>;
}

// ---------------------------------------------------------------------------
// External process
// ---------------------------------------------------------------------------

/// Runs an external renderer, feeding the JSON on stdin and reading the
/// rendered text from stdout.
#[derive(Debug, Clone)]
pub struct ExternalRenderer {
    path: PathBuf,
    args: Vec<String>,
    timeout: Duration,
}

impl ExternalRenderer {
    pub fn new(path: impl Into<PathBuf>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &HookConfig) -> Self {
        Self::new(
            config.render_path.clone(),
            config.render_args.clone(),
            config.timeout(),
        )
    }

    fn timed_out(&self) -> RendererError {
        RendererError::Timeout {
            timeout: self.timeout,
        }
    }
}

impl Renderer for ExternalRenderer {
    fn render(&self, json: &str) -> Result<String, RendererError> {
        let mut child = Command::new(&self.path)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => RendererError::NotFound {
                    path: self.path.clone(),
                },
                _ => RendererError::Spawn {
                    path: self.path.clone(),
                    source,
                },
            })?;

        // Feed stdin and drain both pipes on helper threads while polling.
        // Every wait below shares one deadline, including the pipe reads: a
        // grandchild can keep stdout open after the renderer itself exits.
        if let Some(mut stdin) = child.stdin.take() {
            let input = json.to_owned();
            thread::spawn(move || {
                // A renderer may exit without reading all of its input.
                if let Err(e) = stdin.write_all(input.as_bytes()) {
                    log::debug!("mcp-render did not consume its input: {e}");
                }
            });
        }
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let start = Instant::now();
        let deadline = start + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() > deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(self.timed_out());
                    }
                    thread::sleep(POLL_INTERVAL);
                }
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(RendererError::Io(e));
                }
            }
        };

        let (Ok(stdout), Ok(stderr)) = (
            recv_until(stdout, deadline),
            recv_until(stderr, deadline),
        ) else {
            log::debug!("mcp-render exited but its output pipes stayed open");
            return Err(self.timed_out());
        };

        if !status.success() {
            return Err(RendererError::Failed {
                code: status.code(),
                stderr: truncate_chars(&String::from_utf8_lossy(&stderr), STDERR_LIMIT),
            });
        }

        log::debug!(
            "mcp-render finished in {:.3}s",
            start.elapsed().as_secs_f64()
        );
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

/// Read `pipe` to EOF on a helper thread; the buffer arrives on the channel.
fn spawn_reader<R: Read + Send + 'static>(mut pipe: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Err(e) = pipe.read_to_end(&mut buf) {
            log::debug!("Error reading renderer output: {e}");
        }
        let _ = tx.send(buf);
    });
    rx
}

/// Wait for a reader's buffer until `deadline`. A missing pipe or a reader
/// that died yields an empty buffer.
fn recv_until(
    reader: Option<Receiver<Vec<u8>>>,
    deadline: Instant,
) -> Result<Vec<u8>, RecvTimeoutError> {
    let Some(reader) = reader else {
        return Ok(Vec::new());
    };
    match reader.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(buf) => Ok(buf),
        Err(RecvTimeoutError::Disconnected) => Ok(Vec::new()),
        Err(RecvTimeoutError::Timeout) => Err(RecvTimeoutError::Timeout),
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

// ---------------------------------------------------------------------------
// In process
// ---------------------------------------------------------------------------

/// Renders with the linked `mcp_render` library.
#[derive(Debug, Clone, Default)]
pub struct InProcessRenderer {
    config: RenderConfig,
}

impl InProcessRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }
}

impl Renderer for InProcessRenderer {
    fn render(&self, json: &str) -> Result<String, RendererError> {
        Ok(mcp_render::render_json_str(json, &self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_is_char_aware() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("ab", 200), "ab");
    }

    #[test]
    fn test_error_messages() {
        let err = RendererError::Failed {
            code: Some(2),
            stderr: "boom".into(),
        };
        assert_eq!(err.to_string(), "mcp-render failed with code 2: boom");
        let err = RendererError::Failed {
            code: None,
            stderr: String::new(),
        };
        assert_eq!(err.to_string(), "mcp-render failed with code signal: ");
        let err = RendererError::Timeout {
            timeout: Duration::from_secs(5),
        };
        assert_eq!(err.to_string(), "mcp-render timed out after 5.0s");
        let err = RendererError::NotFound {
            path: PathBuf::from("/nope/mcp-render"),
        };
        assert_eq!(err.to_string(), "mcp-render not found at /nope/mcp-render");
    }

    #[test]
    fn test_recv_until_deadline() {
        let (tx, rx) = mpsc::channel::<Vec<u8>>();
        let deadline = Instant::now() + Duration::from_millis(20);
        assert!(recv_until(Some(rx), deadline).is_err());
        drop(tx);

        let (tx, rx) = mpsc::channel();
        tx.send(b"out".to_vec()).unwrap();
        assert_eq!(recv_until(Some(rx), Instant::now()).unwrap(), b"out");

        let (tx, rx) = mpsc::channel::<Vec<u8>>();
        drop(tx);
        assert!(recv_until(Some(rx), Instant::now()).unwrap().is_empty());
        assert!(recv_until(None, Instant::now()).unwrap().is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = HookConfig {
            render_path: PathBuf::from("/opt/mcp-render"),
            render_args: vec!["--no-color".into()],
            timeout_ms: 250,
            ..Default::default()
        };
        let renderer = ExternalRenderer::from_config(&config);
        assert_eq!(renderer.path, PathBuf::from("/opt/mcp-render"));
        assert_eq!(renderer.args, vec!["--no-color".to_string()]);
        assert_eq!(renderer.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_in_process_renderer() {
        let renderer = InProcessRenderer::new(RenderConfig {
            color: false,
            ..Default::default()
        });
        let out = renderer
            .render(r#"{"version":"1.3","metadata":{},"raw_text":"hello"}"#)
            .unwrap();
        assert_eq!(out, "hello\n");
        assert!(matches!(
            renderer.render(r#"{"version":"0.9"}"#),
            Err(RendererError::Render(SchemaError::NotRenderable))
        ));
    }
}

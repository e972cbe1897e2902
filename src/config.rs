//! Configuration shared by `mcp-render` and the `render-mcp-output` hook.
//!
//! Covers:
//! - `Config::load` / `Config::load_from` (YAML via `serde_yaml_ng`)
//! - path helpers rooted at `~/.claude` (`config_path`, `default_render_path`, ...)
//! - environment overrides for the hook (`MCP_RENDER_PATH`, ...)
//!
//! Every field has a default, so a partial or missing file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "MCP_RENDER_CONFIG";
/// Environment variable overriding `hook.render_path`.
pub const RENDER_PATH_ENV: &str = "MCP_RENDER_PATH";
/// Environment variable overriding `hook.log_file`.
pub const LOG_FILE_ENV: &str = "MCP_RENDER_LOG_FILE";
/// Environment variable overriding `hook.timeout_ms`.
pub const TIMEOUT_MS_ENV: &str = "MCP_RENDER_TIMEOUT_MS";
/// Any non-empty value disables colour output (<https://no-color.org>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error reading config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file contained invalid YAML.
    #[error("YAML parse error in config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

// ---------------------------------------------------------------------------
// Render settings
// ---------------------------------------------------------------------------

/// Settings for the rendering pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Emit ANSI colour and weight (default: true).
    pub color: bool,
    /// Collapse objects/arrays nested deeper than this (default: 4).
    pub max_depth_expanded: usize,
    /// Truncate string values longer than this many characters (default: 400).
    pub max_string_length: usize,
    /// Array elements shown before `... and N more items` (default: 50).
    pub max_array_display: usize,
    /// Sort object keys alphabetically (default: false).
    pub sort_keys: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color: true,
            max_depth_expanded: 4,
            max_string_length: 400,
            max_array_display: 50,
            sort_keys: false,
        }
    }
}

impl RenderConfig {
    /// Turn colour off when `NO_COLOR` is set to a non-empty value.
    pub fn apply_env(&mut self) {
        if std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            self.color = false;
        }
    }
}

// ---------------------------------------------------------------------------
// Hook settings
// ---------------------------------------------------------------------------

/// Settings for the PostToolUse hook adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Renderer executable (default: `~/.claude/bin/mcp-render`).
    pub render_path: PathBuf,
    /// Extra arguments passed to the renderer before it reads stdin.
    pub render_args: Vec<String>,
    /// Append-only diagnostics log (default: `~/.claude/logs/mcp-render-hook.log`).
    pub log_file: PathBuf,
    /// How long to wait for the renderer before giving up (default: 5000).
    pub timeout_ms: u64,
    /// Render with the linked library instead of spawning `render_path`.
    pub in_process: bool,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            render_path: default_render_path(),
            render_args: Vec::new(),
            log_file: default_log_file(),
            timeout_ms: 5000,
            in_process: false,
        }
    }
}

impl HookConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Apply `MCP_RENDER_PATH`, `MCP_RENDER_LOG_FILE` and `MCP_RENDER_TIMEOUT_MS`.
    ///
    /// Unparseable timeouts are ignored with a warning.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable source.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(RENDER_PATH_ENV).filter(|v| !v.is_empty()) {
            self.render_path = expand_home(&path);
        }
        if let Some(path) = lookup(LOG_FILE_ENV).filter(|v| !v.is_empty()) {
            self.log_file = expand_home(&path);
        }
        if let Some(raw) = lookup(TIMEOUT_MS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => self.timeout_ms = ms,
                Err(e) => log::warn!("Ignoring {TIMEOUT_MS_ENV}={raw:?}: {e}"),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub hook: HookConfig,
}

impl Config {
    /// Load from [`Config::config_path`], falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("Config file {path:?} not found, using defaults");
            return Ok(Self::default());
        }

        log::debug!("Loading config from {path:?}");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse YAML text. An empty document yields defaults.
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml_ng::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(contents)
    }

    /// `$MCP_RENDER_CONFIG`, else `~/.claude/mcp-render/config.yaml`.
    pub fn config_path() -> PathBuf {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.is_empty() => expand_home(&path),
            _ => claude_dir().join("mcp-render").join("config.yaml"),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `~/.claude`, or `./.claude` when no home directory can be determined.
pub fn claude_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".claude")
}

pub fn default_render_path() -> PathBuf {
    claude_dir().join("bin").join("mcp-render")
}

pub fn default_log_file() -> PathBuf {
    claude_dir().join("logs").join("mcp-render-hook.log")
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.render.color);
        assert_eq!(config.render.max_depth_expanded, 4);
        assert_eq!(config.hook.timeout_ms, 5000);
        assert_eq!(config.hook.timeout(), Duration::from_secs(5));
        assert!(config.hook.render_path.ends_with(".claude/bin/mcp-render"));
        assert!(
            config
                .hook
                .log_file
                .ends_with(".claude/logs/mcp-render-hook.log")
        );
        assert!(!config.hook.in_process);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("render:\n  color: false\nhook:\n  timeout_ms: 250\n")
            .expect("valid yaml");
        assert!(!config.render.color);
        assert_eq!(config.render.max_array_display, 50);
        assert_eq!(config.hook.timeout_ms, 250);
        assert!(config.hook.render_args.is_empty());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("render: [unclosed").is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "hook:\n  render_path: /opt/mcp-render\n  render_args: [\"--no-color\"]\n",
        )
        .unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.hook.render_path, PathBuf::from("/opt/mcp-render"));
        assert_eq!(config.hook.render_args, vec!["--no-color".to_string()]);
    }

    #[test]
    fn test_load_from_bad_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "hook: {timeout_ms: nope}").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_hook_overrides() {
        let vars: HashMap<&str, &str> = [
            (RENDER_PATH_ENV, "/usr/local/bin/mcp-render"),
            (LOG_FILE_ENV, "/tmp/hook.log"),
            (TIMEOUT_MS_ENV, " 1500 "),
        ]
        .into_iter()
        .collect();
        let mut hook = HookConfig::default();
        hook.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(hook.render_path, PathBuf::from("/usr/local/bin/mcp-render"));
        assert_eq!(hook.log_file, PathBuf::from("/tmp/hook.log"));
        assert_eq!(hook.timeout_ms, 1500);
    }

    #[test]
    fn test_bad_timeout_override_is_ignored() {
        let mut hook = HookConfig::default();
        hook.apply_overrides(|name| (name == TIMEOUT_MS_ENV).then(|| "soon".to_string()));
        assert_eq!(hook.timeout_ms, 5000);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/x/y"), home.join("x/y"));
        }
    }
}

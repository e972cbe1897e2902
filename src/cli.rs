//! Command-line interface for mcp-render.
//!
//! This module handles CLI argument parsing and the small diagnostic
//! subcommands (`classify`, `check`). Rendering itself is driven from `main`.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;

use crate::classify::{Role, classify_diff_line, classify_json_value, classify_key, classify_value};
use crate::schema::is_renderable;

/// mcp-render - Semantic ANSI rendering for MCP tool responses
#[derive(Parser)]
#[command(name = "mcp-render")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read the tool response from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Disable ANSI colour and weight
    #[arg(long)]
    pub no_color: bool,

    /// Append diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log verbosity for --log-file
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Config file (default: ~/.claude/mcp-render/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the semantic role of a single key, value or diff line
    Classify {
        /// What kind of input TEXT is
        #[arg(value_enum)]
        kind: ClassifyKind,

        /// The input to classify
        text: String,
    },
    /// Exit 0 if stdin is a renderable tool response, 1 otherwise
    Check,
}

/// Input kinds accepted by `mcp-render classify`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ClassifyKind {
    Key,
    Value,
    Diff,
}

/// Log verbosity accepted by `--log-level`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the renderer
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Input file (None = stdin)
    pub input: Option<PathBuf>,
    /// Force colour off
    pub no_color: bool,
    /// Diagnostics log file
    pub log_file: Option<PathBuf>,
    /// Log level for the diagnostics log
    pub log_level: Option<log::LevelFilter>,
    /// Explicit config file
    pub config: Option<PathBuf>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with rendering
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Classify { kind, text }) => {
            println!("{}", classify_input(kind, &text));
            CliResult::Exit(0)
        }
        Some(Commands::Check) => {
            let mut input = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut input) {
                eprintln!("mcp-render: error reading stdin: {e}");
                return CliResult::Exit(1);
            }
            let renderable = check_input(&input);
            println!("{}", if renderable { "renderable" } else { "not renderable" });
            CliResult::Exit(if renderable { 0 } else { 1 })
        }
        None => CliResult::Continue(RuntimeOptions {
            input: cli.input,
            no_color: cli.no_color,
            log_file: cli.log_file,
            log_level: Some(cli.log_level.into()),
            config: cli.config,
        }),
    }
}

/// Classify one CLI input. Values that parse as a JSON scalar
/// (`true`, `42`, `null`, `"quoted"`) are classified as that scalar;
/// anything else is classified as text.
pub fn classify_input(kind: ClassifyKind, text: &str) -> Role {
    match kind {
        ClassifyKind::Key => classify_key(text),
        ClassifyKind::Diff => classify_diff_line(text),
        ClassifyKind::Value => serde_json::from_str::<serde_json::Value>(text)
            .ok()
            .and_then(|v| classify_json_value(&v))
            .unwrap_or_else(|| classify_value(text)),
    }
}

/// Whether `input` is JSON that passes the schema gate.
pub fn check_input(input: &str) -> bool {
    serde_json::from_str::<serde_json::Value>(input).is_ok_and(|v| is_renderable(&v))
}

use anyhow::{Context, Result};
use mcp_render::cli;
use mcp_render::config::Config;
use mcp_render::render::{RenderError, render_stream};
use std::fs::File;
use std::io::{self, BufReader};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = match cli::process_cli() {
        cli::CliResult::Exit(code) => {
            if code == 0 {
                return Ok(());
            }
            std::process::exit(code);
        }
        cli::CliResult::Continue(options) => options,
    };

    if let Some(path) = &options.log_file {
        let level = options.log_level.unwrap_or(log::LevelFilter::Info);
        mcp_render::debug::init_file_logger(path, level)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
    }

    log::info!("mcp-render {} starting", mcp_render::VERSION);

    let config = match &options.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    let mut render_config = config.render;
    render_config.apply_env();
    if options.no_color {
        render_config.color = false;
    }

    let stdout = io::stdout().lock();
    let result = match &options.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            render_stream(BufReader::new(file), stdout, &render_config)
        }
        None => render_stream(io::stdin().lock(), stdout, &render_config),
    };

    match result {
        Ok(chars) => {
            log::info!("Rendered {chars} chars");
            Ok(())
        }
        Err(RenderError::Schema(e)) => {
            log::warn!("Input rejected: {e}");
            eprintln!("mcp-render: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

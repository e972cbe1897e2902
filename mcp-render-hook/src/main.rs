//! `render-mcp-output`: PostToolUse hook entry point.
//!
//! Always prints exactly one JSON line and exits 0.

use std::io::{self, Read};

use mcp_render::config::Config;
use mcp_render_hook::{ExternalRenderer, HookResponse, InProcessRenderer, Renderer, run};

fn main() {
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("render-mcp-output: error reading stdin: {e}");
        println!("{}", HookResponse::passthrough().to_json_line());
        return;
    }

    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.hook.apply_env();
    config.render.apply_env();

    // Logging is best effort; the hook must still answer without it.
    let log_file = &config.hook.log_file;
    if let Err(e) = mcp_render::debug::init_file_logger(log_file, log::LevelFilter::Info) {
        eprintln!("render-mcp-output: logging disabled: {e}");
    }
    if let Some(e) = config_error {
        log::warn!("{e}; using default configuration");
    }

    let renderer: Box<dyn Renderer> = if config.hook.in_process {
        Box::new(InProcessRenderer::new(config.render))
    } else {
        Box::new(ExternalRenderer::from_config(&config.hook))
    };

    println!("{}", run(&input, renderer.as_ref()));
}

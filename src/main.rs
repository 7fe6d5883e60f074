mod api;
mod cli;
mod core;
mod reporters;
mod utils;

use anyhow::{Context as _, Result};
use std::io::IsTerminal;
use tracing::debug;

use api::ApiClient;
use cli::dispatch::{self, Context};
use cli::Invocation;
use crate::core::config::{Config, API_URL_ENV};
use reporters::Palette;

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    std::process::exit(code);
}

async fn run() -> Result<i32> {
    let cli = match cli::parse(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Exit(outcome) => {
            outcome.write()?;
            return Ok(outcome.exit_code);
        }
    };

    init_logging(cli.verbose, cli.debug);

    let cwd = std::env::current_dir().context("resolve current directory")?;
    let config = Config::load(&cwd).with_env_override(std::env::var(API_URL_ENV).ok());
    let client = ApiClient::new(config.api_url()).context("build HTTP client")?;
    debug!("Using API at {}", client.base_url());

    let palette = if cli.json {
        Palette::plain()
    } else {
        Palette::detect()
    };
    colored::control::set_override(palette.is_enabled());

    let ctx = Context {
        service: &client,
        cwd,
        palette,
        show_progress: std::io::stderr().is_terminal(),
    };

    let outcome = dispatch::run(&cli, &ctx).await;
    outcome.write().context("write output")?;
    Ok(outcome.exit_code)
}

/// Initialize tracing based on CLI flags. `RUST_LOG` takes precedence.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}

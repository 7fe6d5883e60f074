pub mod commands;
pub mod dispatch;
pub mod output;
pub mod progress;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;

use output::Outcome;

const AFTER_HELP: &str = "\
Examples:
  # Check Next.js + Prisma compatibility
  devradar check nextjs prisma

  # Scan current directory
  devradar scan

  # Scan specific package.json
  devradar scan ./my-app/package.json

  # Get JSON output
  devradar check nextjs prisma --json

Website: https://devradar.dev";

#[derive(Parser, Debug)]
#[command(
    name = "devradar",
    about = "Check your tech stack compatibility",
    disable_version_flag = true,
    after_help = AFTER_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output results as JSON
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Show version
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Enable verbose (info-level) logging to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Enable debug-level logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check compatibility between two technologies
    Check(commands::check::CheckArgs),
    /// Scan package.json (default: ./package.json)
    Scan(commands::scan::ScanArgs),
    /// Show version
    Version,
}

/// Result of argument parsing: either a command to run, or output that
/// clap already decided (help, parse errors).
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    Exit(Outcome),
}

pub fn parse<I, T>(argv: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(argv) {
        Ok(cli) => Invocation::Run(cli),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Invocation::Exit(Outcome {
                stdout: err.render().to_string(),
                stderr: String::new(),
                exit_code: 0,
            }),
            _ => Invocation::Exit(Outcome {
                stdout: help_text(),
                stderr: format!("{}\n", err.render()),
                exit_code: 1,
            }),
        },
    }
}

pub fn help_text() -> String {
    Cli::command().render_help().to_string()
}

pub fn version_text() -> String {
    format!("devradar v{}\n", env!("CARGO_PKG_VERSION"))
}

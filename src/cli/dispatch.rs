use std::path::PathBuf;
use tracing::debug;

use crate::api::CompatibilityService;
use crate::cli::output::{self, Outcome};
use crate::cli::{commands, help_text, version_text, Cli, Commands};
use crate::reporters::Palette;

/// Collaborators a command runs against.
pub struct Context<'a> {
    pub service: &'a dyn CompatibilityService,
    pub cwd: PathBuf,
    pub palette: Palette,
    pub show_progress: bool,
}

#[cfg(test)]
impl<'a> Context<'a> {
    pub fn for_tests(service: &'a dyn CompatibilityService) -> Self {
        Self {
            service,
            cwd: PathBuf::from("/"),
            palette: Palette::plain(),
            show_progress: false,
        }
    }
}

pub async fn run(cli: &Cli, ctx: &Context<'_>) -> Outcome {
    if cli.version {
        return Outcome {
            stdout: version_text(),
            ..Outcome::default()
        };
    }

    let renderer = output::renderer(cli.json, ctx.palette);
    debug!("Rendering with the {} renderer", renderer.name());

    match &cli.command {
        Some(Commands::Check(args)) => commands::check::execute(args, ctx, renderer.as_ref()).await,
        Some(Commands::Scan(args)) => commands::scan::execute(args, ctx, renderer.as_ref()).await,
        Some(Commands::Version) => Outcome {
            stdout: version_text(),
            ..Outcome::default()
        },
        None => Outcome {
            stdout: help_text(),
            stderr: "Error: No command specified\n\n".to_string(),
            exit_code: 1,
        },
    }
}

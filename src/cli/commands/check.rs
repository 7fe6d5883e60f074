use clap::Args;
use tracing::info;

use crate::cli::dispatch::Context;
use crate::cli::output::Outcome;
use crate::cli::progress::RequestProgress;
use crate::core::error::{DevRadarError, Result};
use crate::reporters::Renderer;

pub const USAGE: &str = "Usage: devradar check <techA> <techB> [--json]";

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// First technology (e.g. nextjs)
    #[arg(value_name = "TECH_A")]
    pub tech_a: Option<String>,

    /// Second technology (e.g. prisma)
    #[arg(value_name = "TECH_B")]
    pub tech_b: Option<String>,

    /// Extra positional arguments are accepted and ignored.
    #[arg(hide = true)]
    pub ignored: Vec<String>,
}

impl CheckArgs {
    /// Both technology names, lowercased.
    pub fn technologies(&self) -> Result<(String, String)> {
        let normalize = |tech: &Option<String>| {
            tech.as_deref()
                .filter(|t| !t.is_empty())
                .map(str::to_lowercase)
        };
        match (normalize(&self.tech_a), normalize(&self.tech_b)) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(DevRadarError::validation("Two technology names are required")),
        }
    }
}

pub async fn execute(args: &CheckArgs, ctx: &Context<'_>, renderer: &dyn Renderer) -> Outcome {
    let (tech_a, tech_b) = match args.technologies() {
        Ok(techs) => techs,
        Err(err) => {
            let mut outcome = Outcome::failure(renderer, &err);
            if !renderer.is_structured() {
                outcome.stderr.push_str(USAGE);
                outcome.stderr.push('\n');
            }
            return outcome;
        }
    };

    match check(&tech_a, &tech_b, ctx, renderer).await {
        Ok(outcome) => outcome,
        Err(err) => Outcome::failure(renderer, &err),
    }
}

async fn check(tech_a: &str, tech_b: &str, ctx: &Context<'_>, renderer: &dyn Renderer) -> Result<Outcome> {
    info!("Checking {} + {}", tech_a, tech_b);

    let progress = RequestProgress::new(
        "Checking compatibility...",
        ctx.show_progress && !renderer.is_structured(),
    );
    let result = ctx.service.check_compatibility(tech_a, tech_b).await;
    progress.finish();
    let result = result?;

    info!("{} + {} is {}", tech_a, tech_b, result.status);
    Ok(match renderer.check(tech_a, tech_b, &result) {
        Ok(output) => Outcome::success(output, result.status.exit_code()),
        Err(err) => Outcome::failure_message(renderer, &err.to_string()),
    })
}

use clap::Args;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::dispatch::Context;
use crate::cli::output::Outcome;
use crate::cli::progress::RequestProgress;
use crate::core::classify;
use crate::core::error::{DevRadarError, Result};
use crate::reporters::Renderer;
use crate::utils::fs::{find_manifest, resolve};

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Project directory or package.json path (defaults to current directory)
    pub path: Option<PathBuf>,
}

/// Work out which `package.json` to scan.
pub fn locate_manifest(cwd: &Path, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(p) if p != Path::new(".") => p,
        _ => {
            return find_manifest(cwd).ok_or_else(|| {
                DevRadarError::not_found("No package.json found in current directory")
            })
        }
    };

    let resolved = resolve(cwd, path);
    if !resolved.exists() {
        return Err(DevRadarError::not_found(format!(
            "Path not found: {}",
            resolved.display()
        )));
    }

    if resolved.is_dir() {
        find_manifest(&resolved).ok_or_else(|| {
            DevRadarError::not_found(format!("No package.json found in: {}", resolved.display()))
        })
    } else {
        Ok(resolved)
    }
}

/// Read a manifest and require an object at its root.
pub async fn read_manifest(path: &Path) -> Result<Map<String, Value>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DevRadarError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(manifest)) => Ok(manifest),
        Ok(_) => Err(DevRadarError::parse("Root must be an object")),
        Err(err) => Err(DevRadarError::parse(err.to_string())),
    }
}

pub async fn execute(args: &ScanArgs, ctx: &Context<'_>, renderer: &dyn Renderer) -> Outcome {
    match scan(args, ctx, renderer).await {
        Ok(outcome) => outcome,
        Err(err) => Outcome::failure(renderer, &err),
    }
}

async fn scan(args: &ScanArgs, ctx: &Context<'_>, renderer: &dyn Renderer) -> Result<Outcome> {
    let manifest_path = locate_manifest(&ctx.cwd, args.path.as_deref())?;
    debug!("Using manifest {}", manifest_path.display());

    let manifest = read_manifest(&manifest_path).await?;
    info!(
        "Scanning {} ({} top-level keys)",
        manifest_path.display(),
        manifest.len()
    );

    let progress = RequestProgress::new(
        "Scanning dependencies...",
        ctx.show_progress && !renderer.is_structured(),
    );
    let result = ctx.service.scan_package_json(&manifest).await;
    progress.finish();
    let result = result?;

    info!("Stack score: {}/100", result.stack.score);
    Ok(match renderer.scan(&result) {
        Ok(output) => Outcome::success(output, classify::scan_exit_code(result.stack.score)),
        Err(err) => Outcome::failure_message(renderer, &err.to_string()),
    })
}

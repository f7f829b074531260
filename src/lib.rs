// src/lib.rs

pub mod cli;
pub mod config;
pub mod discover;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod types;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{
    ConfigFile, HostContext, ResolvedConfig, default_config_path, load_and_validate,
    load_or_default,
};
use crate::engine::{AssetPlan, Orchestrator, SkipReason, plan_asset};
use crate::exec::ProcessRunner;
use crate::fs::{FileSystem, RealFileSystem};
use crate::types::{AssetKind, Platform};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - host context (base dir, final name)
/// - config loading and resolution
/// - the orchestrator with the real filesystem and process runner
pub async fn run(args: CliArgs) -> Result<()> {
    let host = host_context(&args)?;
    let cfg = load_config(&args, &host)?;
    let resolved = ResolvedConfig::resolve(&cfg, &host, Platform::current());
    debug!(?resolved, "resolved configuration");

    let fs = RealFileSystem;

    if args.dry_run {
        print_dry_run(&fs, &resolved)?;
        return Ok(());
    }

    let summary = Orchestrator::new(&resolved, &fs, ProcessRunner::new())
        .run()
        .await?;

    info!(processed = summary.processed_count(), "web-optimizer finished");
    Ok(())
}

/// Build the host context from CLI flags and the working directory.
pub fn host_context(args: &CliArgs) -> Result<HostContext> {
    let cwd = std::env::current_dir().context("reading current working directory")?;
    let base_dir = match &args.base_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    let final_name = match &args.final_name {
        Some(name) => name.clone(),
        None => default_final_name(&base_dir),
    };

    Ok(HostContext::new(base_dir, final_name))
}

fn default_final_name(base_dir: &std::path::Path) -> String {
    base_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "site".to_string())
}

/// Load the config requested on the command line, or the optional default
/// file in the base dir.
pub fn load_config(args: &CliArgs, host: &HostContext) -> Result<ConfigFile> {
    let cfg = match &args.config {
        Some(path) => {
            let path: PathBuf = host.base_dir.join(path);
            load_and_validate(&path)
                .with_context(|| format!("loading config file {}", path.display()))?
        }
        None => {
            let path = host.base_dir.join(default_config_path());
            load_or_default(&path)
                .with_context(|| format!("loading config file {}", path.display()))?
        }
    };
    Ok(cfg)
}

/// Simple dry-run output: print each asset kind and the command it would run.
fn print_dry_run(fs: &dyn FileSystem, resolved: &ResolvedConfig) -> Result<()> {
    println!("web-optimizer dry-run");
    println!("  base_dir = {}", resolved.base_dir.display());
    println!("  output_directory = {}", resolved.output_directory.display());
    println!();

    for kind in AssetKind::ALL {
        let tool = resolved.tool(kind);
        println!("{kind}:");
        println!("  source_directory: {}", tool.source_directory.display());
        if let Some(ref files) = tool.source_files {
            println!("  source_files: {:?}", files);
        }
        match plan_asset(fs, resolved, kind)? {
            AssetPlan::Skip(SkipReason::MissingSourceDirectory(_)) => {
                println!("  skipped: source directory does not exist");
            }
            AssetPlan::Skip(SkipReason::NoInputFiles) => {
                println!("  skipped: no input files");
            }
            AssetPlan::Run { output, invocation } => {
                println!("  output: {}", output.display());
                println!("  cmd: {invocation}");
            }
        }
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}

// src/engine/plan.rs

//! Side-effect free planning of one asset kind.
//!
//! Used by the orchestrator for each step and by `--dry-run` to show what
//! would be executed.

use std::path::PathBuf;

use crate::config::{ResolvedConfig, ResolvedToolConfig};
use crate::discover::{find_source_files, resolve_listed_files};
use crate::errors::{Result, WebOptimizerError};
use crate::exec::{ToolInvocation, build_invocation};
use crate::fs::FileSystem;
use crate::types::AssetKind;

use super::SkipReason;

/// Planned work for one asset kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPlan {
    Skip(SkipReason),
    Run {
        output: PathBuf,
        invocation: ToolInvocation,
    },
}

/// Input files for `kind`, in bundle order.
///
/// An explicit `source_files` list wins over directory discovery.
pub fn resolve_inputs(
    fs: &dyn FileSystem,
    tool: &ResolvedToolConfig,
    kind: AssetKind,
) -> Result<Vec<PathBuf>> {
    match &tool.source_files {
        Some(names) => Ok(resolve_listed_files(fs, &tool.source_directory, names)),
        None => find_source_files(fs, &tool.source_directory, kind.extension()).map_err(
            |source| WebOptimizerError::Discovery {
                root: tool.source_directory.clone(),
                source,
            },
        ),
    }
}

/// Decide whether `kind` runs and with which arguments, without touching
/// anything but the read side of `fs`.
pub fn plan_asset(
    fs: &dyn FileSystem,
    config: &ResolvedConfig,
    kind: AssetKind,
) -> Result<AssetPlan> {
    let tool = config.tool(kind);
    if !fs.exists(&tool.source_directory) {
        return Ok(AssetPlan::Skip(SkipReason::MissingSourceDirectory(
            tool.source_directory.clone(),
        )));
    }

    let inputs = resolve_inputs(fs, tool, kind)?;
    if inputs.is_empty() {
        return Ok(AssetPlan::Skip(SkipReason::NoInputFiles));
    }

    let output = config.bundle_path(kind);
    let invocation = build_invocation(kind, tool, &output, &inputs);
    Ok(AssetPlan::Run { output, invocation })
}

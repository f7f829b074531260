// src/engine/orchestrator.rs

use std::fmt;
use std::path::Path;

use tracing::{debug, info};

use crate::config::ResolvedConfig;
use crate::errors::{Result, WebOptimizerError};
use crate::exec::ToolRunner;
use crate::fs::FileSystem;
use crate::types::AssetKind;

use super::plan::{AssetPlan, plan_asset};
use super::{AssetOutcome, RunSummary, SkipReason};

/// Runs the JS step and then the CSS step against a resolved configuration,
/// delegating process execution to a [`ToolRunner`].
///
/// The first error aborts the run; CSS is never attempted after a JS
/// failure.
pub struct Orchestrator<'a, R: ToolRunner> {
    config: &'a ResolvedConfig,
    fs: &'a dyn FileSystem,
    runner: R,
}

impl<R: ToolRunner> fmt::Debug for Orchestrator<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orchestrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<'a, R: ToolRunner> Orchestrator<'a, R> {
    pub fn new(config: &'a ResolvedConfig, fs: &'a dyn FileSystem, runner: R) -> Self {
        Self { config, fs, runner }
    }

    /// Process every asset kind in order.
    pub async fn run(mut self) -> Result<RunSummary> {
        info!("JavaScript: {}", self.config.js.source_directory.display());
        info!("CSS: {}", self.config.css.source_directory.display());
        info!("Output: {}", self.config.output_directory.display());

        self.prepare_output_dirs()?;

        let mut summary = RunSummary::default();
        for kind in AssetKind::ALL {
            let outcome = self.process(kind).await?;
            summary.outcomes.push((kind, outcome));
        }

        debug!(processed = summary.processed_count(), "all asset kinds handled");
        Ok(summary)
    }

    async fn process(&mut self, kind: AssetKind) -> Result<AssetOutcome> {
        let tool = self.config.tool(kind);

        if !self.fs.exists(&tool.source_directory) {
            info!(
                kind = %kind,
                "{} source directory ({}) does not exist - skipping {} run",
                kind.label(),
                tool.source_directory.display(),
                kind.tool_name()
            );
            return Ok(AssetOutcome::Skipped(SkipReason::MissingSourceDirectory(
                tool.source_directory.clone(),
            )));
        }

        let output = self.config.bundle_path(kind);
        info!(
            kind = %kind,
            "Processing {} files (using {}) to {}",
            kind.label(),
            tool.binary,
            output.display()
        );

        match plan_asset(self.fs, self.config, kind)? {
            AssetPlan::Skip(reason) => {
                info!(kind = %kind, "No input files, skipping {} run", kind.tool_name());
                Ok(AssetOutcome::Skipped(reason))
            }
            AssetPlan::Run { invocation, .. } => {
                let result = self.runner.run(&invocation).await?;
                Ok(AssetOutcome::Processed { invocation, result })
            }
        }
    }

    /// Create the bundle directory of every kind whose source directory
    /// exists. Runs before any tool so a failure leaves no partial output.
    fn prepare_output_dirs(&self) -> Result<()> {
        for kind in AssetKind::ALL {
            if self.fs.exists(&self.config.tool(kind).source_directory) {
                self.ensure_parent_dir(&self.config.bundle_path(kind))?;
            }
        }
        Ok(())
    }

    fn ensure_parent_dir(&self, output: &Path) -> Result<()> {
        let Some(dir) = output.parent() else {
            return Ok(());
        };
        debug!("Output directory: {}", dir.display());
        if self.fs.is_dir(dir) {
            return Ok(());
        }
        self.fs
            .create_dir_all(dir)
            .map_err(|source| WebOptimizerError::DirectoryCreation {
                path: dir.to_path_buf(),
                source,
            })
    }
}

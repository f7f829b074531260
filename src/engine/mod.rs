// src/engine/mod.rs

//! Orchestration engine for web-optimizer.
//!
//! Processing is linear: JS first, then CSS, each either skipped or run to
//! completion. Any failure aborts the whole run.
//!
//! The side-effect free planning step (input resolution and argument
//! building) lives in [`plan`]; the IO shell that creates directories and
//! runs the tools is [`orchestrator`].

use std::path::PathBuf;

use crate::exec::{ProcessResult, ToolInvocation};
use crate::types::AssetKind;

/// Why an asset kind was not processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The configured source directory does not exist.
    MissingSourceDirectory(PathBuf),
    /// No input files were found or all listed files were missing.
    NoInputFiles,
}

/// What happened to one asset kind during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOutcome {
    Skipped(SkipReason),
    Processed {
        invocation: ToolInvocation,
        result: ProcessResult,
    },
}

/// Per-kind outcomes of a successful run, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<(AssetKind, AssetOutcome)>,
}

impl RunSummary {
    pub fn outcome(&self, kind: AssetKind) -> Option<&AssetOutcome> {
        self.outcomes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, outcome)| outcome)
    }

    /// Number of tool processes that ran.
    pub fn processed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, AssetOutcome::Processed { .. }))
            .count()
    }
}

pub mod orchestrator;
pub mod plan;

pub use orchestrator::Orchestrator;
pub use plan::{AssetPlan, plan_asset, resolve_inputs};

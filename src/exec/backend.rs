// src/exec/backend.rs

//! Pluggable tool runner abstraction.
//!
//! The orchestrator talks to a `ToolRunner` instead of spawning processes
//! itself. Production code uses [`ProcessRunner`]; tests can substitute a
//! runner that records invocations and reports canned exit codes.

use std::future::Future;
use std::pin::Pin;

use crate::errors::Result;

use super::invocation::ToolInvocation;
use super::runner::{ProcessResult, run_tool};

/// Trait abstracting how a tool invocation is executed.
pub trait ToolRunner: Send {
    /// Run the invocation to completion.
    ///
    /// Implementations must fail for any non-zero exit code, so that the
    /// orchestrator can treat `Ok` as "the bundle was written".
    fn run<'a>(
        &'a mut self,
        invocation: &'a ToolInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessResult>> + Send + 'a>>;
}

/// Real runner used in production: spawns the tool as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessRunner {
    fn run<'a>(
        &'a mut self,
        invocation: &'a ToolInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessResult>> + Send + 'a>> {
        Box::pin(run_tool(invocation))
    }
}

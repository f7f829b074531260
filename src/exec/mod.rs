// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`invocation`] builds the argument vectors for the JS and CSS minifiers.
//! - [`runner`] spawns a tool, drains its merged stdout/stderr and checks the
//!   exit code.
//! - [`backend`] provides the `ToolRunner` trait and the production
//!   `ProcessRunner`, which tests can replace with a fake implementation.

pub mod backend;
pub mod invocation;
pub mod runner;

pub use backend::{ProcessRunner, ToolRunner};
pub use invocation::{
    SKIP_REBASE_FLAG, ToolInvocation, build_css_invocation, build_invocation, build_js_invocation,
};
pub use runner::{ProcessResult, execute, run_tool};

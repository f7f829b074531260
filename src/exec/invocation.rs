// src/exec/invocation.rs

//! Argument vectors for the external minifiers.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ResolvedToolConfig;
use crate::types::AssetKind;

/// Flag telling the CSS minifier not to rewrite relative URLs.
pub const SKIP_REBASE_FLAG: &str = "--skip-rebase";

/// A program plus its full argument vector. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// JS: `<options...> -o <output> <inputs...>`.
pub fn build_js_invocation(
    binary: &str,
    options: &[String],
    output: &Path,
    inputs: &[PathBuf],
) -> ToolInvocation {
    let mut args = options.to_vec();
    push_output_and_inputs(&mut args, output, inputs);
    ToolInvocation::new(binary, args)
}

/// CSS: `[--skip-rebase] <options...> -o <output> <inputs...>`.
pub fn build_css_invocation(
    binary: &str,
    rebase: bool,
    options: &[String],
    output: &Path,
    inputs: &[PathBuf],
) -> ToolInvocation {
    let mut args = Vec::with_capacity(options.len() + inputs.len() + 3);
    if !rebase {
        args.push(SKIP_REBASE_FLAG.to_string());
    }
    args.extend(options.iter().cloned());
    push_output_and_inputs(&mut args, output, inputs);
    ToolInvocation::new(binary, args)
}

/// Build the invocation for `kind` from its resolved settings.
///
/// Callers must not call this with an empty `inputs` list; an empty run is
/// skipped before it gets here.
pub fn build_invocation(
    kind: AssetKind,
    tool: &ResolvedToolConfig,
    output: &Path,
    inputs: &[PathBuf],
) -> ToolInvocation {
    match kind {
        AssetKind::Js => build_js_invocation(&tool.binary, &tool.options, output, inputs),
        AssetKind::Css => {
            build_css_invocation(&tool.binary, tool.rebase, &tool.options, output, inputs)
        }
    }
}

fn push_output_and_inputs(args: &mut Vec<String>, output: &Path, inputs: &[PathBuf]) {
    args.push("-o".to_string());
    args.push(path_arg(output));
    args.extend(inputs.iter().map(|p| path_arg(p)));
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

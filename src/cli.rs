// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `web-optimizer`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "web-optimizer",
    version,
    about = "Bundle and minify JavaScript and CSS with uglifyjs and cleancss.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML), relative to the base dir.
    ///
    /// Default: `WebOptimizer.toml` in the base dir, if present. An explicitly
    /// given file must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project base directory. Defaults to the current working directory.
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Build final name; the default output directory is
    /// `target/<final-name>`. Defaults to the base dir's name.
    #[arg(long, value_name = "NAME")]
    pub final_name: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WEB_OPTIMIZER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve config and inputs, print the tool invocations, run nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WebOptimizerError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Source discovery failed (root missing or not traversable).
    #[error("Failed to find source files under {}", .root.display())]
    Discovery {
        root: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The directory a bundle is written into could not be created.
    #[error("Failed to create directory {}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// An external tool could not be started, was interrupted, or exited
    /// with a non-zero code.
    #[error("{tool} failed{}", exit_code_suffix(.exit_code))]
    ToolInvocation {
        tool: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl WebOptimizerError {
    /// Exit code reported by a failed tool, if the tool got that far.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            WebOptimizerError::ToolInvocation { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}

fn exit_code_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" with exit code {code}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, WebOptimizerError>;

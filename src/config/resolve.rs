// src/config/resolve.rs

//! Turn a validated [`ConfigFile`] into the effective, immutable settings for
//! one run.
//!
//! Resolution happens once, up front: platform default binaries are chosen,
//! option strings are split, and every relative directory is anchored at the
//! project base dir. The orchestrator only ever reads the result.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::config::model::ConfigFile;
use crate::types::{AssetKind, Platform};

/// Default JS minifier options when `[js].options` is not set.
pub const DEFAULT_JS_OPTIONS: &str = "-c -m";

static OPTION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("option separator regex is valid"));

/// What the host build supplies about the project being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    /// Project base directory. Relative config paths are resolved against it.
    pub base_dir: PathBuf,
    /// Build final name, used for the default output directory
    /// `target/<final_name>`.
    pub final_name: String,
}

impl HostContext {
    pub fn new(base_dir: impl Into<PathBuf>, final_name: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            final_name: final_name.into(),
        }
    }
}

/// Effective settings for one asset kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedToolConfig {
    pub binary: String,
    pub options: Vec<String>,
    pub source_directory: PathBuf,
    pub source_files: Option<Vec<String>>,
    pub output_name: String,
    /// Only meaningful for CSS; always `false` for JS.
    pub rebase: bool,
}

/// Effective settings for a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_dir: PathBuf,
    pub output_directory: PathBuf,
    pub js: ResolvedToolConfig,
    pub css: ResolvedToolConfig,
}

impl ResolvedConfig {
    pub fn resolve(cfg: &ConfigFile, host: &HostContext, platform: Platform) -> Self {
        let base_dir = host.base_dir.clone();

        let output_directory = match cfg.output_directory() {
            Some(dir) => anchor(&base_dir, dir),
            None => base_dir.join("target").join(&host.final_name),
        };

        let js_section = cfg.js();
        let js = ResolvedToolConfig {
            binary: resolve_binary(js_section.binary.as_deref(), platform, AssetKind::Js),
            options: split_options(
                js_section.options.as_deref().unwrap_or(DEFAULT_JS_OPTIONS),
            ),
            source_directory: resolve_source_dir(
                &base_dir,
                js_section.source_directory.as_deref(),
                AssetKind::Js,
            ),
            source_files: js_section.source_files.clone(),
            output_name: resolve_output_name(js_section.output_name.as_deref(), AssetKind::Js),
            rebase: false,
        };

        let css_section = cfg.css();
        let css = ResolvedToolConfig {
            binary: resolve_binary(css_section.binary.as_deref(), platform, AssetKind::Css),
            options: split_options(css_section.options.as_deref().unwrap_or_default()),
            source_directory: resolve_source_dir(
                &base_dir,
                css_section.source_directory.as_deref(),
                AssetKind::Css,
            ),
            source_files: css_section.source_files.clone(),
            output_name: resolve_output_name(css_section.output_name.as_deref(), AssetKind::Css),
            rebase: css_section.rebase,
        };

        Self {
            base_dir,
            output_directory,
            js,
            css,
        }
    }

    pub fn tool(&self, kind: AssetKind) -> &ResolvedToolConfig {
        match kind {
            AssetKind::Js => &self.js,
            AssetKind::Css => &self.css,
        }
    }

    /// Absolute path of the bundle written for `kind`.
    pub fn bundle_path(&self, kind: AssetKind) -> PathBuf {
        self.output_directory.join(&self.tool(kind).output_name)
    }
}

/// Split an option string on runs of spaces and tabs.
///
/// A blank string yields no options.
pub fn split_options(options: &str) -> Vec<String> {
    let trimmed = options.trim_matches(|c: char| c == ' ' || c == '\t');
    if trimmed.is_empty() {
        return Vec::new();
    }
    OPTION_SEPARATOR
        .split(trimmed)
        .map(str::to_string)
        .collect()
}

fn resolve_binary(configured: Option<&str>, platform: Platform, kind: AssetKind) -> String {
    match configured {
        Some(binary) => binary.trim().to_string(),
        None => platform.default_binary(kind).to_string(),
    }
}

fn resolve_source_dir(base_dir: &Path, configured: Option<&Path>, kind: AssetKind) -> PathBuf {
    match configured {
        Some(dir) => anchor(base_dir, dir),
        None => base_dir.join(kind.default_source_directory()),
    }
}

fn resolve_output_name(configured: Option<&str>, kind: AssetKind) -> String {
    configured
        .map(str::to_string)
        .unwrap_or_else(|| kind.default_output_name().to_string())
}

fn anchor(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

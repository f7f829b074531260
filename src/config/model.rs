// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// output_directory = "target/site"
///
/// [js]
/// options = "-c -m --stats"
/// source_files = ["lib.js", "app/main.js"]
///
/// [css]
/// options = "-d"
/// rebase = false
/// ```
///
/// Every key is optional; missing values are filled in when the config is
/// resolved against the project (see [`crate::config::resolve`]).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    /// Base directory for all generated bundles.
    ///
    /// Relative paths are resolved against the project base dir. Defaults to
    /// `target/<final-name>`.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// `[js]` section.
    #[serde(default)]
    pub js: JsSection,

    /// `[css]` section.
    #[serde(default)]
    pub css: CssSection,
}

/// Validated configuration.
///
/// Only constructed through `TryFrom<RawConfigFile>` (see `validate.rs`), so
/// holders can rely on output names being safe relative paths.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    output_directory: Option<PathBuf>,
    js: JsSection,
    css: CssSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        output_directory: Option<PathBuf>,
        js: JsSection,
        css: CssSection,
    ) -> Self {
        Self {
            output_directory,
            js,
            css,
        }
    }

    pub fn output_directory(&self) -> Option<&PathBuf> {
        self.output_directory.as_ref()
    }

    pub fn js(&self) -> &JsSection {
        &self.js
    }

    pub fn css(&self) -> &CssSection {
        &self.css
    }
}

/// `[js]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsSection {
    /// Minifier executable; if `None`, the platform default is used.
    #[serde(default)]
    pub binary: Option<String>,

    /// Option string, split on spaces/tabs.
    ///
    /// `None` means the default `-c -m`; an empty string means no options.
    #[serde(default)]
    pub options: Option<String>,

    #[serde(default)]
    pub source_directory: Option<PathBuf>,

    /// Explicit inputs, relative to `source_directory`, in bundle order.
    ///
    /// When absent, the source directory is searched for `*.js`.
    #[serde(default)]
    pub source_files: Option<Vec<String>>,

    #[serde(default)]
    pub output_name: Option<String>,
}

/// `[css]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CssSection {
    #[serde(default)]
    pub binary: Option<String>,

    /// Option string, split on spaces/tabs. No options by default.
    #[serde(default)]
    pub options: Option<String>,

    #[serde(default)]
    pub source_directory: Option<PathBuf>,

    /// Explicit inputs, relative to `source_directory`, in bundle order.
    #[serde(default)]
    pub source_files: Option<Vec<String>>,

    #[serde(default)]
    pub output_name: Option<String>,

    /// Let the CSS minifier rebase relative URLs. When `false`,
    /// `--skip-rebase` is passed.
    #[serde(default)]
    pub rebase: bool,
}

// src/types.rs

use std::fmt;

/// The two asset kinds handled by the optimizer.
///
/// Each kind carries its own defaults: the extension used for discovery, the
/// name of the external minifier, the bundle name and the conventional source
/// directory relative to the project base dir.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Js,
    Css,
}

impl AssetKind {
    /// Processing order. JS always completes before CSS starts.
    pub const ALL: [AssetKind; 2] = [AssetKind::Js, AssetKind::Css];

    /// Extension (with leading dot) used when discovering sources.
    pub fn extension(self) -> &'static str {
        match self {
            AssetKind::Js => ".js",
            AssetKind::Css => ".css",
        }
    }

    /// Base name of the external minifier for this kind.
    pub fn tool_name(self) -> &'static str {
        match self {
            AssetKind::Js => "uglifyjs",
            AssetKind::Css => "cleancss",
        }
    }

    pub fn default_output_name(self) -> &'static str {
        match self {
            AssetKind::Js => "app.js",
            AssetKind::Css => "app.css",
        }
    }

    pub fn default_source_directory(self) -> &'static str {
        match self {
            AssetKind::Js => "src/main/javascript",
            AssetKind::Css => "src/main/css",
        }
    }

    /// Human readable label for log lines.
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Js => "JavaScript",
            AssetKind::Css => "CSS",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Js => f.write_str("js"),
            AssetKind::Css => f.write_str("css"),
        }
    }
}

/// Normalized host platform, used to pick default minifier binary names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform of the running process.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Normalize an OS name such as `"windows"`, `"Windows 10"` or `"linux"`.
    pub fn from_os_name(name: &str) -> Self {
        if name.to_lowercase().contains("windows") {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Default executable for `kind` on this platform.
    ///
    /// npm installs the minifiers as `.cmd` shims on Windows.
    pub fn default_binary(self, kind: AssetKind) -> &'static str {
        match (self, kind) {
            (Platform::Windows, AssetKind::Js) => "uglifyjs.cmd",
            (Platform::Windows, AssetKind::Css) => "cleancss.cmd",
            (Platform::Unix, AssetKind::Js) => "uglifyjs",
            (Platform::Unix, AssetKind::Css) => "cleancss",
        }
    }
}

#![allow(dead_code)]

use std::path::PathBuf;

use web_optimizer::config::{ConfigFile, RawConfigFile};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_directory = Some(dir.into());
        self
    }

    pub fn js_binary(mut self, binary: &str) -> Self {
        self.config.js.binary = Some(binary.to_string());
        self
    }

    pub fn js_options(mut self, options: &str) -> Self {
        self.config.js.options = Some(options.to_string());
        self
    }

    pub fn js_source_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.js.source_directory = Some(dir.into());
        self
    }

    pub fn js_source_file(mut self, name: &str) -> Self {
        self.config
            .js
            .source_files
            .get_or_insert_with(Vec::new)
            .push(name.to_string());
        self
    }

    pub fn js_output_name(mut self, name: &str) -> Self {
        self.config.js.output_name = Some(name.to_string());
        self
    }

    pub fn css_binary(mut self, binary: &str) -> Self {
        self.config.css.binary = Some(binary.to_string());
        self
    }

    pub fn css_options(mut self, options: &str) -> Self {
        self.config.css.options = Some(options.to_string());
        self
    }

    pub fn css_source_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.css.source_directory = Some(dir.into());
        self
    }

    pub fn css_source_file(mut self, name: &str) -> Self {
        self.config
            .css
            .source_files
            .get_or_insert_with(Vec::new)
            .push(name.to_string());
        self
    }

    pub fn css_output_name(mut self, name: &str) -> Self {
        self.config.css.output_name = Some(name.to_string());
        self
    }

    pub fn css_rebase(mut self, rebase: bool) -> Self {
        self.config.css.rebase = rebase;
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

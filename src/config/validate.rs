// src/config/validate.rs

use std::path::{Component, Path};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, WebOptimizerError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = WebOptimizerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(
            raw.output_directory,
            raw.js,
            raw.css,
        ))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_section(
        "js",
        cfg.js.binary.as_deref(),
        cfg.js.output_name.as_deref(),
        cfg.js.source_files.as_deref(),
    )?;
    validate_section(
        "css",
        cfg.css.binary.as_deref(),
        cfg.css.output_name.as_deref(),
        cfg.css.source_files.as_deref(),
    )?;
    Ok(())
}

fn validate_section(
    section: &str,
    binary: Option<&str>,
    output_name: Option<&str>,
    source_files: Option<&[String]>,
) -> Result<()> {
    if let Some(binary) = binary {
        if binary.trim().is_empty() {
            return Err(WebOptimizerError::ConfigError(format!(
                "[{section}].binary must not be blank"
            )));
        }
    }

    if let Some(name) = output_name {
        validate_output_name(section, name)?;
    }

    for file in source_files.unwrap_or_default() {
        if file.trim().is_empty() {
            return Err(WebOptimizerError::ConfigError(format!(
                "[{section}].source_files contains an empty entry"
            )));
        }
    }

    Ok(())
}

/// Output names are joined onto the output directory, so they must stay
/// inside it.
fn validate_output_name(section: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(WebOptimizerError::ConfigError(format!(
            "[{section}].output_name must not be empty"
        )));
    }

    let path = Path::new(name);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(WebOptimizerError::ConfigError(format!(
            "[{section}].output_name '{name}' must be a relative path inside the output directory"
        )));
    }

    Ok(())
}

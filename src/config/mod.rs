// src/config/mod.rs

//! Configuration loading, validation and resolution for web-optimizer.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate output names and binaries (`validate.rs`).
//! - Resolve defaults against the project into a [`ResolvedConfig`]
//!   (`resolve.rs`).

pub mod loader;
pub mod model;
pub mod resolve;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{ConfigFile, CssSection, JsSection, RawConfigFile};
pub use resolve::{HostContext, ResolvedConfig, ResolvedToolConfig, split_options};

// src/discover/mod.rs

//! Input discovery for the minifier runs.
//!
//! - [`locator`] walks a source directory and returns every file with a given
//!   extension, deepest paths first.
//! - [`inputs`] resolves an explicitly configured file list against a source
//!   directory, skipping entries that do not exist.

pub mod inputs;
pub mod locator;

pub use inputs::resolve_listed_files;
pub use locator::{find_source_files, path_depth};

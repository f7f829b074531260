// src/discover/inputs.rs

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::fs::FileSystem;

/// Resolve configured file names against `source_dir`, keeping the
/// configured order.
///
/// Missing entries are logged and skipped; they never fail the run.
pub fn resolve_listed_files(
    fs: &dyn FileSystem,
    source_dir: &Path,
    names: &[String],
) -> Vec<PathBuf> {
    names
        .iter()
        .filter_map(|name| {
            let file = source_dir.join(name);
            if fs.exists(&file) {
                Some(file)
            } else {
                warn!(path = ?file, "{} does not exist - skipping it", file.display());
                None
            }
        })
        .collect()
}

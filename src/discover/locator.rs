// src/discover/locator.rs

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::debug;

use crate::fs::FileSystem;

/// Collect every regular file under `root` whose name ends with `extension`
/// (including the leading dot, e.g. `".js"`).
///
/// The result is ordered deepest path first; paths of equal depth are
/// ordered lexicographically by their full path. Bundles are concatenated in
/// this order, so it must stay stable across runs and platforms.
///
/// Symlinked directories are not descended into; a symlink to a regular
/// file is kept like any other file.
///
/// Fails if `root` does not exist or any directory below it cannot be read.
pub fn find_source_files(
    fs: &dyn FileSystem,
    root: &Path,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(dir) = stack.pop() {
        for path in fs.read_dir(&dir)? {
            if fs.is_symlink(&path) && fs.is_dir(&path) {
                debug!(path = ?path, "not following symlinked directory");
            } else if fs.is_dir(&path) {
                stack.push(path);
            } else if fs.is_file(&path) && has_extension(&path, extension) {
                files.push(path);
            }
        }
    }

    files.sort_by(|a, b| compare_discovered(a, b));
    debug!(root = ?root, extension, count = files.len(), "discovered source files");

    Ok(files)
}

/// Number of components in `path`.
pub fn path_depth(path: &Path) -> usize {
    path.components().count()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

fn compare_discovered(a: &Path, b: &Path) -> Ordering {
    path_depth(b)
        .cmp(&path_depth(a))
        .then_with(|| a.as_os_str().cmp(b.as_os_str()))
}

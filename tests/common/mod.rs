#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub use web_optimizer_test_utils::{init_tracing, write_tree};

/// Path of a helper script shipped under `demos/`.
pub fn demo_script(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name)
}

/// Option string that makes `sh` run the given demo script with `extra`
/// flags after it.
pub fn script_options(name: &str, extra: &str) -> String {
    format!("{} {extra}", demo_script(name).display())
}

pub fn js_dir(base: &Path) -> PathBuf {
    base.join("src/main/javascript")
}

pub fn css_dir(base: &Path) -> PathBuf {
    base.join("src/main/css")
}

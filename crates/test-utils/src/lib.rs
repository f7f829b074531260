pub mod builders;
pub mod fake_runner;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// - Uses `with_test_writer()`, so logs are captured per-test.
/// - The Rust test harness only prints captured output for **failing** tests
///   (unless you run with `-- --nocapture`).
///
/// Enable levels with e.g.:
/// `RUST_LOG=debug cargo test`
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // print only for failing tests unless --nocapture
            .with_target(true)
            .init();
    });
}

/// Create each relative path under `root` as a small file, making parent
/// directories as needed. Returns the absolute paths in the given order.
pub fn write_tree(root: &Path, files: &[&str]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|rel| {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("create parent dirs");
            }
            fs::write(&path, format!("/* {rel} */\n")).expect("write test file");
            path
        })
        .collect()
}

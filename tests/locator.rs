// tests/locator.rs

mod common;
use crate::common::{init_tracing, write_tree};

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use web_optimizer::discover::find_source_files;
use web_optimizer::fs::RealFileSystem;
use web_optimizer::fs::mock::MockFileSystem;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn deeper_files_come_before_shallower_ones() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    write_tree(dir.path(), &["c.js", "a/b.js"]);

    let files = find_source_files(&RealFileSystem, dir.path(), ".js")?;

    assert_eq!(files, vec![dir.path().join("a/b.js"), dir.path().join("c.js")]);
    Ok(())
}

#[test]
fn equal_depth_paths_are_ordered_lexicographically() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    write_tree(
        dir.path(),
        &["b.js", "a.js", "lib/z.js", "lib/y.js", "lib/x/deep.js"],
    );

    let files = find_source_files(&RealFileSystem, dir.path(), ".js")?;
    let rel: Vec<String> = files
        .iter()
        .map(|p| {
            p.strip_prefix(dir.path())
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();

    assert_eq!(
        rel,
        vec!["lib/x/deep.js", "lib/y.js", "lib/z.js", "a.js", "b.js"]
    );
    Ok(())
}

#[test]
fn only_regular_files_with_the_extension_are_returned() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    write_tree(
        dir.path(),
        &["app.js", "style.css", "notes.js.txt", "weird.js/inner.js", "weird.js/readme.md"],
    );
    fs::create_dir_all(dir.path().join("empty.js"))?;

    let files = find_source_files(&RealFileSystem, dir.path(), ".js")?;

    assert_eq!(
        files,
        vec![dir.path().join("weird.js/inner.js"), dir.path().join("app.js")]
    );

    let css = find_source_files(&RealFileSystem, dir.path(), ".css")?;
    assert_eq!(css, vec![dir.path().join("style.css")]);
    Ok(())
}

#[test]
fn missing_root_is_an_error() -> TestResult {
    init_tracing();

    let dir = tempdir()?;
    let result = find_source_files(&RealFileSystem, &dir.path().join("nope"), ".js");

    assert!(result.is_err());
    Ok(())
}

#[test]
fn mock_filesystem_discovery() -> TestResult {
    let fs = MockFileSystem::new();
    fs.add_file("./src/a.js");
    fs.add_file("./src/x/b.js");
    fs.add_file("./src/x/b.css");
    fs.add_file("./README.md");
    fs.add_dir("./src/empty");

    let files = find_source_files(&fs, &PathBuf::from("."), ".js")?;

    assert_eq!(
        files,
        vec![PathBuf::from("./src/x/b.js"), PathBuf::from("./src/a.js")]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_directories_are_not_followed() -> TestResult {
    use std::os::unix::fs::symlink;

    init_tracing();

    let dir = tempdir()?;
    write_tree(dir.path(), &["a/x.js", "b.js"]);
    symlink(dir.path().join("a"), dir.path().join("a/loop"))?;

    let outside = tempdir()?;
    write_tree(outside.path(), &["vendor.js"]);
    symlink(outside.path(), dir.path().join("linked"))?;

    let files = find_source_files(&RealFileSystem, dir.path(), ".js")?;

    assert_eq!(files, vec![dir.path().join("a/x.js"), dir.path().join("b.js")]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlinked_files_are_kept() -> TestResult {
    use std::os::unix::fs::symlink;

    init_tracing();

    let dir = tempdir()?;
    write_tree(dir.path(), &["real.js"]);
    let outside = tempdir()?;
    write_tree(outside.path(), &["vendor.js"]);
    symlink(outside.path().join("vendor.js"), dir.path().join("vendor.js"))?;

    let files = find_source_files(&RealFileSystem, dir.path(), ".js")?;

    assert_eq!(
        files,
        vec![dir.path().join("real.js"), dir.path().join("vendor.js")]
    );
    Ok(())
}

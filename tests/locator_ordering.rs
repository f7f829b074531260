// tests/locator_ordering.rs

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;
use web_optimizer::discover::{find_source_files, path_depth};
use web_optimizer::fs::mock::MockFileSystem;

// Directory names never contain a dot and file names always do, so a
// generated file can never collide with a generated directory.
fn relative_file_strategy() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec("[a-c]{1,2}", 0..4),
        "[a-c]{1,3}",
        prop_oneof![Just(".js"), Just(".css"), Just(".txt")],
    )
        .prop_map(|(dirs, stem, ext)| {
            let mut path = String::from(".");
            for dir in dirs {
                path.push('/');
                path.push_str(&dir);
            }
            path.push('/');
            path.push_str(&stem);
            path.push_str(ext);
            path
        })
}

proptest! {
    #[test]
    fn locator_returns_all_matches_deepest_first(
        files in proptest::collection::vec(relative_file_strategy(), 0..24)
    ) {
        let fs = MockFileSystem::new();
        for file in &files {
            fs.add_file(file);
        }

        let root = PathBuf::from(".");
        let found = find_source_files(&fs, &root, ".js").unwrap();

        let expected: BTreeSet<PathBuf> = files
            .iter()
            .filter(|f| f.ends_with(".js"))
            .map(PathBuf::from)
            .collect();
        prop_assert_eq!(found.len(), expected.len());
        let actual: BTreeSet<PathBuf> = found.iter().cloned().collect();
        prop_assert_eq!(actual, expected);

        for pair in found.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let (da, db) = (path_depth(a), path_depth(b));
            prop_assert!(
                da > db || (da == db && a.as_os_str() < b.as_os_str()),
                "{:?} (depth {}) sorted before {:?} (depth {})",
                a, da, b, db
            );
        }

        let again = find_source_files(&fs, &root, ".js").unwrap();
        prop_assert_eq!(again, found);
    }
}

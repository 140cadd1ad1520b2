//! Property tests for whole-session evaluation.

use std::collections::BTreeSet;
use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use mason::{EvaluationSession, ProjectDescription};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,7}").unwrap()
}

/// A small unique tree of source files, at most two levels deep. Directory
/// names never end in `.cs`, so files and directories cannot collide.
fn source_tree() -> impl Strategy<Value = BTreeSet<String>> {
    let file = (proptest::option::of(segment()), segment()).prop_map(|(dir, stem)| match dir {
        Some(dir) => format!("{dir}/{stem}.cs"),
        None => format!("{stem}.cs"),
    });
    proptest::collection::btree_set(file, 0..=12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 24,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Evaluating the same project twice over an unchanged tree
    /// yields equal results and equal fingerprints.
    #[test]
    fn property_evaluation_is_idempotent(
        tree in source_tree()
    ) {
        let dir = tempdir().unwrap();
        for rel in &tree {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "class C {}").unwrap();
        }

        let project = ProjectDescription::new(dir.path(), "netstandard1.5");
        let session = EvaluationSession::new();
        let first = session.evaluate(&project).unwrap();
        let second = session.evaluate(&project).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.fingerprint(), second.fingerprint());
        // Every file outside the default-excluded folders is discovered
        // exactly once. Generated directory names can collide with them.
        let expected = tree
            .iter()
            .filter(|rel| {
                !["bin/", "obj/", "packages/"]
                    .iter()
                    .any(|prefix| rel.starts_with(prefix))
            })
            .count();
        prop_assert_eq!(first.items.len(), expected);
    }

    /// PROPERTY: Every evaluated item matches the conventional include and
    /// lives outside the default-excluded folders.
    #[test]
    fn property_items_respect_default_excludes(
        tree in source_tree()
    ) {
        let dir = tempdir().unwrap();
        for rel in &tree {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "class C {}").unwrap();
        }
        // Junk that must never be compiled.
        for folder in ["bin", "obj", "packages"] {
            let junk = dir.path().join(folder).join("junk.cs");
            fs::create_dir_all(junk.parent().unwrap()).unwrap();
            fs::write(junk, "!InvalidCSharp!").unwrap();
        }

        let project = ProjectDescription::new(dir.path(), "net45");
        let result = EvaluationSession::new().evaluate(&project).unwrap();

        for item in &result.items {
            let first = item.components().next().unwrap();
            let first = first.as_os_str().to_string_lossy();
            prop_assert!(first != "bin" && first != "obj" && first != "packages");
            prop_assert!(item.extension().is_some_and(|e| e == "cs"));
        }
    }
}

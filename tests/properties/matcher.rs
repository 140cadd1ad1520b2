//! Property tests for path matching.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use mason::{MasonError, PathMatcher};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,7}").unwrap()
}

/// Relative source paths like `a/b/c.cs`, one to three segments deep.
fn source_path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 1..=3)
        .prop_map(|segments| format!("{}.cs", segments.join("/")))
}

fn matcher(includes: &[&str], excludes: &[&str]) -> PathMatcher {
    let includes: Vec<String> = includes.iter().map(|p| p.to_string()).collect();
    let excludes: Vec<String> = excludes.iter().map(|p| p.to_string()).collect();
    PathMatcher::new(Path::new("/project"), &includes, &excludes).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An excluded subtree never contributes items, no matter
    /// what paths are enumerated.
    #[test]
    fn property_excluded_subtree_never_selected(
        paths in proptest::collection::vec(source_path(), 0..=16)
    ) {
        let m = matcher(&["**/*.cs"], &["skip/**"]);
        let skipped: Vec<String> = paths.iter().map(|p| format!("skip/{p}")).collect();

        let all: Vec<&str> = paths
            .iter()
            .map(String::as_str)
            .chain(skipped.iter().map(String::as_str))
            .collect();
        let selected = m.select(all);

        for item in &selected {
            prop_assert!(!item.starts_with("skip"));
        }
        // Everything outside the excluded subtree is still selected.
        prop_assert_eq!(
            selected.len(),
            paths.iter().filter(|p| !p.starts_with("skip/")).count()
        );
    }

    /// PROPERTY: Selection is deterministic and order-preserving.
    #[test]
    fn property_selection_is_deterministic(
        paths in proptest::collection::vec(source_path(), 0..=16)
    ) {
        let m = matcher(&["**/*.cs"], &["bin/**", "obj/**", "packages/**"]);
        let first = m.select(paths.clone());
        let second = m.select(paths.clone());
        prop_assert_eq!(&first, &second);

        // Order preservation: selected items appear in input order.
        let mut cursor = 0;
        for path in &paths {
            let candidate = PathBuf::from(path);
            if first.get(cursor) == Some(&candidate) {
                cursor += 1;
            }
        }
        prop_assert_eq!(cursor, first.len());
    }

    /// PROPERTY: Matcher construction never panics; invalid patterns come
    /// back as `InvalidPattern`, not as a crash.
    #[test]
    fn property_matcher_construction_never_panics(
        patterns in proptest::collection::vec("(?s).{0,32}", 0..=4)
    ) {
        let result = PathMatcher::new(Path::new("/project"), &patterns, &[]);
        if let Err(err) = result {
            let is_expected_err = matches!(
                err,
                MasonError::InvalidPattern { .. } | MasonError::MatcherBuild(_)
            );
            prop_assert!(is_expected_err);
        }
    }
}

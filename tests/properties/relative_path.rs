//! Property tests for manifest path relativization.

use std::path::PathBuf;

use proptest::prelude::*;

use assetmap::relative_path;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=max)
}

fn absolute(parts: &[String]) -> PathBuf {
    let mut path = PathBuf::from("/");
    path.extend(parts);
    path
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a path below the root relativizes to its tail, `/`-joined.
    #[test]
    fn property_descendant_is_tail(
        root in segments(4),
        tail in segments(4),
    ) {
        let full: Vec<String> = root.iter().chain(tail.iter()).cloned().collect();

        let rel = relative_path(&absolute(&root), &absolute(&full));

        prop_assert_eq!(rel, tail.join("/"));
    }

    /// PROPERTY: joining the relative result back onto the root lands on the path.
    #[test]
    fn property_join_round_trip(
        shared in segments(3),
        root_tail in segments(3),
        path_tail in segments(3),
    ) {
        let root: Vec<String> = shared.iter().chain(root_tail.iter()).cloned().collect();
        let path: Vec<String> = shared.iter().chain(path_tail.iter()).cloned().collect();

        let rel = relative_path(&absolute(&root), &absolute(&path));

        let mut joined: Vec<String> = root.clone();
        for part in rel.split('/').filter(|p| !p.is_empty()) {
            if part == ".." {
                joined.pop();
            } else {
                joined.push(part.to_string());
            }
        }
        prop_assert_eq!(joined, path);
    }

    /// PROPERTY: results never use the platform separator or start with `/`
    /// for paths sharing the root.
    #[test]
    fn property_forward_slashes_only(
        root in segments(4),
        path in segments(4),
    ) {
        let rel = relative_path(&absolute(&root), &absolute(&path));

        prop_assert!(!rel.contains('\\'));
        prop_assert!(!rel.starts_with('/'));
    }
}

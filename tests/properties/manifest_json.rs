//! Property tests for manifest and snapshot JSON handling.

use indexmap::IndexMap;
use proptest::prelude::*;

use assetmap::{BuildSnapshot, Formatter, JsonFormatter, ManifestResult};

fn file_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,8}(/[A-Za-z0-9._-]{1,12}){0,2}\\.(js|css|png)")
        .unwrap()
}

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,16}").unwrap()
}

fn manifest() -> impl Strategy<Value = ManifestResult> {
    (
        proptest::collection::vec((name(), proptest::collection::vec(file_path(), 0..4)), 0..5),
        proptest::option::of(proptest::collection::vec((file_path(), file_path()), 0..5)),
        proptest::option::of(proptest::collection::vec(file_path(), 0..5)),
        any::<bool>(),
    )
        .prop_map(|(entrypoints, assets, auxiliary, with_deps)| {
            let entrypoints: IndexMap<String, Vec<String>> = entrypoints.into_iter().collect();
            let dependencies = with_deps.then(|| {
                entrypoints
                    .keys()
                    .map(|k| (k.clone(), Vec::new()))
                    .collect::<IndexMap<_, _>>()
            });
            ManifestResult {
                entrypoints,
                assets: assets.map(|pairs| pairs.into_iter().collect()),
                auxiliary_files: auxiliary,
                dependencies,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: formatted manifests parse back to the same value, in order.
    #[test]
    fn property_manifest_round_trip(manifest in manifest(), pretty in any::<bool>()) {
        let formatter = if pretty { JsonFormatter::pretty() } else { JsonFormatter::compact() };

        let text = formatter.format(&manifest).unwrap();
        let parsed: ManifestResult = serde_json::from_str(&text).unwrap();

        prop_assert_eq!(parsed, manifest);
    }

    /// PROPERTY: snapshot parsing never panics on arbitrary input.
    #[test]
    fn property_snapshot_parse_never_panics(content in "(?s).{0,256}") {
        let _ = serde_json::from_str::<BuildSnapshot>(&content);
    }
}

//! Property tests for archive and report path derivation.

use std::path::PathBuf;

use proptest::prelude::*;

use compliance::ProfileReference;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,24}")
        .unwrap()
        .prop_filter("not a relative path component", |s| s != "." && s != "..")
}

fn cache_root() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=4)
        .prop_map(|parts| PathBuf::from("/").join(parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Paths are a pure function of (owner, name, explicit path, cache root).
    #[test]
    fn property_paths_are_deterministic(
        owner in proptest::option::of(segment()),
        name in segment(),
        root in cache_root()
    ) {
        let build = || {
            let profile = ProfileReference::new(name.clone());
            match &owner {
                Some(owner) => profile.with_owner(owner.clone()),
                None => profile,
            }
        };
        prop_assert_eq!(build().archive_path(&root), build().archive_path(&root));
        prop_assert_eq!(build().report_path(&root), build().report_path(&root));
    }

    /// PROPERTY: `owner/name` and (owner, name) address the same files.
    #[test]
    fn property_prefix_and_owner_agree(
        owner in segment(),
        name in segment(),
        root in cache_root()
    ) {
        let prefixed = ProfileReference::new(format!("{}/{}", owner, name));
        let split = ProfileReference::new(name.clone()).with_owner(owner.clone());

        prop_assert_eq!(prefixed.archive_path(&root), split.archive_path(&root));
        prop_assert_eq!(prefixed.report_path(&root), split.report_path(&root));
        prop_assert_eq!(
            split.archive_path(&root),
            root.join("compliance").join(format!("{}_{}.tgz", owner, name))
        );
    }

    /// PROPERTY: An explicit path always wins for the archive, never for the report.
    #[test]
    fn property_explicit_path_wins(
        name in segment(),
        explicit in cache_root(),
        root in cache_root()
    ) {
        let plain = ProfileReference::new(name.clone());
        let local = ProfileReference::new(name).with_path(explicit.clone());

        prop_assert_eq!(local.archive_path(&root), explicit);
        prop_assert_eq!(local.report_path(&root), plain.report_path(&root));
    }

    /// PROPERTY: Cached files stay inside `<root>/compliance`.
    #[test]
    fn property_cache_files_stay_under_root(
        owner in proptest::option::of(segment()),
        name in segment(),
        root in cache_root()
    ) {
        let mut profile = ProfileReference::new(name);
        if let Some(owner) = owner {
            profile = profile.with_owner(owner);
        }
        let dir = root.join("compliance");
        let archive_path = profile.archive_path(&root);
        let report_path = profile.report_path(&root);
        prop_assert_eq!(archive_path.parent(), Some(dir.as_path()));
        prop_assert_eq!(report_path.parent(), Some(dir.as_path()));
    }
}

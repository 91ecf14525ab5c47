//! Property tests for owner/name normalization.

use proptest::prelude::*;

use compliance::domain::value_objects::DEFAULT_OWNER;
use compliance::normalize;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(
        owner in proptest::option::of("(?s).{0,32}"),
        name in "(?s).{0,64}"
    ) {
        let _ = normalize(owner.as_deref(), &name);
    }

    /// PROPERTY: An `owner/` prefix in the name always wins over the supplied owner.
    #[test]
    fn property_prefix_overrides_owner(
        supplied in proptest::option::of(segment()),
        prefix in segment(),
        rest in segment()
    ) {
        let (owner, name) = normalize(supplied.as_deref(), &format!("{}/{}", prefix, rest));
        prop_assert_eq!(owner, prefix);
        prop_assert_eq!(name, rest);
    }

    /// PROPERTY: Without a separator the name is untouched and the owner defaults.
    #[test]
    fn property_plain_name_keeps_owner(
        supplied in proptest::option::of(segment()),
        name in segment()
    ) {
        let (owner, resolved) = normalize(supplied.as_deref(), &name);
        prop_assert_eq!(resolved, name);
        prop_assert_eq!(owner, supplied.unwrap_or_else(|| DEFAULT_OWNER.to_string()));
    }

    /// PROPERTY: Normalizing an already-normalized pair changes nothing.
    #[test]
    fn property_normalize_is_idempotent(
        supplied in proptest::option::of(segment()),
        name in "[A-Za-z0-9/_-]{1,32}"
    ) {
        let (owner, resolved) = normalize(supplied.as_deref(), &name);
        if !resolved.contains('/') && !owner.is_empty() {
            prop_assert_eq!(normalize(Some(owner.as_str()), &resolved), (owner.clone(), resolved.clone()));
        }
    }
}

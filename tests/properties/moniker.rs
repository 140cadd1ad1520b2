//! Property tests for framework moniker resolution.

use proptest::prelude::*;

use mason::{derive_symbols, resolve, FrameworkIdentity};

/// Comma/equals-delimited strings shaped like long-form monikers, with
/// deliberately messy segments.
fn delimited_identity() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9 ._=]{0,16}").unwrap();
    proptest::collection::vec(segment, 0..=5).prop_map(|segments| segments.join(","))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution is a total function; it never panics on
    /// arbitrary input, however malformed.
    #[test]
    fn property_resolve_never_panics(
        raw in "(?s).{0,256}"
    ) {
        let moniker = resolve(&FrameworkIdentity::new(&*raw));
        let _ = derive_symbols(&moniker);
    }

    /// PROPERTY: Random comma/equals-delimited strings resolve without
    /// panicking and derive at most one symbol.
    #[test]
    fn property_delimited_strings_resolve(
        raw in delimited_identity()
    ) {
        let moniker = resolve(&FrameworkIdentity::new(&*raw));
        let symbols = derive_symbols(&moniker);
        prop_assert!(symbols.len() <= 1);
    }

    /// PROPERTY: Resolution is deterministic; the same identity resolves
    /// to the same moniker every time.
    #[test]
    fn property_resolve_is_deterministic(
        raw in "(?s).{0,128}"
    ) {
        let identity = FrameworkIdentity::new(&*raw);
        prop_assert_eq!(resolve(&identity), resolve(&identity));
    }

    /// PROPERTY: Derived symbols contain only uppercase alphanumerics and
    /// underscores, so they are always valid preprocessor tokens.
    #[test]
    fn property_symbols_are_clean_tokens(
        raw in "(?s).{0,128}"
    ) {
        let symbols = derive_symbols(&resolve(&FrameworkIdentity::new(&*raw)));
        for symbol in &symbols {
            prop_assert!(!symbol.is_empty());
            prop_assert!(symbol
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    /// PROPERTY: Known short-form prefixes always resolve to their family,
    /// whatever the version digits.
    #[test]
    fn property_short_form_family_is_stable(
        digits in "[0-9]{1,4}"
    ) {
        let moniker = resolve(&FrameworkIdentity::new(format!("netstandard{digits}")));
        prop_assert_eq!(moniker.identifier(), ".NETStandard");
    }
}

//! Property-based tests for placeholder expansion.
//!
//! Expansion is a pure function of (text, params): brace-free text passes
//! through untouched, resolved output is brace-free and stable under
//! re-expansion, and doubled braces defer resolution by exactly one pass.

use proptest::prelude::*;
use rmbatch_tmpl::{ParamSet, expand};

/// Literal template text with no brace characters.
fn arb_literal() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _./#!\n-]{0,40}"
}

/// A placeholder identifier.
fn arb_ident() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,15}"
}

/// A replacement value with no brace characters.
fn arb_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _./-]{0,20}"
}

proptest! {
    #[test]
    fn prop_literal_text_unchanged(text in arb_literal()) {
        let out = expand(&text, &ParamSet::new()).unwrap();
        prop_assert_eq!(out, text);
    }

    #[test]
    fn prop_complete_mapping_resolves(
        mapping in prop::collection::btree_map(arb_ident(), arb_value(), 1..6),
        prefix in arb_literal(),
        sep in arb_literal(),
    ) {
        let mut text = prefix.clone();
        let mut expected = prefix;
        for (name, value) in &mapping {
            text.push_str(&format!("{{{name}}}"));
            text.push_str(&sep);
            expected.push_str(value);
            expected.push_str(&sep);
        }

        let params: ParamSet = mapping.into_iter().collect();
        let out = expand(&text, &params).unwrap();
        prop_assert_eq!(&out, &expected);

        // Fully resolved output is brace-free, so a repeat pass with the
        // same params leaves it byte-identical.
        let again = expand(&out, &params).unwrap();
        prop_assert_eq!(again, expected);
    }

    #[test]
    fn prop_missing_entry_fails(
        mapping in prop::collection::btree_map(arb_ident(), arb_value(), 2..6),
    ) {
        let text: String = mapping.keys().map(|name| format!("{{{name}}} ")).collect();

        let dropped = mapping.keys().next().unwrap().clone();
        let mut params: ParamSet = mapping.into_iter().collect();
        params.remove(&dropped);

        prop_assert!(expand(&text, &params).is_err());
    }

    #[test]
    fn prop_deferred_survives_one_pass(name in arb_ident(), value in arb_value()) {
        let text = format!("job_{{{{{name}}}}}");

        // Pass 1: no mapping needed, doubled braces collapse to single.
        let pass1 = expand(&text, &ParamSet::new()).unwrap();
        prop_assert_eq!(&pass1, &format!("job_{{{name}}}"));

        // Pass 2: resolves like a first-class placeholder.
        let params = ParamSet::from_pairs([(name.clone(), value.clone())]);
        let pass2 = expand(&pass1, &params).unwrap();
        prop_assert_eq!(pass2, format!("job_{value}"));
    }
}

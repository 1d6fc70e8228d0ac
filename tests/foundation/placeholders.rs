//! Integration tests for placeholder extraction
//!
//! Tests token extraction, structural keys, conditionals, and filling.

use proptest::prelude::*;
use uniques_foundation::{
    PLACEHOLDER_MARKER, extract_tokens, fill_placeholders, has_placeholders, split_conditionals,
    structural_key,
};

// =============================================================================
// Extraction
// =============================================================================

#[test]
fn template_and_instance_share_a_key() {
    let template = "[amount]% maintenance costs for [mapUnitFilter] units";
    let instance = "[25]% maintenance costs for [Melee] units";
    assert_eq!(structural_key(template), structural_key(instance));
    assert_eq!(extract_tokens(instance), vec!["25", "Melee"]);
}

#[test]
fn marker_replaces_every_token() {
    assert_eq!(
        structural_key("[a] and [b] and [c]"),
        format!("{m} and {m} and {m}", m = PLACEHOLDER_MARKER)
    );
}

#[test]
fn empty_token_is_a_token() {
    assert_eq!(extract_tokens("[] units"), vec![""]);
    assert!(has_placeholders("[] units"));
    assert!(!has_placeholders("units"));
}

#[test]
fn stray_closing_bracket_is_text() {
    assert_eq!(extract_tokens("a] [b]"), vec!["b"]);
    assert_eq!(structural_key("a] [b]"), "a] []");
}

// =============================================================================
// Conditionals
// =============================================================================

#[test]
fn conditionals_do_not_leak_into_main_text() {
    let (main, conditionals) = split_conditionals("[+1 Gold] <with [Iron]> from this");
    assert_eq!(main, "[+1 Gold]  from this");
    assert_eq!(conditionals, vec!["with [Iron]"]);
}

#[test]
fn unclosed_angle_bracket_is_text() {
    let (main, conditionals) = split_conditionals("[1] Sight <when attacking");
    assert_eq!(main, "[1] Sight <when attacking");
    assert!(conditionals.is_empty());
}

// =============================================================================
// Properties
// =============================================================================

fn token_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 +%.,-]{0,12}"
}

fn filler() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 %.,-]{0,16}"
}

fn template_text() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::collection::vec((filler(), token_name()), 0..6).prop_flat_map(|parts| {
        let tokens: Vec<String> = parts.iter().map(|(_, t)| t.clone()).collect();
        filler().prop_map(move |tail| {
            let mut text = String::new();
            for (before, token) in &parts {
                text.push_str(before);
                text.push('[');
                text.push_str(token);
                text.push(']');
            }
            text.push_str(&tail);
            (text, tokens.clone())
        })
    })
}

proptest! {
    #[test]
    fn key_is_deterministic(text in "\\PC{0,64}") {
        prop_assert_eq!(structural_key(&text), structural_key(&text));
    }

    #[test]
    fn tokens_come_out_in_order((text, tokens) in template_text()) {
        prop_assert_eq!(extract_tokens(&text), tokens);
    }

    #[test]
    fn key_ignores_token_names(
        (text, tokens) in template_text(),
        replacement in "[A-Za-z0-9 ]{0,8}",
    ) {
        let values = vec![replacement; tokens.len()];
        let filled = fill_placeholders(&text, &values);
        prop_assert_eq!(structural_key(&filled), structural_key(&text));
        let expected: Vec<&str> = values.iter().map(String::as_str).collect();
        prop_assert_eq!(extract_tokens(&filled), expected);
    }

    #[test]
    fn key_is_idempotent(text in "\\PC{0,64}") {
        let key = structural_key(&text);
        prop_assert_eq!(structural_key(&key), key.clone());
    }
}

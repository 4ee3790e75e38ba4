//! Property-based tests for canned-response resolution
//!
//! Uses proptest to verify the lookup invariants of ResponseTable.

use std::collections::HashMap;

use proptest::prelude::*;

use chatwidget_core::{ResponseTable, DEFAULT_FALLBACK};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate lowercase trigger phrases with no surrounding whitespace,
/// the form the configuration documents.
fn trigger_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9?! ]{1,40}")
        .expect("valid regex")
        .prop_map(|s| s.trim().to_string())
        .prop_filter("non-empty", |s| !s.is_empty())
}

/// Generate canned reply texts.
fn reply_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?]{1,80}").expect("valid regex")
}

/// Generate a trigger -> reply map.
fn replies_strategy() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(trigger_strategy(), reply_strategy(), 0..12)
}

/// Wrap a trigger in arbitrary surrounding whitespace.
fn padded(trigger: &str, left: usize, right: usize) -> String {
    format!("{}{}{}", " ".repeat(left), trigger, " ".repeat(right))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every configured trigger resolves to its reply, regardless of
    /// input casing or surrounding whitespace.
    #[test]
    fn trigger_hits_ignore_case_and_padding(
        replies in replies_strategy(),
        left in 0usize..4,
        right in 0usize..4,
    ) {
        let table = ResponseTable::new(replies.clone());

        for (trigger, reply) in &replies {
            prop_assert_eq!(table.resolve(trigger), reply.as_str());
            prop_assert_eq!(table.resolve(&trigger.to_uppercase()), reply.as_str());
            prop_assert_eq!(table.resolve(&padded(trigger, left, right)), reply.as_str());
        }
    }

    /// Input whose trimmed, lowercased form is not a configured trigger
    /// always yields the fallback.
    #[test]
    fn misses_yield_fallback(
        replies in replies_strategy(),
        input in "\\PC{0,60}",
    ) {
        let table = ResponseTable::new(replies.clone());
        let key = input.trim().to_lowercase();

        if !replies.contains_key(&key) {
            prop_assert_eq!(table.resolve(&input), DEFAULT_FALLBACK);
        }
    }

    /// Resolution never panics, whatever the input.
    #[test]
    fn resolve_is_total(replies in replies_strategy(), input in "\\PC{0,200}") {
        let table = ResponseTable::new(replies);
        let _ = table.resolve(&input);
    }

    /// An empty table maps everything to the fallback.
    #[test]
    fn empty_table_always_falls_back(input in "\\PC{0,60}") {
        let table = ResponseTable::default();
        prop_assert_eq!(table.resolve(&input), DEFAULT_FALLBACK);
    }
}

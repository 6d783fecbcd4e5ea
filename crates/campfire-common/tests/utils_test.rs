//! Integration tests for the campfire-common text helpers.

use campfire_common::utils::*;
use proptest::prelude::*;

#[test]
fn test_embed_limits_are_discord_limits() {
    assert_eq!(EMBED_FIELD_VALUE_LIMIT, 1024);
    assert_eq!(EMBED_DESCRIPTION_LIMIT, 4096);
}

#[test]
fn test_truncate_to_field_limit() {
    let long = "a".repeat(EMBED_FIELD_VALUE_LIMIT + 10);
    let truncated = truncate_string(&long, EMBED_FIELD_VALUE_LIMIT);
    assert_eq!(truncated.chars().count(), EMBED_FIELD_VALUE_LIMIT);
    assert!(truncated.ends_with("..."));
}

#[test]
fn test_capitalize_single_char() {
    assert_eq!(capitalize("a"), "A");
}

proptest! {
    #[test]
    fn truncate_never_exceeds_limit(input in ".{0,200}", limit in 3usize..100) {
        let truncated = truncate_string(&input, limit);
        prop_assert!(truncated.chars().count() <= limit);
    }

    #[test]
    fn truncate_keeps_short_input(input in "[a-z]{0,20}") {
        prop_assert_eq!(truncate_string(&input, 20), input);
    }
}

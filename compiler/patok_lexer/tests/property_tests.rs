//! Property-based tests for the pattern tokenizer and integer parsers.
//!
//! Verifies for generated inputs:
//! 1. Rejoin: segment text joined with `/` equals the input minus markers
//! 2. Render: segments rendered with markers equal the input exactly
//! 3. Idempotence: re-tokenizing the joined text keeps the text, drops flags
//! 4. Integers: `parse_int(n.to_string()) == n` and list sums match

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use patok_lexer::{join_text, parse_int, render_pattern, sum_csv, tokenize};
use proptest::prelude::*;

// -- Input Generation Strategies --

/// Literal segment text: anything but the two reserved characters.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^/*]{1,12}").expect("valid regex")
}

/// One segment as it appears in a pattern, with an optional trailing marker.
fn segment_strategy() -> impl Strategy<Value = (String, bool)> {
    (text_strategy(), any::<bool>())
}

fn pattern_strategy() -> impl Strategy<Value = Vec<(String, bool)>> {
    prop::collection::vec(segment_strategy(), 1..8)
}

fn to_pattern(parts: &[(String, bool)]) -> String {
    parts
        .iter()
        .map(|(text, wild)| if *wild { format!("{text}*") } else { text.clone() })
        .collect::<Vec<_>>()
        .join("/")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn joined_text_drops_markers(parts in pattern_strategy()) {
        let input = to_pattern(&parts);
        let segments = tokenize(&input).unwrap();
        prop_assert_eq!(join_text(&segments), input.replace('*', ""));
    }

    #[test]
    fn render_reproduces_input(parts in pattern_strategy()) {
        let input = to_pattern(&parts);
        let segments = tokenize(&input).unwrap();
        prop_assert_eq!(render_pattern(&segments), input);
    }

    #[test]
    fn flags_follow_markers(parts in pattern_strategy()) {
        let input = to_pattern(&parts);
        let segments = tokenize(&input).unwrap();
        prop_assert_eq!(segments.len(), parts.len());
        for (segment, (text, wild)) in segments.iter().zip(&parts) {
            prop_assert_eq!(&segment.text, text);
            prop_assert_eq!(segment.has_wildcard, *wild);
        }
    }

    #[test]
    fn retokenize_is_idempotent(parts in pattern_strategy()) {
        let first = tokenize(&to_pattern(&parts)).unwrap();
        let second = tokenize(&join_text(&first)).unwrap();
        let first_text: Vec<_> = first.iter().map(|s| s.text.clone()).collect();
        let second_text: Vec<_> = second.iter().map(|s| s.text.clone()).collect();
        prop_assert_eq!(first_text, second_text);
        prop_assert!(second.iter().all(|s| !s.has_wildcard));
    }

    #[test]
    fn empty_segment_is_rejected(parts in pattern_strategy(), at in 0usize..8) {
        let mut input = to_pattern(&parts);
        let cut = input.char_indices().map(|(i, _)| i).nth(at).unwrap_or(input.len());
        input.insert_str(cut, "//");
        prop_assert!(tokenize(&input).unwrap_err().is_malformed_pattern());
    }

    #[test]
    fn parse_int_round_trips(n in any::<i32>()) {
        prop_assert_eq!(parse_int(&n.to_string()), Ok(n));
    }

    #[test]
    fn sum_matches_iterator_sum(values in prop::collection::vec(any::<i32>(), 1..16)) {
        let input = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        let expected: i64 = values.iter().map(|&v| i64::from(v)).sum();
        prop_assert_eq!(sum_csv(&input), Ok(expected));
    }
}

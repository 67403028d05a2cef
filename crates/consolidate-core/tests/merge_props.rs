// Rust guideline compliant 2026-02-06

//! Property-based tests for the merge driver.
//!
//! These tests validate universal properties of the merge over arbitrary
//! pre-sorted inputs: output ordering, global deduplication, blank-line
//! erasure, terminator normalization, and idempotence under re-merge.

use consolidate_core::{consolidate, MergeStats};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Cursor;

/// Generates one sorted input: a list of words in ascending order,
/// possibly with adjacent repeats.
fn arb_sorted_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-z]{1,8}").unwrap(), 0..40).prop_map(
        |mut words| {
            words.sort();
            words
        },
    )
}

/// Generates a set of sorted inputs for one merge.
fn arb_inputs() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(arb_sorted_words(), 0..6)
}

/// Renders sorted words as file content, one word per terminated line.
fn render(words: &[String]) -> String {
    words.iter().map(|w| format!("{}\n", w)).collect()
}

/// Runs the merge over in-memory sources.
fn merge_texts(texts: &[String]) -> (String, MergeStats) {
    let sources: BTreeMap<String, Cursor<Vec<u8>>> = texts
        .iter()
        .enumerate()
        .map(|(i, text)| (format!("input-{:02}.txt", i), Cursor::new(text.clone().into_bytes())))
        .collect();
    let mut output = Vec::new();
    let stats = consolidate(sources, &mut output).expect("Merge failed");
    (String::from_utf8(output).expect("Output not UTF-8"), stats)
}

proptest! {
    /// **Property: Sortedness**
    ///
    /// For any pre-sorted inputs, output lines are strictly ascending
    /// (non-decreasing order plus deduplication leaves no equal neighbors).
    #[test]
    fn test_output_is_strictly_ascending(inputs in arb_inputs()) {
        let texts: Vec<String> = inputs.iter().map(|words| render(words)).collect();
        let (out, _) = merge_texts(&texts);
        let lines: Vec<&str> = out.lines().collect();

        for pair in lines.windows(2) {
            prop_assert!(pair[0] < pair[1], "`{}` !< `{}`", pair[0], pair[1]);
        }
    }

    /// **Property: Output is the sorted union**
    ///
    /// The output contains exactly the distinct input words, in order.
    /// Identical lines are always adjacent after a sorted merge, so
    /// adjacent-only suppression deduplicates globally.
    #[test]
    fn test_output_equals_sorted_union(inputs in arb_inputs()) {
        let texts: Vec<String> = inputs.iter().map(|words| render(words)).collect();
        let (out, stats) = merge_texts(&texts);

        let expected: Vec<String> = inputs
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();
        let actual: Vec<String> = out.lines().map(str::to_string).collect();

        prop_assert_eq!(&actual, &expected);
        prop_assert_eq!(stats.lines_written as usize, expected.len());
    }

    /// **Property: Blank-line erasure**
    ///
    /// Interspersing blank lines into any input leaves the output
    /// byte-identical.
    #[test]
    fn test_blank_lines_do_not_affect_output(inputs in arb_inputs()) {
        let plain: Vec<String> = inputs.iter().map(|words| render(words)).collect();
        let blanky: Vec<String> = inputs
            .iter()
            .map(|words| {
                let mut text = String::from("\n");
                for word in words {
                    text.push_str(word);
                    text.push('\n');
                    text.push('\n');
                }
                text
            })
            .collect();

        let (expected, _) = merge_texts(&plain);
        let (actual, stats) = merge_texts(&blanky);

        prop_assert_eq!(actual, expected);
        let total_words: u64 = inputs.iter().map(|w| w.len() as u64).sum();
        prop_assert_eq!(stats.blank_lines_skipped, total_words + inputs.len() as u64);
    }

    /// **Property: Terminator normalization**
    ///
    /// Dropping the final terminator of every input leaves the output
    /// byte-identical, and every output line stays terminated.
    #[test]
    fn test_missing_final_terminator_is_invisible(inputs in arb_inputs()) {
        let plain: Vec<String> = inputs.iter().map(|words| render(words)).collect();
        let clipped: Vec<String> = plain
            .iter()
            .map(|text| text.strip_suffix('\n').unwrap_or(text).to_string())
            .collect();

        let (expected, _) = merge_texts(&plain);
        let (actual, _) = merge_texts(&clipped);

        prop_assert_eq!(&actual, &expected);
        prop_assert!(actual.is_empty() || actual.ends_with('\n'));
    }

    /// **Property: Idempotence under re-merge**
    ///
    /// Merging the output of a merge as the sole input reproduces it
    /// byte-for-byte.
    #[test]
    fn test_remerge_is_identity(inputs in arb_inputs()) {
        let texts: Vec<String> = inputs.iter().map(|words| render(words)).collect();
        let (first, _) = merge_texts(&texts);
        let (second, stats) = merge_texts(std::slice::from_ref(&first));

        prop_assert_eq!(second, first);
        prop_assert_eq!(stats.duplicates_collapsed, 0);
        prop_assert_eq!(stats.blank_lines_skipped, 0);
    }
}

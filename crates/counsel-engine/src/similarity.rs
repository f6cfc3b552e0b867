//! # Token-Set Similarity
//!
//! Fuzzy string score in `[0, 100]`, order-insensitive and robust to one
//! string carrying extra words. Both strings are normalized and
//! tokenized into unique word sets, then three canonical strings are
//! compared pairwise by normalized edit similarity:
//!
//! - the sorted token intersection,
//! - the intersection followed by the left-only tokens,
//! - the intersection followed by the right-only tokens.
//!
//! The score is the best pairwise similarity. Identical token sets score
//! 100; a strict token superset also scores 100 (the intersection equals
//! the smaller side, so one pair compares equal strings); disjoint sets
//! score low.

use std::collections::BTreeSet;

/// Compute the token-set similarity of two strings.
///
/// Empty token sets never match: a string with no alphanumeric content
/// scores 0 against everything, including another empty string.
pub fn token_set_ratio(left: &str, right: &str) -> u32 {
    let left_tokens = tokenize(left);
    let right_tokens = tokenize(right);
    if left_tokens.is_empty() || right_tokens.is_empty() {
        return 0;
    }

    // BTreeSet iteration is sorted, which makes these canonical.
    let shared: Vec<&str> = left_tokens
        .intersection(&right_tokens)
        .map(String::as_str)
        .collect();
    let left_only: Vec<&str> = left_tokens
        .difference(&right_tokens)
        .map(String::as_str)
        .collect();
    let right_only: Vec<&str> = right_tokens
        .difference(&left_tokens)
        .map(String::as_str)
        .collect();

    let base = shared.join(" ");
    let combined_left = append_tokens(&base, &left_only);
    let combined_right = append_tokens(&base, &right_only);

    [
        scaled_similarity(&base, &combined_left),
        scaled_similarity(&base, &combined_right),
        scaled_similarity(&combined_left, &combined_right),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

/// Normalize and split a string into its unique word set: lowercase,
/// non-alphanumeric characters become separators.
fn tokenize(s: &str) -> BTreeSet<String> {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn append_tokens(base: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        base.to_string()
    } else if base.is_empty() {
        rest.join(" ")
    } else {
        format!("{base} {}", rest.join(" "))
    }
}

/// Normalized Levenshtein similarity scaled to `[0, 100]`.
fn scaled_similarity(a: &str, b: &str) -> u32 {
    if a.is_empty() && b.is_empty() {
        // Disjoint token sets leave an empty intersection on both sides
        // of a pair; an empty/empty comparison is a non-match here.
        return 0;
    }
    (strsim::normalized_levenshtein(a, b) * 100.0).round() as u32
}

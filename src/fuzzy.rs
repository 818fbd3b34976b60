// Copyright 2025-present Tregu Engineering
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and length-normalized similarity.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the budget, skip the O(nm)
//! DP entirely. The row-minimum check abandons the DP as soon as no cell can
//! recover, which catches most non-matches within a row or two.

/// Bounded Levenshtein distance.
///
/// Returns `Some(distance)` when the strings are within `max` edits of each
/// other, `None` otherwise. Two early-exit paths:
/// 1. If the character-length difference exceeds `max`, bail before the DP
/// 2. If the minimum value of a DP row exceeds `max`, abandon the DP
///
/// Character counts, not byte lengths — "çantë" is five edits away from "",
/// not seven.
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // No cell in this row can shrink below min_row, so give up early
        if min_row > max {
            return None;
        }
    }

    if dp[b_len] <= max {
        Some(dp[b_len])
    } else {
        None
    }
}

/// Unbounded Levenshtein distance.
///
/// Used by the suggestion engine, where even a poor candidate needs a real
/// distance so the least-bad one can win.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    bounded_levenshtein(a, b, a.chars().count().max(b_len)).unwrap_or(usize::MAX)
}

/// Length-normalized similarity of a query term `needle` against a field
/// term `haystack`, in `[0, 1]`.
///
/// `1.0` means identical; anything whose edit distance exceeds the budget
/// implied by `floor` scores `0.0`. A needle of 3+ characters contained in
/// the haystack is credited at least `floor` — this is what keeps
/// search-as-you-type prefixes alive ("air" against "airmax") before the
/// full word is typed. The credit is one-directional: a haystack term
/// buried inside a longer query earns nothing.
pub fn similarity(needle: &str, haystack: &str, floor: f64) -> f64 {
    if needle.is_empty() || haystack.is_empty() {
        return 0.0;
    }
    if needle == haystack {
        return 1.0;
    }

    let longest = needle.chars().count().max(haystack.chars().count());
    let budget = ((1.0 - floor) * longest as f64).floor() as usize;
    let scored = match bounded_levenshtein(needle, haystack, budget) {
        Some(d) => 1.0 - d as f64 / longest as f64,
        None => 0.0,
    };

    if needle.len() >= 3 && haystack.contains(needle) {
        scored.max(floor)
    } else {
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_distance_zero() {
        assert_eq!(bounded_levenshtein("duks", "duks", 0), Some(0));
    }

    #[test]
    fn one_edit_variants() {
        assert_eq!(bounded_levenshtein("triwears", "triwear", 1), Some(1));
        assert_eq!(bounded_levenshtein("fustan", "fustam", 1), Some(1));
        assert_eq!(bounded_levenshtein("blu", "bluz", 1), Some(1));
    }

    #[test]
    fn length_difference_exits_early() {
        // Length difference is 5, so distance must be >= 5
        assert_eq!(bounded_levenshtein("a", "abcdef", 1), None);
    }

    #[test]
    fn over_budget_returns_none() {
        assert_eq!(bounded_levenshtein("kuq", "jeshil", 2), None);
    }

    #[test]
    fn matches_strsim_oracle() {
        let pairs = [
            ("xhakete", "xhaketa"),
            ("sneakers", "snickers"),
            ("kepuce", "kepuc"),
            ("zi", "zara"),
        ];
        for (a, b) in pairs {
            assert_eq!(levenshtein(a, b), strsim::levenshtein(a, b), "{a} vs {b}");
        }
    }

    #[test]
    fn similarity_rewards_near_misses() {
        let s = similarity("triwear", "triwears", 0.72);
        assert!(s > 0.85 && s < 1.0);
    }

    #[test]
    fn similarity_rejects_unrelated_tokens() {
        assert_eq!(similarity("zi", "zara", 0.72), 0.0);
        assert_eq!(similarity("", "anything", 0.72), 0.0);
    }

    #[test]
    fn containment_credits_partial_typing() {
        let s = similarity("air", "airmax", 0.72);
        assert!(s >= 0.72);
        // Two characters is too little signal for containment credit
        assert_eq!(similarity("ai", "airmax", 0.72), 0.0);
    }

    #[test]
    fn containment_credit_is_one_directional() {
        // A field token inside a longer query is not a match
        assert_eq!(similarity("fustanikon", "fustan", 0.72), 0.0);
    }
}

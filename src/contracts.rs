//! Runtime contracts for ranked output.
//!
//! Debug-mode assertions over every list `rank` returns. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Mirror the properties checked by the proptest suite
//!
//! | Contract Function             | Property                                  |
//! |-------------------------------|-------------------------------------------|
//! | `check_within_limit`          | `results.len() <= max_results`            |
//! | `check_no_duplicate_keys`     | one result per dedup identity             |
//! | `check_ranked_order`          | ordering key never increases              |
//! | `check_positive_scores`       | every result matched at least one token   |

use crate::scoring::ranking::compare_ranked;
use crate::types::{DedupKey, RankedResult};
use std::cmp::Ordering;

/// Check that the result list respects the requested limit.
#[inline]
pub fn check_within_limit(results: &[RankedResult], max_results: usize) {
    debug_assert!(
        results.len() <= max_results,
        "Contract violation: {} results exceed limit {}",
        results.len(),
        max_results
    );
}

/// Check that no two results share a dedup identity.
#[inline]
pub fn check_no_duplicate_keys(results: &[RankedResult], dedup: DedupKey) {
    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::new();
        for result in results {
            debug_assert!(
                seen.insert(result.key(dedup)),
                "Contract violation: duplicate identity {:?}",
                result.key(dedup)
            );
        }
    }
    #[cfg(not(debug_assertions))]
    let _ = (results, dedup);
}

/// Check that results are sorted best first.
#[inline]
pub fn check_ranked_order(results: &[RankedResult]) {
    for pair in results.windows(2) {
        debug_assert!(
            compare_ranked(&pair[0], &pair[1]) != Ordering::Greater,
            "Contract violation: result for {:?} ranked above a better one",
            pair[0].profile.name
        );
    }
}

/// Check that zero-score candidates were filtered out.
#[inline]
pub fn check_positive_scores(results: &[RankedResult]) {
    for result in results {
        debug_assert!(
            result.match_score > 0,
            "Contract violation: zero-score result for {:?}",
            result.profile.name
        );
    }
}

/// All output contracts at once.
#[inline]
pub fn check_ranked_output(results: &[RankedResult], max_results: usize, dedup: DedupKey) {
    check_within_limit(results, max_results);
    check_no_duplicate_keys(results, dedup);
    check_ranked_order(results);
    check_positive_scores(results);
}

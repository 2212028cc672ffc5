// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Match score dominates. A candidate matching two query tokens beats one
//! matching a single token no matter how similar the latter's record is.
//! Similarity only orders candidates within the same match score.
//!
//! No final tiebreaker: callers sort stably, so full ties keep dataset order.

use crate::types::RankedResult;
use std::cmp::Ordering;

/// Similarity as a sortable key. NaN maps below every real score.
#[inline]
fn similarity_key(score: f64) -> f64 {
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score
    }
}

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Match score** - descending (more matched tokens wins)
/// 2. **Similarity score** - descending, NaN last
///
/// Returns `Ordering::Less` when `a` ranks above `b`.
pub fn compare_ranked(a: &RankedResult, b: &RankedResult) -> Ordering {
    b.match_score.cmp(&a.match_score).then_with(|| {
        similarity_key(b.similarity_score).total_cmp(&similarity_key(a.similarity_score))
    })
}

/// Sort results in place, best first. Stable.
pub fn sort_ranked(results: &mut [RankedResult]) {
    results.sort_by(compare_ranked);
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Identity-based result deduplication.
//!
//! A person should appear at most once in a result list. The same person
//! shows up in many rows of a similarity table (everyone who "also viewed"
//! them), and in dual-side mode they can surface as both a source and a
//! similar profile. `ResultDeduper` admits each identity once.
//!
//! Input must already be ranked. The first occurrence of an identity is its
//! best-ranked one, so first-wins keeps the right copy.
//!
//! **Invariant**: No two results share a dedup key.
//!
//! **Verified by**:
//! - `prop_no_duplicate_keys` (tests/property/rank_props.rs)
//! - `fuzz_targets/rank_invariants.rs`

use crate::types::{DedupKey, RankedResult};
use std::collections::HashSet;

/// First-wins filter over ranked results.
///
/// # Example
///
/// ```ignore
/// let mut deduper = ResultDeduper::new(DedupKey::NameAndCompany);
/// let unique: Vec<_> = ranked.into_iter().filter(|r| deduper.admit(r)).collect();
/// ```
pub struct ResultDeduper {
    key: DedupKey,
    seen: HashSet<(String, Option<String>)>,
}

impl ResultDeduper {
    pub fn new(key: DedupKey) -> Self {
        Self {
            key,
            seen: HashSet::new(),
        }
    }

    /// Admit `result` if its identity hasn't been seen yet.
    ///
    /// Returns `true` the first time an identity is offered, `false` after.
    pub fn admit(&mut self, result: &RankedResult) -> bool {
        let (name, company) = result.key(self.key);
        self.seen
            .insert((name.to_string(), company.map(str::to_string)))
    }

    /// Number of distinct identities admitted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Keep the first result per identity, stopping once `limit` are kept.
pub fn dedup_ranked(
    ranked: impl IntoIterator<Item = RankedResult>,
    key: DedupKey,
    limit: usize,
) -> Vec<RankedResult> {
    let mut deduper = ResultDeduper::new(key);
    let mut kept = Vec::new();
    for result in ranked {
        if kept.len() >= limit {
            break;
        }
        if deduper.admit(&result) {
            kept.push(result);
        }
    }
    kept
}

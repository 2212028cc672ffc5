// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! `rank` is a pure function of (records, tokens, limit, options). It never
//! mutates the dataset and never fails: an empty dataset, an empty query or a
//! zero limit all produce an empty result list.
//!
//! Pipeline:
//!
//! ```text
//! records ──▶ candidates ──▶ score > 0 ──▶ stable sort ──▶ dedup ──▶ truncate
//!            (per mode)                  (score, sim)    (first wins)
//! ```

pub mod dedup;
mod ranker;

pub use ranker::Ranker;

use crate::contracts::check_ranked_output;
use crate::query::{tokenize, DEFAULT_MIN_TOKEN_LEN};
use crate::scoring::ranking::sort_ranked;
use crate::scoring::{match_score, searchable_text, SearchScope};
use crate::types::{CandidateMode, DedupKey, RankedResult, RelationshipRecord, Side};
use serde::{Deserialize, Serialize};

/// Candidate count at which scoring moves onto the rayon pool.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Knobs that differ between deployments of the same data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RankOptions {
    /// Single-side or dual-side candidate generation.
    pub mode: CandidateMode,
    /// Identity used for deduplication.
    pub dedup: DedupKey,
    /// Minimum token length in characters. 1 disables the length rule.
    pub min_token_len: usize,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            mode: CandidateMode::default(),
            dedup: DedupKey::default(),
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
        }
    }
}

/// (surfaced side, text scope) pairs each record contributes under `mode`.
fn candidate_plan(mode: CandidateMode) -> &'static [(Side, SearchScope)] {
    match mode {
        CandidateMode::SimilarSide => &[(Side::Similar, SearchScope::Record)],
        CandidateMode::BothSides => &[
            (Side::Source, SearchScope::Side(Side::Source)),
            (Side::Similar, SearchScope::Side(Side::Similar)),
        ],
    }
}

/// Score every candidate of one record, dropping zero scores.
fn score_record(
    record_index: usize,
    record: &RelationshipRecord,
    tokens: &[String],
    mode: CandidateMode,
) -> Vec<RankedResult> {
    candidate_plan(mode)
        .iter()
        .filter_map(|&(side, scope)| {
            let score = match_score(&searchable_text(record, scope), tokens);
            (score > 0).then(|| RankedResult {
                record_index,
                side,
                profile: record.profile(side),
                match_score: score,
                similarity_score: record.similarity_score,
            })
        })
        .collect()
}

/// Score all candidates in dataset order.
fn score_all(
    records: &[RelationshipRecord],
    tokens: &[String],
    mode: CandidateMode,
) -> Vec<RankedResult> {
    #[cfg(feature = "parallel")]
    if records.len() * candidate_plan(mode).len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        // collect() keeps input order, so the stable sort below sees the same
        // sequence as the sequential path
        return records
            .par_iter()
            .enumerate()
            .flat_map_iter(|(i, record)| score_record(i, record, tokens, mode))
            .collect();
    }

    records
        .iter()
        .enumerate()
        .flat_map(|(i, record)| score_record(i, record, tokens, mode))
        .collect()
}

/// Rank `records` against pre-tokenized `tokens`.
///
/// 1. Generate candidates per `options.mode`, score them, drop zero scores
/// 2. Stable sort by (match score desc, similarity desc)
/// 3. Keep the first result per `options.dedup` identity
/// 4. Truncate to `max_results`
pub fn rank(
    records: &[RelationshipRecord],
    tokens: &[String],
    max_results: usize,
    options: &RankOptions,
) -> Vec<RankedResult> {
    if max_results == 0 || tokens.is_empty() || records.is_empty() {
        log::debug!(
            "nothing to rank: {} records, {} tokens, limit {}",
            records.len(),
            tokens.len(),
            max_results
        );
        return Vec::new();
    }

    let mut scored = score_all(records, tokens, options.mode);
    log::debug!(
        "{} of {} records produced matching candidates for {:?}",
        scored.len(),
        records.len(),
        tokens
    );

    sort_ranked(&mut scored);
    let results = dedup::dedup_ranked(scored, options.dedup, max_results);

    check_ranked_output(&results, max_results, options.dedup);
    results
}

/// Tokenize `query` and rank `records` against it.
pub fn search(
    records: &[RelationshipRecord],
    query: &str,
    max_results: usize,
    options: &RankOptions,
) -> Vec<RankedResult> {
    let tokens = tokenize(query, options.min_token_len);
    rank(records, &tokens, max_results, options)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking and deduplication.
//!
//! Arbitrary datasets, queries, limits and options must never produce more
//! results than asked for, a repeated identity, or an out-of-order pair.

#![no_main]

use libfuzzer_sys::fuzz_target;
use peerfind::{
    search, tokenize, CandidateMode, DedupKey, RankOptions, RelationshipRecord,
};
use std::collections::HashSet;

/// Small pools so that names, companies and query words collide often.
const NAMES: &[&str] = &["Ana Silva", "ana silva", "John Smith", "Priya Nair", "Wei Zhang", ""];
const WORDS: &[&str] = &["engineer", "acme", "stripe", "manager", "dublin", "Not specified"];

#[derive(Debug, Clone)]
struct RankInput {
    records: Vec<RelationshipRecord>,
    query: String,
    limit: usize,
    options: RankOptions,
}

fn pick<'a>(u: &mut arbitrary::Unstructured<'_>, pool: &[&'a str]) -> arbitrary::Result<&'a str> {
    Ok(pool[u.int_in_range(0..=pool.len() - 1)?])
}

fn field(u: &mut arbitrary::Unstructured<'_>, pool: &[&str]) -> arbitrary::Result<String> {
    // Mostly pooled text, sometimes raw bytes to shake out Unicode edge cases
    if u.ratio(1, 5)? {
        u.arbitrary::<String>()
    } else {
        Ok(pick(u, pool)?.to_string())
    }
}

impl<'a> arbitrary::Arbitrary<'a> for RankInput {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let count = u.int_in_range(0..=40)?;
        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            let similarity_score = match u.int_in_range(0..=9)? {
                0 => f64::NAN,
                1 => 100.0,
                _ => f64::from(u.int_in_range(0u8..=100)?),
            };
            records.push(RelationshipRecord {
                source_name: field(u, NAMES)?,
                source_title: field(u, WORDS)?,
                source_company: field(u, WORDS)?,
                source_location: field(u, WORDS)?,
                similar_name: field(u, NAMES)?,
                similar_title: field(u, WORDS)?,
                similar_company: field(u, WORDS)?,
                similar_location: field(u, WORDS)?,
                similarity_score,
            });
        }

        let query = match u.int_in_range(0..=4)? {
            0 => String::new(),
            1 => " ".repeat(u.int_in_range(1..=5)?),
            2 => format!("{} {}", pick(u, WORDS)?, pick(u, WORDS)?).to_uppercase(),
            3 => pick(u, WORDS)?.to_string(),
            _ => u.arbitrary::<String>()?,
        };

        let limit = match u.int_in_range(0..=3)? {
            0 => 0,
            1 => 1,
            2 => u.int_in_range(2..=10)?,
            _ => u.int_in_range(10..=100)?,
        };

        let options = RankOptions {
            mode: if u.arbitrary()? {
                CandidateMode::BothSides
            } else {
                CandidateMode::SimilarSide
            },
            dedup: if u.arbitrary()? {
                DedupKey::Name
            } else {
                DedupKey::NameAndCompany
            },
            min_token_len: u.int_in_range(1..=4)?,
        };

        Ok(RankInput {
            records,
            query,
            limit,
            options,
        })
    }
}

/// Tests critical invariants:
/// - INVARIANT 1: Result count respects limit
/// - INVARIANT 2: No duplicate identity keys
/// - INVARIANT 3: Match score never increases down the list
/// - INVARIANT 4: Every result matched between 1 and token-count tokens
/// - INVARIANT 5: No tokens, no results
fuzz_target!(|input: RankInput| {
    let RankInput {
        records,
        query,
        limit,
        options,
    } = input;

    let tokens = tokenize(&query, options.min_token_len);
    let results = search(&records, &query, limit, &options);

    // INVARIANT 1
    assert!(
        results.len() <= limit,
        "INVARIANT 1 VIOLATED: Got {} results but limit was {}",
        results.len(),
        limit
    );

    // INVARIANT 2
    let mut seen = HashSet::with_capacity(results.len());
    for result in &results {
        assert!(
            seen.insert(result.key(options.dedup)),
            "INVARIANT 2 VIOLATED: Duplicate key {:?} for query '{}'",
            result.key(options.dedup),
            query
        );
    }

    // INVARIANT 3
    for pair in results.windows(2) {
        assert!(
            pair[0].match_score >= pair[1].match_score,
            "INVARIANT 3 VIOLATED: {} ranked above {}",
            pair[0].match_score,
            pair[1].match_score
        );
    }

    // INVARIANT 4
    for result in &results {
        assert!(
            result.match_score >= 1 && result.match_score as usize <= tokens.len(),
            "INVARIANT 4 VIOLATED: match_score {} with {} tokens",
            result.match_score,
            tokens.len()
        );
    }

    // INVARIANT 5
    if tokens.is_empty() {
        assert!(results.is_empty(), "INVARIANT 5 VIOLATED: results without tokens");
    }
});

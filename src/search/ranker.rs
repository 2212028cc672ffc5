// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A dataset bundled with the options to search it.
//!
//! `Ranker` holds the records behind an `Arc`, so clones are cheap and any
//! number of threads can search the same data without locking. Swapping in a
//! reloaded dataset means building a new `Ranker`; the old one stays valid
//! for whoever still holds it.

use super::{rank, RankOptions};
use crate::query::tokenize;
use crate::types::{RankedResult, RelationshipRecord};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Ranker {
    records: Arc<[RelationshipRecord]>,
    options: RankOptions,
}

impl Ranker {
    pub fn new(records: impl Into<Arc<[RelationshipRecord]>>, options: RankOptions) -> Self {
        Self {
            records: records.into(),
            options,
        }
    }

    /// Search with this ranker's options.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<RankedResult> {
        let tokens = tokenize(query, self.options.min_token_len);
        rank(&self.records, &tokens, max_results, &self.options)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

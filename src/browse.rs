// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "People also viewed": records grouped by their source profile.
//!
//! Browsing needs no query. Each distinct source person becomes a group
//! listing everyone the table links them to, in table order. Groups appear in
//! the order their source first shows up.

use crate::types::{Profile, RelationshipRecord, Side};
use serde::Serialize;
use std::collections::HashMap;

/// A linked profile and how similar it is to the group's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarProfile {
    pub profile: Profile,
    /// `None` when the source data carried no score.
    pub similarity_score: Option<f64>,
}

/// One source profile and everyone linked to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileGroup {
    pub profile: Profile,
    pub summary: Option<String>,
    pub similar: Vec<SimilarProfile>,
}

/// Group records by source `(name, company)`.
pub fn group_by_source(records: &[RelationshipRecord]) -> Vec<ProfileGroup> {
    let mut groups: Vec<ProfileGroup> = Vec::new();
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let key = (record.source_name.as_str(), record.source_company.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ProfileGroup {
                profile: record.profile(Side::Source),
                summary: None,
                similar: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].similar.push(SimilarProfile {
            profile: record.profile(Side::Similar),
            similarity_score: Some(record.similarity_score),
        });
    }

    groups
}

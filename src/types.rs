// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a similarity search.
//!
//! A `RelationshipRecord` is one row of the dataset: a source professional, a
//! similar professional, and a similarity score between them. Records are
//! read-only once loaded. Everything the ranker hands back is a `RankedResult`,
//! which borrows nothing from the dataset so callers can keep it around after
//! the dataset is swapped out.
//!
//! # Invariants
//!
//! - **RelationshipRecord**: `similarity_score` is finite and within `[0, 100]`
//!   when it comes from a loader. Hand-built records are not checked; a NaN
//!   score sorts last.
//!
//! - **RankedResult**: `match_score >= 1`. Zero-score candidates never leave
//!   the ranker.

use serde::{Deserialize, Serialize};

/// Placeholder the source data uses for a missing location.
pub const LOCATION_PLACEHOLDER: &str = "Not specified";

/// One row of the similarity table.
///
/// Field names match the CSV header, so `csv` + serde can map columns by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub source_name: String,
    pub source_title: String,
    pub source_company: String,
    #[serde(default)]
    pub source_location: String,
    pub similar_name: String,
    pub similar_title: String,
    pub similar_company: String,
    #[serde(default)]
    pub similar_location: String,
    pub similarity_score: f64,
}

impl RelationshipRecord {
    /// The four profile fields of one side, cloned into an owned `Profile`.
    pub fn profile(&self, side: Side) -> Profile {
        let [name, title, company, location] = self.side_fields(side);
        Profile {
            name: name.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
        }
    }

    /// Borrowed view of one side's textual fields, in name/title/company/location order.
    pub fn side_fields(&self, side: Side) -> [&str; 4] {
        match side {
            Side::Source => [
                self.source_name.as_str(),
                self.source_title.as_str(),
                self.source_company.as_str(),
                self.source_location.as_str(),
            ],
            Side::Similar => [
                self.similar_name.as_str(),
                self.similar_title.as_str(),
                self.similar_company.as_str(),
                self.similar_location.as_str(),
            ],
        }
    }

    /// All eight textual fields, source side first.
    pub fn text_fields(&self) -> [&str; 8] {
        let [a, b, c, d] = self.side_fields(Side::Source);
        let [e, f, g, h] = self.side_fields(Side::Similar);
        [a, b, c, d, e, f, g, h]
    }
}

/// Which half of a record a candidate stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Source,
    Similar,
}

/// Name, title, company and location of one professional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
}

impl Profile {
    /// Location for display, or `None` when empty or the "Not specified" placeholder.
    pub fn display_location(&self) -> Option<&str> {
        let location = self.location.trim();
        if location.is_empty() || location.eq_ignore_ascii_case(LOCATION_PLACEHOLDER) {
            None
        } else {
            Some(location)
        }
    }
}

/// Which candidates a record contributes to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateMode {
    /// One candidate per record: the similar profile, matched against the
    /// whole record (both sides are searchable).
    #[default]
    SimilarSide,
    /// Two candidates per record, source first. Each side is matched against
    /// its own fields only and ranked independently.
    BothSides,
}

/// Identity used to drop repeated people from a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DedupKey {
    /// `(name, company)`. The same name at two companies is two people.
    #[default]
    NameAndCompany,
    /// Name only.
    Name,
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    /// Index of the originating record in the dataset.
    pub record_index: usize,
    /// Which side of the record this result surfaces.
    pub side: Side,
    /// The surfaced profile.
    pub profile: Profile,
    /// Number of distinct query tokens found in the candidate's text.
    pub match_score: u32,
    /// Similarity score of the originating record.
    pub similarity_score: f64,
}

impl RankedResult {
    /// Borrowed dedup key for this result.
    pub fn key(&self, dedup: DedupKey) -> (&str, Option<&str>) {
        match dedup {
            DedupKey::NameAndCompany => (
                self.profile.name.as_str(),
                Some(self.profile.company.as_str()),
            ),
            DedupKey::Name => (self.profile.name.as_str(), None),
        }
    }
}

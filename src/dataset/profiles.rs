// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Curated sample profiles ("people also viewed").
//!
//! The JSON is an object keyed by profile id:
//!
//! ```json
//! {
//!   "p1": {
//!     "main_profile": {"name": "...", "title": "...", "company": "...",
//!                      "location": "...", "full_summary": "..."},
//!     "people_also_viewed": [
//!       {"name": "...", "title": "...", "company": "...", "location": "...",
//!        "similarity": 91.0}
//!     ]
//!   }
//! }
//! ```
//!
//! Key order in the file is kept. `similarity` is optional per entry.

use super::table::validate_similarity;
use crate::browse::{ProfileGroup, SimilarProfile};
use crate::error::{Error, Result};
use crate::types::{Profile, RelationshipRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Similarity assigned to sample entries that carry none.
pub const DEFAULT_SAMPLE_SIMILARITY: f64 = 0.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub full_summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewedProfile {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default)]
    pub similarity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleProfile {
    pub main_profile: MainProfile,
    #[serde(default)]
    pub people_also_viewed: Vec<ViewedProfile>,
}

/// All sample profiles, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleProfiles {
    pub entries: Vec<(String, SampleProfile)>,
}

impl SampleProfiles {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flatten into one record per (main profile, viewed profile) pair.
    ///
    /// Entries without a similarity get `default_similarity`.
    pub fn to_records(&self, default_similarity: f64) -> Vec<RelationshipRecord> {
        self.entries
            .iter()
            .flat_map(|(_, sample)| {
                let main = &sample.main_profile.profile;
                sample.people_also_viewed.iter().map(move |viewed| RelationshipRecord {
                    source_name: main.name.clone(),
                    source_title: main.title.clone(),
                    source_company: main.company.clone(),
                    source_location: main.location.clone(),
                    similar_name: viewed.profile.name.clone(),
                    similar_title: viewed.profile.title.clone(),
                    similar_company: viewed.profile.company.clone(),
                    similar_location: viewed.profile.location.clone(),
                    similarity_score: viewed.similarity.unwrap_or(default_similarity),
                })
            })
            .collect()
    }

    /// One browse group per sample profile, summary included.
    pub fn groups(&self) -> Vec<ProfileGroup> {
        self.entries
            .iter()
            .map(|(_, sample)| ProfileGroup {
                profile: sample.main_profile.profile.clone(),
                summary: Some(sample.main_profile.full_summary.clone())
                    .filter(|s| !s.trim().is_empty()),
                similar: sample
                    .people_also_viewed
                    .iter()
                    .map(|viewed| SimilarProfile {
                        profile: viewed.profile.clone(),
                        similarity_score: viewed.similarity,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Parse sample profiles from any JSON source.
pub fn read_profiles<R: Read>(reader: R) -> Result<SampleProfiles> {
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_reader(reader)?;

    let mut entries = Vec::with_capacity(raw.len());
    let mut pair = 0;
    for (id, value) in raw {
        let sample: SampleProfile = serde_json::from_value(value)?;
        for viewed in &sample.people_also_viewed {
            pair += 1;
            if let Some(score) = viewed.similarity {
                validate_similarity(pair, score)?;
            }
        }
        entries.push((id, sample));
    }
    Ok(SampleProfiles { entries })
}

/// Load sample profiles from a JSON file on disk.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<SampleProfiles> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let profiles = read_profiles(BufReader::new(file))?;
    if profiles.is_empty() {
        log::warn!("no sample profiles in {}", path.display());
    } else {
        log::info!("loaded {} sample profiles from {}", profiles.len(), path.display());
    }
    Ok(profiles)
}

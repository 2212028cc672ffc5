//! Shared test utilities and fixtures.

#![allow(dead_code)]

use peerfind::{RankedResult, RelationshipRecord};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Re-export canonical test utilities from peerfind::testing
pub use peerfind::testing::{make_record, make_record_with_locations, sample_records};

// ============================================================================
// FILE FIXTURES
// ============================================================================

/// Header row of the similarity table, in canonical column order.
pub const CSV_HEADER: &str = "source_name,source_title,source_company,source_location,\
similar_name,similar_title,similar_company,similar_location,similarity_score";

/// A small similarity table in the shape the demo ships with.
pub const SAMPLE_CSV: &str = "\
source_name,source_title,source_company,source_location,similar_name,similar_title,similar_company,similar_location,similarity_score
Sarah Chen,Senior Software Engineer,Google,San Francisco,John Smith,Software Engineer,Acme,New York,91.0
Sarah Chen,Senior Software Engineer,Google,San Francisco,Priya Nair,Staff Engineer,Stripe,Dublin,88.5
Marco Rossi,Product Manager,Acme,Milan,Elena Petrova,Product Designer,Figma,Not specified,79.0
";

/// Sample profiles with one entry missing its similarity.
pub const SAMPLE_PROFILES_JSON: &str = r#"{
  "sarah-chen": {
    "main_profile": {
      "name": "Sarah Chen",
      "title": "Senior Software Engineer",
      "company": "Google",
      "location": "San Francisco",
      "full_summary": "Builds distributed storage systems and mentors new engineers."
    },
    "people_also_viewed": [
      {"name": "John Smith", "title": "Software Engineer", "company": "Acme",
       "location": "New York", "similarity": 91.0},
      {"name": "Priya Nair", "title": "Staff Engineer", "company": "Stripe",
       "location": "Dublin"}
    ]
  },
  "marco-rossi": {
    "main_profile": {
      "name": "Marco Rossi",
      "title": "Product Manager",
      "company": "Acme",
      "location": "Milan"
    },
    "people_also_viewed": [
      {"name": "Elena Petrova", "title": "Product Designer", "company": "Figma",
       "location": "Not specified", "similarity": 79.0}
    ]
  }
}"#;

/// Create a temporary directory for test output.
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write `contents` to `name` inside a fresh temp directory.
///
/// Returns the TempDir (to keep it alive) and the file path.
pub fn write_fixture(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = create_temp_dir();
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    (dir, path)
}

// ============================================================================
// SYNTHETIC DATASETS
// ============================================================================

const COMPANIES: &[&str] = &["Acme", "Globex", "Initech", "Umbrella", "Hooli"];
const TITLES: &[&str] = &[
    "Software Engineer",
    "Product Manager",
    "Data Scientist",
    "Product Designer",
    "Engineering Manager",
];

/// Deterministic dataset of `n` records with repeating names, titles and
/// companies, so that ties and duplicates are common.
pub fn synthetic_records(n: usize) -> Vec<RelationshipRecord> {
    (0..n)
        .map(|i| {
            let source_name = format!("Person {}", i % 37);
            let similar_name = format!("Person {}", (i * 7 + 3) % 41);
            make_record(
                (
                    &source_name,
                    TITLES[i % TITLES.len()],
                    COMPANIES[i % COMPANIES.len()],
                ),
                (
                    &similar_name,
                    TITLES[(i + 2) % TITLES.len()],
                    COMPANIES[(i + 3) % COMPANIES.len()],
                ),
                (i % 100) as f64,
            )
        })
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Names of the surfaced profiles, in result order.
pub fn names(results: &[RankedResult]) -> Vec<&str> {
    results.iter().map(|r| r.profile.name.as_str()).collect()
}

/// Assert results are in non-increasing (match score, similarity) order.
pub fn assert_ranked_order(results: &[RankedResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.match_score > b.match_score
                || (a.match_score == b.match_score && a.similarity_score >= b.similarity_score),
            "INVARIANT VIOLATED: {} ({}, {}) ranked above {} ({}, {})",
            a.profile.name,
            a.match_score,
            a.similarity_score,
            b.profile.name,
            b.match_score,
            b.similarity_score
        );
    }
}

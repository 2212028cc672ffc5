//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Profile, RankedResult, RelationshipRecord, Side};

/// Create a record from `(name, title, company)` triples with empty locations.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(
    source: (&str, &str, &str),
    similar: (&str, &str, &str),
    similarity_score: f64,
) -> RelationshipRecord {
    make_record_with_locations(source, "", similar, "", similarity_score)
}

/// Create a record with explicit locations on both sides.
pub fn make_record_with_locations(
    source: (&str, &str, &str),
    source_location: &str,
    similar: (&str, &str, &str),
    similar_location: &str,
    similarity_score: f64,
) -> RelationshipRecord {
    RelationshipRecord {
        source_name: source.0.to_string(),
        source_title: source.1.to_string(),
        source_company: source.2.to_string(),
        source_location: source_location.to_string(),
        similar_name: similar.0.to_string(),
        similar_title: similar.1.to_string(),
        similar_company: similar.2.to_string(),
        similar_location: similar_location.to_string(),
        similarity_score,
    }
}

/// Create a ranked result for the similar side of a synthetic record.
pub fn make_result(
    record_index: usize,
    name: &str,
    company: &str,
    match_score: u32,
    similarity_score: f64,
) -> RankedResult {
    RankedResult {
        record_index,
        side: Side::Similar,
        profile: Profile {
            name: name.to_string(),
            title: "Engineer".to_string(),
            company: company.to_string(),
            location: String::new(),
        },
        match_score,
        similarity_score,
    }
}

/// A small fixed dataset in the shape of the demo CSV.
///
/// Contains a repeated similar profile (Priya Nair at Stripe, twice), a
/// namesake at a different company (John Smith at Acme and at Globex), and a
/// placeholder location.
pub fn sample_records() -> Vec<RelationshipRecord> {
    vec![
        make_record_with_locations(
            ("Sarah Chen", "Senior Software Engineer", "Google"),
            "San Francisco",
            ("John Smith", "Software Engineer", "Acme"),
            "New York",
            91.0,
        ),
        make_record_with_locations(
            ("Sarah Chen", "Senior Software Engineer", "Google"),
            "San Francisco",
            ("Priya Nair", "Staff Engineer", "Stripe"),
            "Dublin",
            88.5,
        ),
        make_record_with_locations(
            ("Marco Rossi", "Product Manager", "Acme"),
            "Milan",
            ("Elena Petrova", "Product Designer", "Figma"),
            "Not specified",
            79.0,
        ),
        make_record_with_locations(
            ("Marco Rossi", "Product Manager", "Acme"),
            "Milan",
            ("John Smith", "Engineering Manager", "Globex"),
            "Austin",
            84.0,
        ),
        make_record_with_locations(
            ("Aisha Bello", "Data Scientist", "Netflix"),
            "Los Angeles",
            ("Priya Nair", "Staff Engineer", "Stripe"),
            "Dublin",
            93.5,
        ),
        make_record_with_locations(
            ("Aisha Bello", "Data Scientist", "Netflix"),
            "Los Angeles",
            ("Tom Becker", "Machine Learning Engineer", "Spotify"),
            "Berlin",
            86.0,
        ),
    ]
}

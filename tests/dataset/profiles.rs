//! Tests for sample-profiles JSON.

use crate::common::{write_fixture, SAMPLE_PROFILES_JSON};
use peerfind::dataset::DEFAULT_SAMPLE_SIMILARITY;
use peerfind::{load_profiles, read_profiles, Error};

#[test]
fn test_load_sample_profiles_in_file_order() {
    let (_dir, path) = write_fixture("demo_sample_profiles.json", SAMPLE_PROFILES_JSON);
    let profiles = load_profiles(&path).expect("Loading valid profiles should succeed");

    let ids: Vec<&str> = profiles.entries.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["sarah-chen", "marco-rossi"]);
}

#[test]
fn test_profiles_flatten_to_records() {
    let profiles = read_profiles(SAMPLE_PROFILES_JSON.as_bytes()).unwrap();
    let records = profiles.to_records(DEFAULT_SAMPLE_SIMILARITY);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].source_name, "Sarah Chen");
    assert_eq!(records[0].similar_name, "John Smith");
    assert_eq!(records[0].similarity_score, 91.0);
    // Priya Nair has no similarity in the file
    assert_eq!(records[1].similarity_score, DEFAULT_SAMPLE_SIMILARITY);
    assert_eq!(records[2].source_company, "Acme");
}

#[test]
fn test_groups_carry_summary() {
    let groups = read_profiles(SAMPLE_PROFILES_JSON.as_bytes())
        .unwrap()
        .groups();

    assert_eq!(groups.len(), 2);
    assert!(groups[0]
        .summary
        .as_deref()
        .is_some_and(|s| s.starts_with("Builds distributed")));
    assert_eq!(groups[0].similar.len(), 2);
    assert_eq!(groups[0].similar[1].similarity_score, None);
    // missing full_summary reads as no summary
    assert_eq!(groups[1].summary, None);
}

#[test]
fn test_invalid_similarity_rejected() {
    let json = r#"{
        "p1": {
            "main_profile": {"name": "A", "title": "B", "company": "C", "location": "D"},
            "people_also_viewed": [
                {"name": "E", "title": "F", "company": "G", "location": "H", "similarity": -3}
            ]
        }
    }"#;

    assert!(matches!(
        read_profiles(json.as_bytes()),
        Err(Error::InvalidSimilarity { row: 1, .. })
    ));
}

#[test]
fn test_malformed_json_is_json_error() {
    assert!(matches!(
        read_profiles(r#"{"p1": {"main_profile": {}}}"#.as_bytes()),
        Err(Error::Json(_))
    ));
    assert!(matches!(read_profiles("[1, 2]".as_bytes()), Err(Error::Json(_))));
}

#[test]
fn test_empty_object_has_no_profiles() {
    let profiles = read_profiles("{}".as_bytes()).unwrap();
    assert!(profiles.is_empty());
}

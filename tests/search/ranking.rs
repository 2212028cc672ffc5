//! Ordering of ranked results: match score first, similarity second.

use crate::common::{assert_ranked_order, make_record, names, sample_records};
use peerfind::{search, RankOptions};

#[test]
fn test_engineer_acme_returns_john_smith() {
    let records = vec![make_record(
        ("Jane Doe", "Eng", "Acme"),
        ("John Smith", "Software Engineer", "Acme"),
        91.0,
    )];

    let results = search(&records, "engineer acme", 10, &RankOptions::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].profile.name, "John Smith");
    assert_eq!(results[0].match_score, 2);
    assert_eq!(results[0].similarity_score, 91.0);
}

#[test]
fn test_similarity_breaks_ties() {
    let records = vec![
        make_record(("A", "Eng", "X"), ("Low", "Designer", "Figma"), 80.0),
        make_record(("B", "Eng", "Y"), ("High", "Designer", "Canva"), 92.0),
    ];

    let results = search(&records, "designer", 10, &RankOptions::default());

    assert_eq!(names(&results), vec!["High", "Low"]);
    assert!(results.iter().all(|r| r.match_score == 1));
}

#[test]
fn test_match_score_beats_similarity() {
    let records = vec![
        make_record(("A", "Eng", "X"), ("Popular", "Designer", "Figma"), 99.0),
        make_record(("B", "Eng", "Y"), ("Relevant", "Product Designer", "Figma"), 40.0),
    ];

    let results = search(&records, "product designer", 10, &RankOptions::default());

    assert_eq!(names(&results), vec!["Relevant", "Popular"]);
    assert_eq!(results[0].match_score, 2);
    assert_eq!(results[1].match_score, 1);
}

#[test]
fn test_sample_engineer_query_order() {
    let results = search(&sample_records(), "engineer", 10, &RankOptions::default());

    // "engineering" contains "engineer", so the Globex John Smith matches too
    assert_eq!(
        names(&results),
        vec!["Priya Nair", "John Smith", "Tom Becker", "John Smith"]
    );
    assert_eq!(
        results.iter().map(|r| r.record_index).collect::<Vec<_>>(),
        vec![4, 0, 5, 3]
    );
    assert_ranked_order(&results);
}

#[test]
fn test_multi_token_query_counts_each_token_once() {
    let results = search(
        &sample_records(),
        "software engineer google",
        10,
        &RankOptions::default(),
    );

    assert_eq!(
        results.iter().map(|r| r.match_score).collect::<Vec<_>>(),
        vec![3, 3, 1, 1]
    );
    assert_eq!(
        names(&results),
        vec!["John Smith", "Priya Nair", "Tom Becker", "John Smith"]
    );
    assert_ranked_order(&results);
}

#[test]
fn test_limit_keeps_best() {
    let results = search(&sample_records(), "engineer", 2, &RankOptions::default());
    assert_eq!(names(&results), vec!["Priya Nair", "John Smith"]);
}

#[test]
fn test_nan_similarity_sorts_last() {
    let records = vec![
        make_record(("A", "Eng", "X"), ("Unknown", "Designer", "Figma"), f64::NAN),
        make_record(("B", "Eng", "Y"), ("Known", "Designer", "Canva"), 10.0),
    ];

    let results = search(&records, "designer", 10, &RankOptions::default());

    assert_eq!(names(&results), vec!["Known", "Unknown"]);
}

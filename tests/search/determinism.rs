//! Same input, same output: across calls, threads and the parallel path.

use crate::common::{assert_ranked_order, make_record, names, synthetic_records};
use peerfind::{search, CandidateMode, RankOptions, Ranker};
use std::thread;

#[test]
fn test_repeated_searches_identical() {
    let records = synthetic_records(200);
    let first = search(&records, "engineer acme", 20, &RankOptions::default());
    for _ in 0..5 {
        assert_eq!(
            search(&records, "engineer acme", 20, &RankOptions::default()),
            first
        );
    }
}

#[test]
fn test_full_ties_keep_dataset_order() {
    let records: Vec<_> = ["Ada", "Grace", "Linus", "Barbara"]
        .iter()
        .map(|name| make_record(("S", "Eng", "X"), (name, "Engineer", "Acme"), 80.0))
        .collect();

    let results = search(&records, "engineer", 10, &RankOptions::default());

    assert_eq!(names(&results), vec!["Ada", "Grace", "Linus", "Barbara"]);
}

#[test]
fn test_large_dataset_ordering() {
    // Large enough to take the parallel path when that feature is on
    let records = synthetic_records(10_000);
    for mode in [CandidateMode::SimilarSide, CandidateMode::BothSides] {
        let options = RankOptions {
            mode,
            ..RankOptions::default()
        };
        let results = search(&records, "product manager globex", 100, &options);
        assert!(!results.is_empty());
        assert!(results.len() <= 100);
        assert_ranked_order(&results);
    }
}

#[test]
fn test_concurrent_searches_agree() {
    let ranker = Ranker::new(synthetic_records(2_000), RankOptions::default());
    let expected = ranker.search("data scientist initech", 25);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let ranker = ranker.clone();
            thread::spawn(move || ranker.search("data scientist initech", 25))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

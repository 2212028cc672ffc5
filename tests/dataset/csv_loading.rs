//! Tests for CSV similarity tables.

use crate::common::{write_fixture, CSV_HEADER, SAMPLE_CSV};
use peerfind::{load_csv, read_csv, search, Error, RankOptions};

#[test]
fn test_load_sample_csv() {
    let (_dir, path) = write_fixture("similarity_data_sample.csv", SAMPLE_CSV);
    let records = load_csv(&path).expect("Loading valid CSV should succeed");

    assert_eq!(records.len(), 3, "Should load 3 records");
    assert_eq!(records[0].source_name, "Sarah Chen");
    assert_eq!(records[0].similar_name, "John Smith");
    assert_eq!(records[1].similarity_score, 88.5);
    assert_eq!(records[2].similar_location, "Not specified");
}

#[test]
fn test_loaded_csv_is_searchable() {
    let (_dir, path) = write_fixture("people.csv", SAMPLE_CSV);
    let records = load_csv(&path).unwrap();

    let results = search(&records, "engineer acme", 10, &RankOptions::default());

    assert_eq!(results[0].profile.name, "John Smith");
    assert_eq!(results[0].match_score, 2);
}

#[test]
fn test_columns_matched_by_header_name() {
    let csv = "\
similarity_score,similar_company,similar_title,similar_name,source_company,source_title,source_name,extra
72.5,Figma,Designer,Elena Petrova,Acme,Manager,Marco Rossi,ignored
";
    let records = read_csv(csv.as_bytes()).expect("Reordered columns should parse");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].source_name, "Marco Rossi");
    assert_eq!(records[0].similar_company, "Figma");
    assert_eq!(records[0].similarity_score, 72.5);
    assert!(records[0].source_location.is_empty());
}

#[test]
fn test_cells_are_trimmed() {
    let csv = format!(
        "{}\n  Jane Doe , Eng , Acme , Berlin , John Smith , Engineer , Acme , Dublin , 91.0 \n",
        CSV_HEADER
    );
    let records = read_csv(csv.as_bytes()).unwrap();

    assert_eq!(records[0].source_name, "Jane Doe");
    assert_eq!(records[0].similar_location, "Dublin");
    assert_eq!(records[0].similarity_score, 91.0);
}

#[test]
fn test_header_only_is_empty() {
    let records = read_csv(CSV_HEADER.as_bytes()).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_out_of_range_similarity_reports_row() {
    let csv = format!(
        "{}\nA,B,C,,D,E,F,,50\nA,B,C,,D,E,F,,150\n",
        CSV_HEADER
    );
    let err = read_csv(csv.as_bytes()).unwrap_err();

    match err {
        Error::InvalidSimilarity { row, value } => {
            assert_eq!(row, 2);
            assert_eq!(value, 150.0);
        }
        other => panic!("Expected InvalidSimilarity, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_similarity_is_csv_error() {
    let csv = format!("{}\nA,B,C,,D,E,F,,high\n", CSV_HEADER);
    assert!(matches!(read_csv(csv.as_bytes()), Err(Error::Csv(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = crate::common::create_temp_dir();
    let path = dir.path().join("missing.csv");

    let err = load_csv(&path).unwrap_err();

    assert!(matches!(err, Error::Io { .. }));
    assert!(
        err.to_string().contains("missing.csv"),
        "Error should name the file: {}",
        err
    );
}

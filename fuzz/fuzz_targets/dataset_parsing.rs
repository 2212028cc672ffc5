// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the dataset readers.
//!
//! Arbitrary bytes must either parse or return an error, never panic, and
//! anything that parses must carry similarity scores within range.

#![no_main]

use libfuzzer_sys::fuzz_target;
use peerfind::dataset::{DEFAULT_SAMPLE_SIMILARITY, SIMILARITY_RANGE};
use peerfind::{read_csv, read_profiles};

fuzz_target!(|data: &[u8]| {
    if let Ok(records) = read_csv(data) {
        for record in &records {
            assert!(
                SIMILARITY_RANGE.contains(&record.similarity_score),
                "CSV accepted similarity {}",
                record.similarity_score
            );
        }
    }

    if let Ok(profiles) = read_profiles(data) {
        for record in profiles.to_records(DEFAULT_SAMPLE_SIMILARITY) {
            assert!(
                SIMILARITY_RANGE.contains(&record.similarity_score),
                "JSON accepted similarity {}",
                record.similarity_score
            );
        }
    }
});

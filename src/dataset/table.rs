// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CSV similarity tables.
//!
//! Columns are matched by header name, so column order does not matter and
//! extra columns are ignored. The location columns may be missing entirely.
//! Every cell is trimmed.

use crate::error::{Error, Result};
use crate::types::RelationshipRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Similarity scores must land in this range.
pub const SIMILARITY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Reject non-finite or out-of-range similarity scores.
///
/// `row` is 1-based and only used for the error message.
pub fn validate_similarity(row: usize, value: f64) -> Result<()> {
    if value.is_finite() && SIMILARITY_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidSimilarity { row, value })
    }
}

/// Parse records from any CSV source with a header row.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RelationshipRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<RelationshipRecord>().enumerate() {
        let record = row?;
        validate_similarity(i + 1, record.similarity_score)?;
        records.push(record);
    }
    Ok(records)
}

/// Load records from a CSV file on disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<RelationshipRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let records = read_csv(file)?;
    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

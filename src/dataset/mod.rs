//! Dataset loading: turning files into records.
//!
//! The ranker never touches the filesystem. This module is the caller-side
//! layer that parses and validates the two file shapes the data ships in:
//! a flat CSV similarity table and a curated sample-profiles JSON.

pub mod profiles;
pub mod table;

pub use profiles::*;
pub use table::*;

use crate::error::Result;
use crate::types::RelationshipRecord;
use std::path::Path;

/// File shape, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    SampleProfiles,
}

impl DatasetFormat {
    /// `.json` means sample profiles; anything else is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DatasetFormat::SampleProfiles,
            _ => DatasetFormat::Csv,
        }
    }
}

/// Load records from either file shape.
///
/// Sample-profile entries without a similarity get [`DEFAULT_SAMPLE_SIMILARITY`].
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<RelationshipRecord>> {
    let path = path.as_ref();
    match DatasetFormat::from_path(path) {
        DatasetFormat::Csv => load_csv(path),
        DatasetFormat::SampleProfiles => {
            Ok(load_profiles(path)?.to_records(DEFAULT_SAMPLE_SIMILARITY))
        }
    }
}

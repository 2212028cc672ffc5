// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration file.
//!
//! Optional JSON; every field has a default, so `{}` is a valid config.
//! Command-line flags override whatever the file says.
//!
//! ```json
//! {
//!   "data": "similarity_data_sample.csv",
//!   "max_results": 10,
//!   "ranking": {"mode": "both-sides", "dedup": "name", "min_token_len": 3}
//! }
//! ```

use crate::error::{Error, Result};
use crate::search::RankOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Results per search when neither file nor flags say otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Dataset to search when none is given on the command line.
    pub data: Option<PathBuf>,
    pub max_results: usize,
    pub ranking: RankOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: None,
            max_results: DEFAULT_MAX_RESULTS,
            ranking: RankOptions::default(),
        }
    }
}

impl Config {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Self::parse(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::parse(&text)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    fn parse(text: &str) -> serde_json::Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        if config.max_results == 0 {
            log::warn!("max_results is 0; every search will come back empty");
        }
        Ok(config)
    }
}

//! Per-session caller state.
//!
//! The ranker is stateless. Anything that changes between searches in one
//! sitting (how many searches ran, what the last query was) lives here and is
//! owned by the caller, typically the interactive shell.

use crate::utils::normalize;

/// Counters for one interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    /// Searches run so far, including ones with no results.
    pub searches: u64,
    /// Last counted query, lowercased with whitespace collapsed.
    pub last_query: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one search. Blank queries are not searches and are ignored.
    ///
    /// Returns the updated count.
    pub fn record(&mut self, query: &str) -> u64 {
        let query = normalize(query);
        if !query.is_empty() {
            self.searches += 1;
            self.last_query = Some(query);
        }
        self.searches
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword overlap scoring.
//!
//! Matching is plain substring containment over lowercased text. No stemming,
//! no fuzzy matching: the token "engineer" matches "Software Engineering"
//! because "engineer" is a substring of "engineering", and that is the only
//! kind of leniency there is.
//!
//! Fields are joined with a single space. Tokens never contain whitespace, so
//! a token cannot match across the seam between two fields.

use crate::types::{RelationshipRecord, Side};

/// Which fields of a record feed the searchable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// All eight textual fields, source side first.
    Record,
    /// The four fields of one side.
    Side(Side),
}

/// Lowercased concatenation of the fields in scope.
pub fn searchable_text(record: &RelationshipRecord, scope: SearchScope) -> String {
    match scope {
        SearchScope::Record => record.text_fields().join(" ").to_lowercase(),
        SearchScope::Side(side) => record.side_fields(side).join(" ").to_lowercase(),
    }
}

/// Number of tokens that occur in `text`.
///
/// Each token contributes at most 1, however many fields contain it. `text`
/// must already be lowercased (see [`searchable_text`]); tokens come from
/// [`crate::tokenize`] and are lowercased there.
#[inline]
pub fn match_score(text: &str, tokens: &[String]) -> u32 {
    tokens.iter().filter(|token| text.contains(token.as_str())).count() as u32
}

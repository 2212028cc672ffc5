// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization.
//!
//! A query is split on whitespace, lowercased, and filtered by the length
//! rule. Short words like "at", "of", "a" would substring-match almost every
//! record, so by default only tokens of three or more characters survive.
//! The rule is configurable because data sets differ: set the minimum to 1
//! to keep every word.
//!
//! Repeated tokens collapse to their first occurrence. A token counts at
//! most once toward a match score, so "rust rust" scores like "rust".

/// Default minimum token length in characters ("longer than two").
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Does `token` survive the length rule?
///
/// Counts chars, not bytes: "né" is two characters even though it is three bytes.
#[inline]
pub fn passes_length_rule(token: &str, min_token_len: usize) -> bool {
    token.chars().count() >= min_token_len
}

/// Split a query into lowercase, deduplicated tokens that pass the length rule.
///
/// Order is the order of first appearance in the query. An empty result means
/// nothing to search for; the ranker returns no hits in that case.
pub fn tokenize(query: &str, min_token_len: usize) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for word in query.split_whitespace() {
        let token = word.to_lowercase();
        if passes_length_rule(&token, min_token_len) && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

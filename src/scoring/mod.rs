// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A candidate's match score is the number of distinct query tokens found
//! anywhere in its searchable text. The similarity score from the dataset
//! only breaks ties between equal match scores; it never lifts a candidate
//! over one that matched more tokens.

mod core;
pub mod ranking;

pub use core::*;

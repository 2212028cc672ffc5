//! Keyword relevance ranking over professional similarity records.
//!
//! A dataset is a flat table of `RelationshipRecord`s: a source professional,
//! a similar professional, and a similarity score. A query is free text. The
//! ranker counts how many distinct query words appear in each candidate's
//! text, orders by that count and then by similarity, drops repeated people,
//! and returns the top N.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  query.rs   │────▶│  scoring/    │────▶│   search/    │
//! │ (tokenize)  │     │ (match_score,│     │ (rank, dedup,│
//! │             │     │  ranking)    │     │  Ranker)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        ▲                                        │
//!        │                                        ▼
//! ┌─────────────┐                          ┌──────────────┐
//! │  dataset/   │   records (read-only)    │ contracts.rs │
//! │ (CSV, JSON) │─────────────────────────▶│ (debug-time  │
//! └─────────────┘                          │  invariants) │
//!                                          └──────────────┘
//! ```
//!
//! `dataset`, `browse`, `session` and `config` are caller-side: the ranker
//! itself never reads files, holds state, or fails.
//!
//! # Usage
//!
//! ```
//! use peerfind::{search, RankOptions, RelationshipRecord};
//!
//! let records = vec![RelationshipRecord {
//!     source_name: "Jane Doe".into(),
//!     source_title: "Eng".into(),
//!     source_company: "Acme".into(),
//!     source_location: String::new(),
//!     similar_name: "John Smith".into(),
//!     similar_title: "Software Engineer".into(),
//!     similar_company: "Acme".into(),
//!     similar_location: String::new(),
//!     similarity_score: 91.0,
//! }];
//!
//! let results = search(&records, "engineer acme", 10, &RankOptions::default());
//! assert_eq!(results[0].profile.name, "John Smith");
//! assert_eq!(results[0].match_score, 2);
//! ```

// Module declarations
pub mod browse;
pub mod config;
pub mod contracts;
pub mod dataset;
mod error;
mod query;
pub mod scoring;
pub mod search;
pub mod session;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use browse::{group_by_source, ProfileGroup, SimilarProfile};
pub use config::{Config, DEFAULT_MAX_RESULTS};
pub use dataset::{load_csv, load_dataset, load_profiles, read_csv, read_profiles, SampleProfiles};
pub use error::{Error, Result};
pub use query::{passes_length_rule, tokenize, DEFAULT_MIN_TOKEN_LEN};
pub use scoring::ranking::compare_ranked;
pub use scoring::{match_score, searchable_text, SearchScope};
pub use search::{rank, search, RankOptions, Ranker};
pub use session::SearchSession;
pub use types::{
    CandidateMode, DedupKey, Profile, RankedResult, RelationshipRecord, Side,
    LOCATION_PLACEHOLDER,
};
pub use utils::{excerpt, normalize};

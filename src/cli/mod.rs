// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the peerfind command-line interface.
//!
//! Three subcommands: `search` for a one-off query, `browse` to list every
//! source profile with the people linked to it, and `shell` for an
//! interactive loop that keeps a per-session search count. The dataset and
//! ranking defaults can come from a JSON config file; flags win over it.

pub mod display;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use peerfind::{CandidateMode, DedupKey, RankOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "peerfind",
    about = "Keyword search over professional similarity data",
    version
)]
pub struct Cli {
    /// Dataset: a CSV similarity table, or a sample-profiles .json file
    #[arg(short, long, global = true, env = "PEERFIND_DATA")]
    pub data: Option<PathBuf>,

    /// JSON config file
    #[arg(long, global = true, env = "PEERFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the dataset and display ranked results
    Search {
        /// Search keywords
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        rank: RankArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List source profiles and the people also viewed with them
    Browse {
        /// Maximum number of profiles to list
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive search loop
    Shell {
        #[command(flatten)]
        rank: RankArgs,
    },
}

/// Ranking flags shared by `search` and `shell`.
#[derive(Args, Debug, Clone, Default)]
pub struct RankArgs {
    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Rank source and similar profiles as separate candidates
    #[arg(long)]
    pub both_sides: bool,

    /// Identity used to collapse repeated people
    #[arg(long, value_enum)]
    pub dedup: Option<DedupArg>,

    /// Minimum query word length in characters (1 keeps every word)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub min_token_len: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DedupArg {
    /// Name and company together
    NameCompany,
    /// Name only
    Name,
}

impl From<DedupArg> for DedupKey {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::NameCompany => DedupKey::NameAndCompany,
            DedupArg::Name => DedupKey::Name,
        }
    }
}

impl RankArgs {
    /// Layer these flags over options from the config file.
    pub fn apply(&self, mut options: RankOptions) -> RankOptions {
        if self.both_sides {
            options.mode = CandidateMode::BothSides;
        }
        if let Some(dedup) = self.dedup {
            options.dedup = dedup.into();
        }
        if let Some(len) = self.min_token_len {
            options.min_token_len = len as usize;
        }
        options
    }
}

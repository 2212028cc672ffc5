// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use peerfind::dataset::DatasetFormat;
use peerfind::{
    group_by_source, load_csv, load_dataset, load_profiles, search, Config, ProfileGroup, Ranker,
    RelationshipRecord, SearchSession,
};

mod cli;
use cli::{display, Cli, Commands, RankArgs};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise warn, raised by -v/-vv, lowered by --quiet.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let data = resolve_data(cli.data, &config)?;

    match cli.command {
        Commands::Search { query, rank, json } => {
            run_search(&data, &query.join(" "), &rank, &config, json)
        }
        Commands::Browse { limit, json } => run_browse(&data, limit, json),
        Commands::Shell { rank } => run_shell(&data, &rank, &config),
    }
}

fn resolve_data(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    match flag.or_else(|| config.data.clone()) {
        Some(path) => Ok(path),
        None => bail!("no dataset given: pass --data <FILE> or set \"data\" in the config file"),
    }
}

fn load_records(path: &Path) -> Result<Vec<RelationshipRecord>> {
    let records =
        load_dataset(path).with_context(|| format!("loading dataset {}", path.display()))?;
    if records.is_empty() {
        log::warn!("{} contains no records; every search will be empty", path.display());
    }
    Ok(records)
}

fn run_search(
    data: &Path,
    query: &str,
    rank: &RankArgs,
    config: &Config,
    json: bool,
) -> Result<()> {
    let records = load_records(data)?;
    let options = rank.apply(config.ranking.clone());
    let limit = rank.limit.unwrap_or(config.max_results);

    let start = Instant::now();
    let results = search(&records, query, limit, &options);
    let elapsed = start.elapsed();
    log::info!("{} results in {:?}", results.len(), elapsed);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        display::print_results(query, &results, elapsed);
    }
    Ok(())
}

fn run_browse(data: &Path, limit: Option<usize>, json: bool) -> Result<()> {
    let mut groups: Vec<ProfileGroup> = match DatasetFormat::from_path(data) {
        DatasetFormat::SampleProfiles => load_profiles(data)
            .with_context(|| format!("loading sample profiles {}", data.display()))?
            .groups(),
        DatasetFormat::Csv => group_by_source(
            &load_csv(data).with_context(|| format!("loading dataset {}", data.display()))?,
        ),
    };
    if let Some(limit) = limit {
        groups.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        display::print_groups(&groups);
    }
    Ok(())
}

fn run_shell(data: &Path, rank: &RankArgs, config: &Config) -> Result<()> {
    let ranker = Ranker::new(load_records(data)?, rank.apply(config.ranking.clone()));
    let limit = rank.limit.unwrap_or(config.max_results);
    let mut session = SearchSession::new();

    println!(
        "Loaded {} records. Type keywords to search, :quit to leave.",
        ranker.len()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("search> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("reading from stdin")?;
        let query = line.trim();

        match query {
            "" => continue,
            ":quit" | ":q" | "exit" => break,
            _ => {}
        }

        session.record(query);
        let start = Instant::now();
        let results = ranker.search(query, limit);
        display::print_results(query, &results, start.elapsed());
        display::print_session_footer(&session);
    }

    log::info!("session ended after {} searches", session.searches);
    Ok(())
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal frontend for the lectern search engine.
//!
//! Runs the same fetch, parse, build and query pipeline the in-page widget
//! runs, which makes it the fastest way to answer "why does this query rank
//! that page first" without opening a browser.

use std::collections::HashSet;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lectern::{
    normalize, parse_index, select_strategy, tokenize, DirFetcher, HttpFetcher, IndexFetcher,
    Panel, QueryEngine, SiteRoot, StrategyKind, DEFAULT_EXCERPT_LEN, NO_RESULTS_TEXT,
};

mod cli;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Search {
            query,
            site,
            strategy,
            limit,
            json,
        } => run_search(&query, &site, strategy.map(Into::into), limit, json),
        Commands::Inspect { site } => run_inspect(&site),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// A site argument is either a URL or a local build directory.
fn open_site(site: &str) -> (Box<dyn IndexFetcher>, SiteRoot) {
    if site.starts_with("http://") || site.starts_with("https://") {
        let root = SiteRoot::new(site);
        (Box::new(HttpFetcher::new(root.clone())), root)
    } else {
        // local directory: result targets stay site-relative
        (Box::new(DirFetcher::new(site)), SiteRoot::new(""))
    }
}

fn run_search(
    query: &str,
    site: &str,
    strategy: Option<StrategyKind>,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let (fetcher, root) = open_site(site);
    let mut engine = QueryEngine::new();
    engine
        .load(fetcher.as_ref(), strategy)
        .with_context(|| format!("loading index from {}", fetcher.describe()))?;

    let started = Instant::now();
    let mut results = engine.search(query);
    let elapsed = started.elapsed();
    results.truncate(limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{NO_RESULTS_TEXT}");
        return Ok(());
    }

    let panel = Panel::render(&results, &root, DEFAULT_EXCERPT_LEN);
    for (rank, entry) in panel.entries.iter().enumerate() {
        println!("{:>3}. {}  [{:.2}]", rank + 1, entry.title, results[rank].score);
        println!("     {}", entry.target);
        if !entry.excerpt.is_empty() {
            println!("     {}", entry.excerpt);
        }
        println!();
    }
    println!(
        "Found {} results in {:.2}ms",
        results.len(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

fn run_inspect(site: &str) -> anyhow::Result<()> {
    let (fetcher, _) = open_site(site);
    let bytes = fetcher
        .fetch()
        .with_context(|| format!("reading {}", fetcher.describe()))?;
    let docs = parse_index(&bytes).context("parsing index payload")?;

    let mut vocabulary = HashSet::new();
    let mut tags = HashSet::new();
    for doc in &docs {
        vocabulary.extend(tokenize(&normalize(&doc.title)));
        vocabulary.extend(tokenize(&normalize(&doc.content)));
        for tag in &doc.tags {
            vocabulary.extend(tokenize(&normalize(tag)));
            tags.insert(tag.clone());
        }
    }

    println!("Source:          {}", fetcher.describe());
    println!("Documents:       {}", docs.len());
    println!("Distinct tokens: {}", vocabulary.len());
    println!("Distinct tags:   {}", tags.len());
    println!(
        "Auto strategy:   {}",
        match select_strategy(docs.len()) {
            StrategyKind::Fuzzy => "fuzzy (threshold scan)",
            StrategyKind::Inverted => "inverted (token lookup)",
        }
    );
    if !docs.is_empty() {
        println!();
        println!("Sample documents:");
        for doc in docs.iter().take(5) {
            println!("  {}  ->  {}", doc.title, doc.url);
        }
        if docs.len() > 5 {
            println!("  ... and {} more", docs.len() - 5);
        }
    }
    Ok(())
}

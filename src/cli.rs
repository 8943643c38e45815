// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lectern command-line interface.
//!
//! Two subcommands: `search` runs a query against a site's index from the
//! terminal, `inspect` summarizes what the index contains. Both take the
//! site as either a URL (fetched over HTTP, exactly like the widget would)
//! or a local directory holding a built `search-index.json`.

use clap::{Parser, Subcommand, ValueEnum};

use lectern::StrategyKind;

#[derive(Parser)]
#[command(
    name = "lectern",
    about = "Query and inspect static-site search indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a site's index and print ranked results
    Search {
        /// Query text, as it would be typed into the search box
        query: String,

        /// Site root URL (https://...) or local directory with search-index.json
        #[arg(short, long)]
        site: String,

        /// Matching strategy; omitted means auto-selection by corpus size
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Maximum number of results to print
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Emit results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Summarize a site's search index
    Inspect {
        /// Site root URL (https://...) or local directory with search-index.json
        #[arg(short, long)]
        site: String,
    },
}

/// Strategy names as they appear on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Typo-tolerant threshold scan
    Fuzzy,
    /// Exact-token inverted index
    Inverted,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Fuzzy => StrategyKind::Fuzzy,
            StrategyArg::Inverted => StrategyKind::Inverted,
        }
    }
}

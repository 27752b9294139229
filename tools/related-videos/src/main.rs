//! Related Videos Generator
//!
//! Reads a video catalog (JSON array) and prints the related videos for one
//! or every entry as JSON lines, ready for a static-site build to consume.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use reelmatch_core::{
    slugify, Catalog, RelatedConfig, RelatedFinder, RelevanceWeights, ScoredVideo, VideoRecord,
    DEFAULT_LIMIT,
};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "related-videos")]
#[command(about = "Generate related-video lists from a video catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print related videos as JSON lines
    Related {
        /// Catalog file (JSON array of videos)
        #[arg(env = "REELMATCH_CATALOG")]
        catalog: PathBuf,

        /// Only emit the related list for this video id
        #[arg(short, long)]
        id: Option<String>,

        /// Maximum related videos per entry
        #[arg(short, long, env = "REELMATCH_LIMIT", default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Points per shared title keyword
        #[arg(long, env = "REELMATCH_TITLE_WEIGHT", default_value_t = RelevanceWeights::default().title_keyword)]
        title_weight: u32,

        /// Points for an exact category match
        #[arg(long, env = "REELMATCH_CATEGORY_WEIGHT", default_value_t = RelevanceWeights::default().category_match)]
        category_weight: u32,

        /// Include each related video's score
        #[arg(short, long)]
        explain: bool,
    },
    /// Print the slug for a piece of text
    Slug {
        /// Text to normalize
        text: String,
    },
}

/// One related video in the output.
#[derive(Debug, Serialize)]
struct RelatedEntry<'a> {
    #[serde(flatten)]
    video: &'a VideoRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<u32>,
}

/// One output line: a video id and the videos related to it.
#[derive(Debug, Serialize)]
struct RelatedOutput<'a> {
    id: &'a str,
    related: Vec<RelatedEntry<'a>>,
}

impl<'a> RelatedOutput<'a> {
    fn new(id: &'a str, ranked: Vec<ScoredVideo<'a>>, explain: bool) -> Self {
        let related = ranked
            .into_iter()
            .map(|scored| RelatedEntry {
                video: scored.video,
                score: explain.then_some(scored.score),
            })
            .collect();
        Self { id, related }
    }
}

fn build_finder(limit: usize, title_weight: u32, category_weight: u32) -> Result<RelatedFinder> {
    let config = RelatedConfig::new()
        .with_limit(limit)
        .with_weights(RelevanceWeights {
            title_keyword: title_weight,
            category_match: category_weight,
        });
    RelatedFinder::new(config).context("Invalid scoring configuration")
}

fn related_lines(
    catalog: &Catalog,
    finder: &RelatedFinder,
    id: Option<&str>,
    explain: bool,
) -> Result<Vec<String>> {
    let currents: Vec<&VideoRecord> = match id {
        Some(id) => vec![catalog
            .get(id)
            .with_context(|| format!("Video {id:?} not found in catalog"))?],
        None => catalog.iter().collect(),
    };

    currents
        .into_iter()
        .map(|current| {
            let ranked = finder.rank(Some(current), catalog.videos());
            debug!(id = %current.id, related = ranked.len(), "generated related list");
            let output = RelatedOutput::new(&current.id, ranked, explain);
            serde_json::to_string(&output).context("Failed to encode related list")
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Related {
            catalog,
            id,
            limit,
            title_weight,
            category_weight,
            explain,
        } => {
            let finder = build_finder(limit, title_weight, category_weight)?;
            let catalog = Catalog::from_path(&catalog)
                .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
            info!(videos = catalog.len(), limit, "Generating related videos...");

            for line in related_lines(&catalog, &finder, id.as_deref(), explain)? {
                writeln!(out, "{line}")?;
            }
        }
        Commands::Slug { text } => {
            writeln!(out, "{}", slugify(&text))?;
        }
    }

    Ok(())
}

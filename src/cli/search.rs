//! `disco search` command
//!
//! Searches posts by title, content and category, ranked by the
//! weighted relevance score. With `--live`, query lines are read from
//! stdin and pushed through the debounce gate, so only the last line
//! of a fast burst is evaluated - the search-as-you-type path of the
//! platform's web client.
//!
//! # Usage
//! ```bash
//! disco search "dog training"
//! disco search "transformers" --sort machine-learning
//! disco search --live
//! ```

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::utils::{self, format_count};
use crate::config::Config;
use crate::core::debounce::DebounceGate;
use crate::core::pipeline::{evaluate, SortMode};
use crate::core::post::{self, Post};
use crate::core::score;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (omit with --live to read queries from stdin)
    pub query: Option<String>,

    /// Sort mode used as category filter: popular, newest, or a slug
    #[arg(short, long, default_value = "popular")]
    pub sort: String,

    /// Maximum results to print
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Read query lines from stdin, debounced
    #[arg(long)]
    pub live: bool,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// API base URL (overrides config)
    #[arg(long, env = "DISCO_API_URL")]
    pub api_url: Option<String>,
}

pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let client = utils::api_client(&config, args.api_url.as_deref())?;

    let posts = post::ingest(client.fetch_posts().await?);
    let sort = SortMode::from(args.sort.as_str());

    if args.live {
        return run_live(&posts, &sort, &args, &config).await;
    }

    let query = args.query.clone().unwrap_or_default();
    print_results(&posts, &sort, &query, &args)
}

/// Evaluate one query and print the top results
fn print_results(posts: &[Post], sort: &SortMode, query: &str, args: &SearchArgs) -> Result<()> {
    let tokens = score::tokenize(query);
    let results = evaluate(posts, sort, &tokens);
    let shown = &results[..results.len().min(args.limit)];

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No matching content found. Try different search terms or filters.");
        return Ok(());
    }

    println!("\nFound {} result(s):\n", results.len());
    for (i, post) in shown.iter().enumerate() {
        let relevance = score::score(post, &tokens);
        println!("{}. {}", i + 1, post.title.bold());
        println!(
            "   {} | {} views | score {}",
            post.category,
            format_count(post.views, 1),
            relevance
        );
        if !post.summary.is_empty() {
            let preview = utils::truncate(&post.summary, 100);
            println!("   {}\n", preview.dimmed());
        } else {
            println!();
        }
    }
    Ok(())
}

/// Live mode: stdin lines -> debounce gate -> pipeline.
///
/// The dataset is fetched once; each settled query re-evaluates it.
async fn run_live(posts: &[Post], sort: &SortMode, args: &SearchArgs, config: &Config) -> Result<()> {
    let window = Duration::from_millis(config.search.debounce_ms);
    let (gate, mut settled) = DebounceGate::new(window);

    // Reader task owns the gate; dropping it at EOF flushes the last
    // held query and closes the settled stream.
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if !gate.input(line) {
                break;
            }
        }
    });

    eprintln!("live search: type a query and pause to see results (Ctrl-D to quit)");

    while let Some(query) = settled.recv().await {
        tracing::debug!(query = %query, "query settled");
        print_results(posts, sort, &query, args)?;
    }

    reader.await?;
    Ok(())
}

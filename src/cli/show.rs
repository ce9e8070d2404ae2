//! `disco show` command
//!
//! The article detail view: one post in full, a handful of randomly
//! sampled recommendations, and a fire-and-forget view-tracking call.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use rand::seq::SliceRandom;

use super::utils::{self, format_count, format_date};
use crate::config::Config;
use crate::core::post::{self, Post};

/// How many recommended posts to show under the article
const RECOMMENDED_COUNT: usize = 5;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Post id
    pub id: String,

    /// Skip the view-tracking call
    #[arg(long)]
    pub no_track: bool,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// API base URL (overrides config)
    #[arg(long, env = "DISCO_API_URL")]
    pub api_url: Option<String>,
}

pub async fn run(args: ShowArgs) -> Result<()> {
    let config = Config::load()?;
    let client = utils::api_client(&config, args.api_url.as_deref())?;

    let posts = post::ingest(client.fetch_posts().await?);

    let Some(current) = posts.iter().find(|p| p.id == args.id) else {
        bail!("Post not found: {}", args.id);
    };

    let others: Vec<&Post> = posts.iter().filter(|p| p.id != args.id).collect();
    let recommended: Vec<&Post> = others
        .choose_multiple(&mut rand::thread_rng(), RECOMMENDED_COUNT)
        .copied()
        .collect();

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(current)?);
    } else {
        print_article(current, &recommended);
    }

    // View tracking must never fail the command.
    if !args.no_track {
        if let Err(err) = client.track_view(&current.id).await {
            tracing::warn!(error = %err, "failed to track view");
        }
    }

    Ok(())
}

fn print_article(post: &Post, recommended: &[&Post]) {
    println!("\n{}", post.title.bold());
    println!(
        "{}",
        format!(
            "{} | {} | {} views",
            post.category,
            format_date(&post.date_added),
            format_count(post.views, 1)
        )
        .dimmed()
    );

    if !post.summary.is_empty() {
        println!("\n{}", post.summary);
    }

    if !recommended.is_empty() {
        println!("\n{}", "Recommended".bold());
        for p in recommended {
            println!("  {}  {}", p.id.dimmed(), utils::truncate(&p.title, 60));
        }
    }
    println!();
}

//! `disco feed` command
//!
//! The main content listing: category filter, free-text search,
//! popular/newest sorting and fixed-size pages, exactly as the
//! platform's landing page behaves.
//!
//! # Usage
//! ```bash
//! disco feed
//! disco feed --sort newest --page 2
//! disco feed --sort machine-learning --query "transformers"
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use super::utils::{self, format_count, format_date};
use crate::config::Config;
use crate::core::category;
use crate::core::page::{paginate, total_pages};
use crate::core::pipeline::{FeedState, SortMode};
use crate::core::post::{self, Post};

#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Free-text search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Sort mode: popular, newest, or a category slug
    #[arg(short, long, default_value = "popular")]
    pub sort: String,

    /// Page to display (1-based)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Cards per page (overrides config)
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// API base URL (overrides config)
    #[arg(long, env = "DISCO_API_URL")]
    pub api_url: Option<String>,
}

#[derive(Tabled)]
struct FeedRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Views")]
    views: String,
    #[tabled(rename = "Published")]
    published: String,
}

pub async fn run(args: FeedArgs) -> Result<()> {
    let config = Config::load()?;
    let client = utils::api_client(&config, args.api_url.as_deref())?;
    let page_size = args.page_size.unwrap_or(config.feed.page_size);

    let (raw_posts, raw_categories) =
        tokio::try_join!(client.fetch_posts(), client.fetch_categories())?;

    let posts = post::ingest(raw_posts);
    let categories = category::from_labels(
        raw_categories.into_iter().map(|c| c.category_name),
    );

    let sort = SortMode::from(args.sort.as_str());
    if let SortMode::Category(slug) = &sort {
        if !categories.iter().any(|c| c.value.contains(slug.as_str())) {
            tracing::warn!(slug = %slug, "unknown category selector");
        }
    }

    let mut state = FeedState::default();
    state.set_sort(sort);
    if let Some(query) = &args.query {
        state.set_query(query.clone());
    }
    // Page is applied last so filter/query changes keep it at 1.
    state.set_page(args.page);

    let matched = state.evaluate(&posts);
    let pages = total_pages(matched.len(), page_size);
    let current = paginate(&matched, state.page, page_size);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(current)?);
        return Ok(());
    }

    print_feed(current, &state, matched.len(), pages, page_size);
    Ok(())
}

fn print_feed(current: &[Post], state: &FeedState, matched: usize, pages: usize, page_size: usize) {
    println!("\n{}", "Discover more".bold());

    if current.is_empty() {
        println!("\nNo matching content found. Try different search terms or filters.");
        return;
    }

    let offset = (state.page - 1) * page_size;
    let rows: Vec<FeedRow> = current
        .iter()
        .enumerate()
        .map(|(i, p)| FeedRow {
            index: offset + i + 1,
            title: utils::truncate(&p.title, 48),
            category: p.category.clone(),
            views: format_count(p.views, 1),
            published: format_date(&p.date_added),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);

    println!(
        "{}",
        format!("page {}/{} · {} matching post(s)", state.page, pages, matched).dimmed()
    );
}

// ============== Categories ==============

#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// API base URL (overrides config)
    #[arg(long, env = "DISCO_API_URL")]
    pub api_url: Option<String>,
}

pub async fn run_categories(args: CategoriesArgs) -> Result<()> {
    let config = Config::load()?;
    let client = utils::api_client(&config, args.api_url.as_deref())?;

    let raw = client.fetch_categories().await?;
    let categories = category::from_labels(raw.into_iter().map(|c| c.category_name));

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    if categories.is_empty() {
        println!("No categories available.");
        return Ok(());
    }

    for cat in &categories {
        println!("{}\t{}", cat.value, cat.label);
    }
    Ok(())
}

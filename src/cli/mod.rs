//! CLI module - Command definitions and handlers

use clap::{Parser, Subcommand};

pub mod channels;
pub mod config;
pub mod feed;
pub mod search;
pub mod show;
pub mod utils;

/// disco - terminal client for the Wake & Participate content platform
///
/// Browse, search and read published posts straight from the API.
#[derive(Parser, Debug)]
#[command(name = "disco")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the content feed (search, filter, sort, paginate)
    Feed(feed::FeedArgs),

    /// Search posts by title, content or category
    Search(search::SearchArgs),

    /// Show one post in full, with recommendations
    Show(show::ShowArgs),

    /// List featured YouTube channels
    Channels(channels::ChannelsArgs),

    /// List post categories
    Categories(feed::CategoriesArgs),

    /// Get or set configuration
    Config(config::ConfigArgs),
}

//! disco CLI - Entry point
//!
//! Usage: disco <command> [options]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use disco::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("disco=debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Run command
    match cli.command {
        Commands::Feed(args) => disco::cli::feed::run(args).await,
        Commands::Search(args) => disco::cli::search::run(args).await,
        Commands::Show(args) => disco::cli::show::run(args).await,
        Commands::Channels(args) => disco::cli::channels::run(args).await,
        Commands::Categories(args) => disco::cli::feed::run_categories(args).await,
        Commands::Config(args) => disco::cli::config::run(args),
    }
}

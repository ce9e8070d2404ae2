//! `disco config` command
//!
//! Inspect and edit the TOML configuration.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::config::Config;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key (api.base_url, api.timeout_secs, feed.page_size, search.debounce_ms)
        key: String,
        /// New value
        value: String,
    },

    /// Print the path config writes go to
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load()?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommand::Set { key, value } => set(&key, &value),
        ConfigCommand::Path => {
            println!("{}", Config::write_path()?.display());
            Ok(())
        }
    }
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api.base_url" => config.api.base_url = value.to_string(),
        "api.timeout_secs" => config.api.timeout_secs = parse(key, value)?,
        "feed.page_size" => config.feed.page_size = parse(key, value)?,
        "search.debounce_ms" => config.search.debounce_ms = parse(key, value)?,
        _ => bail!(
            "Unknown config key: {} (expected api.base_url, api.timeout_secs, feed.page_size or search.debounce_ms)",
            key
        ),
    }

    let path = Config::write_path()?;
    config.save_to(&path)?;
    println!("Set {} = {} ({})", key, value, path.display());
    Ok(())
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid value for {}: {}", key, value))
}

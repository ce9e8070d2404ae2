//! `disco channels` command
//!
//! Featured YouTube channels, derived from the advertisement feed the
//! way the platform's sidebar does it: only youtube-type ads with a
//! channel name qualify, and the channel URL falls back to the ad's
//! redirection URL.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::utils;
use crate::config::Config;
use crate::remote::RawAdvertisement;

#[derive(Args, Debug)]
pub struct ChannelsArgs {
    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// API base URL (overrides config)
    #[arg(long, env = "DISCO_API_URL")]
    pub api_url: Option<String>,
}

/// A featured channel
#[derive(Debug, Clone, Serialize)]
pub struct Channel {
    pub name: String,
    pub url: Option<String>,
}

/// Reduce the advertisement feed to featured channels
pub fn featured_channels(ads: Vec<RawAdvertisement>) -> Vec<Channel> {
    ads.into_iter()
        .filter(|ad| ad.advertise_type.as_deref() == Some("youtube"))
        .filter_map(|ad| {
            let name = ad.youtube_channel_name?;
            let url = ad.youtube_channel_url.or(ad.redirection_url);
            Some(Channel { name, url })
        })
        .collect()
}

pub async fn run(args: ChannelsArgs) -> Result<()> {
    let config = Config::load()?;
    let client = utils::api_client(&config, args.api_url.as_deref())?;

    let channels = featured_channels(client.fetch_advertisements().await?);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&channels)?);
        return Ok(());
    }

    if channels.is_empty() {
        println!("No featured YouTube channels available");
        return Ok(());
    }

    println!("\n{}", "Featured channels".bold());
    for channel in &channels {
        match &channel.url {
            Some(url) => println!("  {}  {}", channel.name, url.dimmed()),
            None => println!("  {}", channel.name),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad(kind: Option<&str>, name: Option<&str>, url: Option<&str>, redirect: Option<&str>) -> RawAdvertisement {
        RawAdvertisement {
            advertise_type: kind.map(str::to_string),
            youtube_channel_name: name.map(str::to_string),
            youtube_channel_url: url.map(str::to_string),
            redirection_url: redirect.map(str::to_string),
        }
    }

    #[test]
    fn test_only_named_youtube_ads_qualify() {
        let channels = featured_channels(vec![
            ad(Some("youtube"), Some("TechTalks"), Some("https://yt/tech"), None),
            ad(Some("banner"), Some("NotAChannel"), None, None),
            ad(Some("youtube"), None, Some("https://yt/anon"), None),
        ]);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "TechTalks");
    }

    #[test]
    fn test_url_falls_back_to_redirection() {
        let channels = featured_channels(vec![ad(
            Some("youtube"),
            Some("TechTalks"),
            None,
            Some("https://redirect.example"),
        )]);
        assert_eq!(channels[0].url.as_deref(), Some("https://redirect.example"));
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use codecard_core::Platform;
use codecard_fetch::{ProfileClient, ProfileFetcher};

#[derive(Debug, Parser)]
#[command(name = "codecard")]
#[command(about = "Competitive-programming profile cards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a profile summary and print it as JSON.
    Fetch {
        #[arg(long)]
        platform: Platform,
        #[arg(long)]
        username: String,
    },
    /// Fetch a profile and write its SVG card to disk.
    Card {
        #[arg(long)]
        platform: Platform,
        #[arg(long)]
        username: String,
        /// Output path; defaults to `{platform}-profile-card.svg`.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt::init();

    let config = codecard_core::load_app_config()?;
    let client = ProfileClient::with_base_urls(
        config.fetch.clone(),
        config.request_timeout_secs,
        &config.leetcode_base_url,
        &config.codechef_base_url,
    )?;
    let fetcher = ProfileFetcher::new(client);

    match cli.command {
        Commands::Fetch { platform, username } => {
            let outcome = fetcher.fetch(platform, &username).await;
            if outcome.degraded {
                tracing::warn!(%platform, "degraded result: showing placeholder data");
            }
            println!("{}", serde_json::to_string_pretty(&outcome.summary)?);
        }
        Commands::Card {
            platform,
            username,
            out,
        } => {
            let outcome = fetcher.fetch(platform, &username).await;
            if outcome.degraded {
                tracing::warn!(%platform, "degraded result: rendering placeholder data");
            }
            let svg = codecard_render::export(&outcome.summary).to_svg();
            let path =
                out.unwrap_or_else(|| PathBuf::from(codecard_render::export_file_name(platform)));
            std::fs::write(&path, svg)?;
            println!("wrote {}", path.display());
        }
    }

    Ok(())
}

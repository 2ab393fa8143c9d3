//! Command line front end for thumbnail resolution and embed snippets.
//!
//! # Usage
//!
//! ```bash
//! # Print the video id of a YouTube URL
//! cargo run --bin thumbctl -- extract "https://youtu.be/dQw4w9WgXcQ?si=xyz"
//!
//! # Resolve the best thumbnail
//! cargo run --bin thumbctl -- resolve "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
//!
//! # Print the embed snippet for a video
//! cargo run --bin thumbctl -- embed "https://youtu.be/dQw4w9WgXcQ"
//!
//! # Print the embed snippet for a direct image
//! cargo run --bin thumbctl -- embed --image "https://example.com/cover.png"
//! ```
//!
//! When the URL argument is omitted it is asked for interactively.
//!
//! # Environment Variables
//!
//! - `PROBE_TIMEOUT_MS` - default for `--timeout-ms`
//! - `THUMBNAIL_CDN` - default for `--cdn`

use thumb_overlay::application::services::ThumbnailService;
use thumb_overlay::domain::entities::{
    DEFAULT_THUMBNAIL_CDN, ThumbnailQuality, embed_snippet, embed_video_url,
};
use thumb_overlay::domain::probe::ImageProbe;
use thumb_overlay::infrastructure::probe::{HttpImageProbe, OfflineProbe};
use thumb_overlay::utils::image_url::validate_image_url;
use thumb_overlay::utils::video_id::extract_video_id;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;
use std::time::Duration;

/// YouTube thumbnail and embed snippet tool.
#[derive(Parser)]
#[command(name = "thumbctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the video id of a YouTube URL
    Extract {
        /// YouTube URL (prompted if omitted)
        url: Option<String>,
    },

    /// Resolve the best available thumbnail for a YouTube URL
    Resolve {
        /// YouTube URL (prompted if omitted)
        url: Option<String>,

        #[command(flatten)]
        probe: ProbeArgs,
    },

    /// Print the embed snippet for a YouTube URL or a direct image
    Embed {
        /// YouTube URL (prompted if neither it nor --image is given)
        #[arg(conflicts_with = "image")]
        url: Option<String>,

        /// Direct image URL instead of a resolved thumbnail
        #[arg(long)]
        image: Option<String>,

        /// Link target for a direct image
        #[arg(long, requires = "image")]
        youtube: Option<String>,

        #[command(flatten)]
        probe: ProbeArgs,
    },
}

/// Probe settings shared by resolving commands.
#[derive(Args)]
struct ProbeArgs {
    /// Skip the network probe and use the hqdefault thumbnail
    #[arg(long)]
    offline: bool,

    /// Probe timeout in milliseconds
    #[arg(long, env = "PROBE_TIMEOUT_MS", default_value_t = 5_000)]
    timeout_ms: u64,

    /// Thumbnail CDN base URL
    #[arg(long, env = "THUMBNAIL_CDN", default_value = DEFAULT_THUMBNAIL_CDN)]
    cdn: String,
}

impl ProbeArgs {
    fn build_service(&self) -> Result<ThumbnailService> {
        let probe: Arc<dyn ImageProbe> = if self.offline {
            Arc::new(OfflineProbe::new())
        } else {
            Arc::new(
                HttpImageProbe::new(Duration::from_millis(self.timeout_ms))
                    .context("Failed to build HTTP client")?,
            )
        };

        Ok(ThumbnailService::new(probe, self.cdn.clone()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { url } => handle_extract(url)?,
        Commands::Resolve { url, probe } => handle_resolve(url, &probe).await?,
        Commands::Embed {
            url,
            image,
            youtube,
            probe,
        } => match image {
            Some(image) => handle_embed_image(&image, youtube.as_deref())?,
            None => handle_embed_video(url, &probe).await?,
        },
    }

    Ok(())
}

/// Returns `url` or asks for it.
fn url_or_prompt(url: Option<String>) -> Result<String> {
    match url {
        Some(url) => Ok(url),
        None => Ok(Input::new().with_prompt("YouTube URL").interact_text()?),
    }
}

fn handle_extract(url: Option<String>) -> Result<()> {
    let url = url_or_prompt(url)?;

    let video_id = extract_video_id(&url).context("Invalid YouTube URL")?;
    println!("{}", video_id.as_str().bright_yellow().bold());

    Ok(())
}

/// Resolves and prints the thumbnail URL.
///
/// # Output Format
///
/// ```text
/// 🔍 Resolving thumbnail for dQw4w9WgXcQ
///   Quality: maxresdefault
///   URL:     https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg
/// ```
async fn handle_resolve(url: Option<String>, probe: &ProbeArgs) -> Result<()> {
    let url = url_or_prompt(url)?;
    let service = probe.build_service()?;

    let video_id = extract_video_id(&url).context("Invalid YouTube URL")?;

    println!(
        "{} {}",
        "🔍 Resolving thumbnail for".bright_blue().bold(),
        video_id.as_str().cyan()
    );

    let thumbnail = service.resolve(&video_id).await;

    let quality = match thumbnail.quality {
        ThumbnailQuality::MaxRes => "maxresdefault".green(),
        ThumbnailQuality::High => "hqdefault (fallback)".yellow(),
    };

    println!("  Quality: {}", quality);
    println!("  URL:     {}", thumbnail.as_str().bright_white());

    Ok(())
}

async fn handle_embed_video(url: Option<String>, probe: &ProbeArgs) -> Result<()> {
    let url = url_or_prompt(url)?;
    let service = probe.build_service()?;

    let resolved = service.resolve_url(&url).await?;

    println!("{}", embed_snippet(&url, resolved.thumbnail.as_str()));

    Ok(())
}

fn handle_embed_image(image: &str, youtube: Option<&str>) -> Result<()> {
    validate_image_url(image).context("Invalid image URL")?;

    let video_url = embed_video_url(youtube, image);
    println!("{}", embed_snippet(&video_url, image));

    Ok(())
}

//! CLI command implementations

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::config::Settings;
use crate::summarize::SummaryPipeline;
use crate::transcript::{extract_video_id, TranscriptSource, YoutubeTranscriptClient};

/// Fetch a video's transcript and print or save its summary
pub async fn summarize_video(
    settings: &Settings,
    url: &str,
    show_transcript: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let video_id = extract_video_id(url)
        .with_context(|| format!("Invalid YouTube URL: {url}"))?;

    tracing::info!("Fetching transcript for video {}", video_id);
    let source = YoutubeTranscriptClient::new()?;
    let transcript = source.fetch_transcript(&video_id).await?;

    if show_transcript {
        println!("Transcript:");
        println!();
        println!("{}", transcript);
        println!();
    }

    if transcript.is_empty() {
        println!("Nothing to summarize: transcript is empty");
        return Ok(());
    }

    let pipeline = SummaryPipeline::from_settings(settings);
    let summary = pipeline.summarize(&transcript).await?;

    if let Some(path) = output {
        std::fs::write(&path, &summary)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        println!("Summary written to: {}", path.display());
    } else {
        println!("Summary:");
        println!();
        println!("{}", summary);
    }

    Ok(())
}

/// Fetch and print a video's transcript
pub async fn show_transcript(url: &str) -> Result<()> {
    let video_id = extract_video_id(url)
        .with_context(|| format!("Invalid YouTube URL: {url}"))?;

    let source = YoutubeTranscriptClient::new()?;
    let transcript = source.fetch_transcript(&video_id).await?;

    if transcript.is_empty() {
        println!("Transcript is empty");
    } else {
        println!("{}", transcript);
    }

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(settings)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

//! ytbrief - YouTube transcript extraction and AI-powered summaries
//!
//! Entry point for the ytbrief CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ytbrief::cli::{Cli, Commands};
use ytbrief::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            ytbrief::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Summarize {
                    url,
                    transcript,
                    output,
                } => {
                    ytbrief::cli::commands::summarize_video(&settings, &url, transcript, output)
                        .await?;
                }
                Commands::Transcript { url } => {
                    ytbrief::cli::commands::show_transcript(&url).await?;
                }
                Commands::Config(config_cmd) => {
                    ytbrief::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}

//! ytbrief - YouTube transcript extraction and AI-powered summaries
//!
//! "ytbrief" keeps it brief: fetch a video's transcript, condense it.

pub mod cli;
pub mod config;
pub mod llm;
pub mod summarize;
pub mod transcript;

use thiserror::Error;

/// Main error type for ytbrief
#[derive(Error, Debug)]
pub enum YtbriefError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("Summarization failed on segment {index}: {source}")]
    Summarization {
        index: usize,
        #[source]
        source: anyhow::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, YtbriefError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "ytbrief";

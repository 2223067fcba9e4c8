//! Transcript module for ytbrief
//!
//! Fetches caption transcripts for YouTube videos.

mod youtube;

use async_trait::async_trait;

use crate::Result;

pub use youtube::{extract_video_id, YoutubeTranscriptClient};

/// Source of raw transcript text for a video.
///
/// A fetch failure is distinct from an empty transcript: implementations
/// return an error when no transcript can be obtained, and `Ok` with empty
/// text only when the video genuinely has an empty transcript.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String>;
}

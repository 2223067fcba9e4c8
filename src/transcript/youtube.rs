//! YouTube caption fetching
//!
//! Pulls the caption track list from the watch page and downloads the
//! timedtext track, yielding plain transcript text.

use anyhow::Context;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::sync::OnceLock;

use crate::transcript::TranscriptSource;
use crate::{Result, YtbriefError};

/// Extract the 11-character video id from a YouTube URL.
///
/// Accepts watch URLs, short youtu.be links, and embed URLs.
pub fn extract_video_id(url: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("valid regex"));

    pattern.captures(url).map(|caps| caps[1].to_string())
}

/// Fetches transcripts from YouTube's public caption endpoints.
pub struct YoutubeTranscriptClient {
    http: Client,
}

impl YoutubeTranscriptClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| YtbriefError::Other(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    async fn fetch_watch_page(&self, video_id: &str) -> anyhow::Result<String> {
        let url = format!("https://www.youtube.com/watch?v={video_id}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to fetch watch page")?
            .error_for_status()
            .context("Watch page returned an error status")?;
        response.text().await.context("Failed to read watch page")
    }

    async fn fetch_track(&self, base_url: &str) -> anyhow::Result<String> {
        let response = self
            .http
            .get(base_url)
            .send()
            .await
            .context("Failed to fetch caption track")?
            .error_for_status()
            .context("Caption track returned an error status")?;
        response.text().await.context("Failed to read caption track")
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptClient {
    async fn fetch_transcript(&self, video_id: &str) -> Result<String> {
        let page = self
            .fetch_watch_page(video_id)
            .await
            .map_err(|e| YtbriefError::TranscriptUnavailable(e.to_string()))?;

        let tracks = parse_caption_tracks(&page).ok_or_else(|| {
            YtbriefError::TranscriptUnavailable(format!(
                "No captions available for video {video_id}"
            ))
        })?;

        let track = select_track(&tracks).ok_or_else(|| {
            YtbriefError::TranscriptUnavailable(format!(
                "No usable caption track for video {video_id}"
            ))
        })?;

        tracing::debug!(
            "Fetching caption track (lang: {})",
            track.language_code.as_deref().unwrap_or("unknown")
        );

        let xml = self
            .fetch_track(&track.base_url)
            .await
            .map_err(|e| YtbriefError::TranscriptUnavailable(e.to_string()))?;

        Ok(parse_timedtext(&xml))
    }
}

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,

    #[serde(rename = "languageCode")]
    language_code: Option<String>,
}

/// Locate the caption track list embedded in the watch page's player JSON.
fn parse_caption_tracks(page: &str) -> Option<Vec<CaptionTrack>> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(r#""captionTracks":(\[.*?\])"#).expect("valid regex"));

    let raw = pattern.captures(page)?.get(1)?.as_str();
    let tracks: Vec<CaptionTrack> = serde_json::from_str(raw).ok()?;
    if tracks.is_empty() {
        None
    } else {
        Some(tracks)
    }
}

/// Prefer an English track; otherwise take the first one offered.
fn select_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    tracks
        .iter()
        .find(|t| {
            t.language_code
                .as_deref()
                .map(|code| code.starts_with("en"))
                .unwrap_or(false)
        })
        .or_else(|| tracks.first())
}

/// Convert timedtext XML into plain text, caption lines joined with spaces.
fn parse_timedtext(xml: &str) -> String {
    static TEXT_PATTERN: OnceLock<Regex> = OnceLock::new();
    static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

    let text_pattern = TEXT_PATTERN
        .get_or_init(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").expect("valid regex"));
    let tag_pattern = TAG_PATTERN.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"));

    let lines: Vec<String> = text_pattern
        .captures_iter(xml)
        .map(|caps| {
            let inner = tag_pattern.replace_all(&caps[1], "");
            decode_entities(inner.trim())
        })
        .filter(|line| !line.is_empty())
        .collect();

    lines.join(" ")
}

/// Decode the HTML entities YouTube emits in caption payloads.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("\n", " ")
}

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// One summarization request for a single transcript segment.
///
/// `min_length`/`max_length` are advisory word bounds; the model is not
/// guaranteed to respect them exactly. `deterministic` disables sampling so
/// the same segment always yields the same summary.
pub struct ChunkRequest<'a> {
    pub text: &'a str,
    pub min_length: usize,
    pub max_length: usize,
    pub deterministic: bool,
}

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize_chunk(&self, request: ChunkRequest<'_>) -> Result<String>;
}

/// Build a summarization provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn SummaryProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Arc::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn gemini_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Gemini API key is missing"));
    }
}

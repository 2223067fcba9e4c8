//! Chunked summarization pipeline orchestration

use std::sync::Arc;

use tokio::sync::{OnceCell, Semaphore};
use tokio::task::JoinSet;

use crate::config::{Settings, SummarizerSettings};
use crate::llm::{build_provider, ChunkRequest, SummaryProvider};
use crate::summarize::chunker::chunk;
use crate::{Result, YtbriefError};

type ProviderFactory = Box<dyn Fn() -> anyhow::Result<Arc<dyn SummaryProvider>> + Send + Sync>;

/// Summarization pipeline: chunk the transcript, summarize each segment,
/// join the per-segment summaries in segment order.
///
/// The provider is built on first use and reused for the life of the
/// pipeline; model/client initialization dominates single-call cost.
pub struct SummaryPipeline {
    config: SummarizerSettings,
    provider: OnceCell<Arc<dyn SummaryProvider>>,
    factory: ProviderFactory,
}

impl SummaryPipeline {
    /// Create a pipeline that builds its provider from settings on first use.
    pub fn from_settings(settings: &Settings) -> Self {
        let settings = settings.clone();
        Self {
            config: settings.summarizer.clone(),
            provider: OnceCell::new(),
            factory: Box::new(move || build_provider(&settings)),
        }
    }

    /// Create a pipeline around an already-built provider.
    pub fn with_provider(config: SummarizerSettings, provider: Arc<dyn SummaryProvider>) -> Self {
        Self {
            config,
            provider: OnceCell::new_with(Some(provider)),
            factory: Box::new(|| anyhow::bail!("provider already initialized")),
        }
    }

    /// Summarize `text` into a single condensed summary.
    ///
    /// Each segment is summarized independently with deterministic generation
    /// and advisory length bounds; results are joined with single spaces in
    /// segment order. Empty input yields an empty summary without touching
    /// the provider.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        self.config.validate()?;

        let segments = chunk(text, self.config.max_chunk_size)?;
        if segments.is_empty() {
            return Ok(String::new());
        }

        tracing::info!("Summarizing transcript in {} segment(s)", segments.len());

        let provider = self.provider().await?;

        let summaries = if self.config.concurrency > 1 {
            self.summarize_concurrent(&provider, &segments).await?
        } else {
            self.summarize_sequential(&provider, &segments).await?
        };

        Ok(summaries.join(" "))
    }

    /// Get the provider, initializing it exactly once on first use.
    async fn provider(&self) -> Result<Arc<dyn SummaryProvider>> {
        let provider = self
            .provider
            .get_or_try_init(|| async { (self.factory)() })
            .await
            .map_err(|e| YtbriefError::InvalidConfig(e.to_string()))?;
        Ok(provider.clone())
    }

    fn request<'a>(&self, segment: &'a str) -> ChunkRequest<'a> {
        ChunkRequest {
            text: segment,
            min_length: self.config.summary_min_length,
            max_length: self.config.summary_max_length,
            deterministic: true,
        }
    }

    async fn summarize_sequential(
        &self,
        provider: &Arc<dyn SummaryProvider>,
        segments: &[&str],
    ) -> Result<Vec<String>> {
        let mut summaries = Vec::with_capacity(segments.len());

        for (index, segment) in segments.iter().enumerate() {
            tracing::debug!("Summarizing segment {}/{}", index + 1, segments.len());

            let summary = provider
                .summarize_chunk(self.request(segment))
                .await
                .map_err(|source| YtbriefError::Summarization { index, source })?;
            summaries.push(summary);
        }

        Ok(summaries)
    }

    /// Bounded fan-out across segments; fan-in by segment index so the final
    /// join order never depends on completion order.
    async fn summarize_concurrent(
        &self,
        provider: &Arc<dyn SummaryProvider>,
        segments: &[&str],
    ) -> Result<Vec<String>> {
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency));
        let mut tasks: JoinSet<(usize, anyhow::Result<String>)> = JoinSet::new();

        for (index, segment) in segments.iter().enumerate() {
            let provider = provider.clone();
            let semaphore = semaphore.clone();
            let segment = segment.to_string();
            let min_length = self.config.summary_min_length;
            let max_length = self.config.summary_max_length;

            tasks.spawn(async move {
                let result = async {
                    let _permit = semaphore.acquire_owned().await?;
                    provider
                        .summarize_chunk(ChunkRequest {
                            text: &segment,
                            min_length,
                            max_length,
                            deterministic: true,
                        })
                        .await
                }
                .await;
                (index, result)
            });
        }

        let mut slots: Vec<Option<anyhow::Result<String>>> = Vec::new();
        slots.resize_with(segments.len(), || None);

        while let Some(joined) = tasks.join_next().await {
            let (index, result) =
                joined.map_err(|e| YtbriefError::Other(format!("Summarization task failed: {e}")))?;
            slots[index] = Some(result);
        }

        // Report the lowest failing index so errors are stable across runs.
        let mut summaries = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(Ok(summary)) => summaries.push(summary),
                Some(Err(source)) => return Err(YtbriefError::Summarization { index, source }),
                None => {
                    return Err(YtbriefError::Other(format!(
                        "Missing result for segment {index}"
                    )))
                }
            }
        }

        Ok(summaries)
    }
}

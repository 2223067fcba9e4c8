//! LLM module for ytbrief
//!
//! Provides the summarization capability behind the chunked pipeline.

mod client;
mod gemini;
mod prompts;

pub use client::{build_provider, ChunkRequest, SummaryProvider};
pub use gemini::GeminiClient;

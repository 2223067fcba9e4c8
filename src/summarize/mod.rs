//! Summarization module for ytbrief
//!
//! Splits long transcripts into bounded segments and recombines per-segment
//! summaries in order.

mod chunker;
mod pipeline;

pub use chunker::chunk;
pub use pipeline::SummaryPipeline;

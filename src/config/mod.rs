//! Configuration module for ytbrief
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{LlmSettings, Settings, SummarizerSettings};

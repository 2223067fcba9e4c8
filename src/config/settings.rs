//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::YtbriefError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Chunked summarization settings
    #[serde(default)]
    pub summarizer: SummarizerSettings,

    /// LLM provider settings
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerSettings {
    /// Maximum characters per transcript segment
    #[serde(default = "default_max_chunk_size")]
    pub max_chunk_size: usize,

    /// Advisory lower bound on per-segment summary length, in words
    #[serde(default = "default_summary_min_length")]
    pub summary_min_length: usize,

    /// Advisory upper bound on per-segment summary length, in words
    #[serde(default = "default_summary_max_length")]
    pub summary_max_length: usize,

    /// Number of segments summarized concurrently (1 = sequential)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (gemini)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key (for cloud providers)
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API endpoint (for local/custom providers)
    #[serde(default)]
    pub endpoint: String,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_chunk_size() -> usize {
    1000
}

fn default_summary_min_length() -> usize {
    40
}

fn default_summary_max_length() -> usize {
    150
}

fn default_concurrency() -> usize {
    1
}

fn default_llm_provider() -> String {
    "gemini".to_string()
}

fn default_llm_model() -> String {
    "gemini-2.5-flash".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            max_chunk_size: default_max_chunk_size(),
            summary_min_length: default_summary_min_length(),
            summary_max_length: default_summary_max_length(),
            concurrency: default_concurrency(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: String::new(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            summarizer: SummarizerSettings::default(),
            llm: LlmSettings::default(),
        }
    }
}

impl SummarizerSettings {
    /// Validate the summarizer configuration before any work starts.
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_chunk_size == 0 {
            return Err(YtbriefError::InvalidConfig(
                "summarizer.max_chunk_size must be positive".to_string(),
            ));
        }
        if self.summary_min_length > self.summary_max_length {
            return Err(YtbriefError::InvalidConfig(format!(
                "summarizer.summary_min_length ({}) exceeds summary_max_length ({})",
                self.summary_min_length, self.summary_max_length
            )));
        }
        Ok(())
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("YTBRIEF_GEMINI_API_KEY") {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "ytbrief", "ytbrief")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.summarizer.max_chunk_size, 1000);
        assert_eq!(settings.summarizer.summary_min_length, 40);
        assert_eq!(settings.summarizer.summary_max_length, 150);
        assert_eq!(settings.summarizer.concurrency, 1);
        assert_eq!(settings.llm.model, "gemini-2.5-flash");
    }

    #[test]
    fn default_settings_validate() {
        assert!(Settings::default().summarizer.validate().is_ok());
    }

    #[test]
    fn zero_chunk_size_fails_validation() {
        let mut settings = SummarizerSettings::default();
        settings.max_chunk_size = 0;

        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("max_chunk_size"));
    }

    #[test]
    fn inverted_bounds_fail_validation() {
        let mut settings = SummarizerSettings::default();
        settings.summary_min_length = 200;

        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("summary_min_length"));
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let settings: Settings = toml::from_str(
            "[summarizer]\nmax_chunk_size = 500\n",
        )
        .unwrap();

        assert_eq!(settings.summarizer.max_chunk_size, 500);
        assert_eq!(settings.summarizer.summary_max_length, 150);
        assert_eq!(settings.llm.provider, "gemini");
    }
}

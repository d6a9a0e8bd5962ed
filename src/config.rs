//! Configuration Management
//!
//! `config.toml` in the data root selects the generation and embedding
//! providers and tunes chunking, retrieval and logging. Every key is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analysis::chunker::DEFAULT_MAX_CHUNK_LINES;
use crate::llm::adapters::transport::DEFAULT_TIMEOUT_SECS;
use crate::retrieval::splitter::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Config file name inside the data root
pub const CONFIG_FILE: &str = "config.toml";

/// Default number of passages retrieved per question
pub const DEFAULT_TOP_K: usize = 3;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub analysis: AnalysisConfig,
    pub retrieval: RetrievalConfig,
    pub logging: LoggingConfig,
}

/// Generation provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// gemini | openai | ollama | stub | disabled
    pub provider: String,
    pub base_url: Option<String>,
    pub model: Option<String>,
    /// Literal key or `env:NAME`
    pub api_key: Option<String>,
    /// Ollama host
    pub host: String,
    /// Ollama port
    pub port: String,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            base_url: None,
            model: None,
            api_key: None,
            host: "127.0.0.1".to_string(),
            port: "11434".to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Embedding provider settings
///
/// Unset keys fall back to the `[llm]` values (except `model`, which has a
/// per-provider default).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
}

impl EmbeddingConfig {
    /// Embedding settings with `[llm]` fallbacks applied
    ///
    /// `base_url` and `api_key` are inherited only when the provider is too,
    /// so a Gemini key is never sent to an OpenAI endpoint.
    pub fn resolve(&self, llm: &LlmConfig) -> LlmConfig {
        let provider = self.provider.clone().unwrap_or_else(|| llm.provider.clone());
        let same_provider = provider == llm.provider;
        LlmConfig {
            base_url: self
                .base_url
                .clone()
                .or_else(|| same_provider.then(|| llm.base_url.clone()).flatten()),
            api_key: self
                .api_key
                .clone()
                .or_else(|| same_provider.then(|| llm.api_key.clone()).flatten()),
            model: self.model.clone(),
            host: self.host.clone().unwrap_or_else(|| llm.host.clone()),
            port: self.port.clone().unwrap_or_else(|| llm.port.clone()),
            timeout_secs: llm.timeout_secs,
            provider,
        }
    }
}

/// Chunk analysis settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub max_chunk_lines: usize,
    /// Parallel generation calls; 1 means sequential
    pub concurrency: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_chunk_lines: DEFAULT_MAX_CHUNK_LINES,
            concurrency: 1,
        }
    }
}

/// Tuning-guide retrieval settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
    /// Ingestion window size in characters
    pub chunk_size: usize,
    /// Ingestion window overlap in characters
    pub overlap: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory for daily-rolling log files (relative to the data root)
    pub file: Option<PathBuf>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `config.toml` from the data root
    ///
    /// A missing file yields the defaults.
    pub fn load(data_root: &Path) -> Result<Self, ConfigError> {
        let path = data_root.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), provider = %config.llm.provider, "loaded configuration");
        Ok(config)
    }

    /// Reject values that would make chunking or retrieval undefined
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.max_chunk_lines == 0 {
            return Err(ConfigError::Invalid(
                "analysis.max_chunk_lines must be positive".to_string(),
            ));
        }
        if self.analysis.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "analysis.concurrency must be positive".to_string(),
            ));
        }
        if self.retrieval.overlap >= self.retrieval.chunk_size {
            return Err(ConfigError::Invalid(format!(
                "retrieval.overlap ({}) must be smaller than retrieval.chunk_size ({})",
                self.retrieval.overlap, self.retrieval.chunk_size
            )));
        }
        Ok(())
    }

    /// Log directory resolved against the data root
    pub fn log_dir(&self, data_root: &Path) -> Option<PathBuf> {
        self.logging.file.as_ref().map(|dir| data_root.join(dir))
    }
}

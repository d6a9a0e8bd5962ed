//! Embedding adapters
//!
//! Same shape as the generation adapters: one struct per provider over the
//! shared transport, a concrete `EmbedderKind` enum, and a factory.

use tracing::debug;

use crate::config::Config;
use crate::llm::adapters::factory::{api_key_or_env, base_url_or, GEMINI_API_KEY_ENV, OPENAI_API_KEY_ENV};
use crate::llm::adapters::gemini::{normalize_model, parse_embed_content, GEMINI_BASE_URL};
use crate::llm::adapters::transport::{SyncTransport, Transport};
use crate::llm::adapters::openai::OPENAI_BASE_URL;
use crate::llm::adapters::{ollama, openai, AdapterError};

/// Default Gemini embedding model
pub const GEMINI_EMBEDDING_MODEL: &str = "embedding-001";

/// Default OpenAI embedding model
pub const OPENAI_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Default Ollama embedding model
pub const OLLAMA_EMBEDDING_MODEL: &str = "nomic-embed-text";

/// Model name reported by the stub embedder
pub const STUB_EMBEDDING_MODEL: &str = "stub";

/// Vector size of the stub embedder
pub const STUB_DIMENSIONS: usize = 256;

/// Shorter tokens ("a", "on", "is") carry no meaning for the stub
const STUB_MIN_TOKEN_CHARS: usize = 3;

/// Text embedding trait
pub trait Embedder: Send + Sync {
    /// Embed one text into a vector
    fn embed(&self, text: &str) -> Result<Vec<f32>, AdapterError>;

    /// Model that produced the vectors (stored in the index)
    fn model_name(&self) -> &str;
}

impl<T: Embedder + ?Sized> Embedder for &T {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AdapterError> {
        (**self).embed(text)
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Gemini `embedContent`
#[derive(Debug)]
pub struct GeminiEmbedder {
    base_url: String,
    model: String,
    api_key: String,
    transport: Transport,
}

impl GeminiEmbedder {
    pub fn with_transport(base_url: String, model: String, api_key: String, transport: Transport) -> Self {
        Self {
            base_url,
            model: normalize_model(&model).to_string(),
            api_key,
            transport,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl Embedder for GeminiEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AdapterError> {
        let url = format!(
            "{}/models/{}:embedContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );
        let body = serde_json::json!({
            "model": format!("models/{}", self.model),
            "content": {"parts": [{"text": text}]}
        })
        .to_string();
        let headers = [
            ("x-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.transport.post_json(&url, &headers, &body)?;
        parse_embed_content(&response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// OpenAI-compatible `/embeddings`
#[derive(Debug)]
pub struct OpenAiEmbedder {
    base_url: String,
    model: String,
    api_key: String,
    transport: Transport,
}

impl OpenAiEmbedder {
    pub fn with_transport(base_url: String, model: String, api_key: String, transport: Transport) -> Self {
        Self {
            base_url,
            model,
            api_key,
            transport,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl Embedder for OpenAiEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AdapterError> {
        let url = format!("{}/embeddings", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({"model": self.model, "input": text}).to_string();
        let auth_header = format!("Bearer {}", self.api_key);
        let headers = [
            ("Authorization", auth_header.as_str()),
            ("Content-Type", "application/json"),
        ];

        let response = self.transport.post_json(&url, &headers, &body)?;
        openai::parse_embedding(&response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Ollama `/api/embeddings`
#[derive(Debug)]
pub struct OllamaEmbedder {
    host: String,
    port: String,
    model: String,
    transport: Transport,
}

impl OllamaEmbedder {
    pub fn with_transport(host: String, port: String, model: String, transport: Transport) -> Self {
        Self {
            host,
            port,
            model,
            transport,
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

impl Embedder for OllamaEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AdapterError> {
        let url = format!("http://{}:{}/api/embeddings", self.host, self.port);
        let body = serde_json::json!({"model": self.model, "prompt": text}).to_string();
        let headers = [("Content-Type", "application/json")];

        let response = self.transport.post_json(&url, &headers, &body)?;
        ollama::parse_embedding(&response)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Deterministic offline embedder
///
/// Hashes lowercase alphanumeric tokens of three or more chars into a fixed
/// number of buckets and L2-normalizes the counts. Texts sharing words land
/// close together, which is enough for tests and offline demos.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dimensions: usize,
}

impl StubEmbedder {
    pub fn new() -> Self {
        Self::with_dimensions(STUB_DIMENSIONS)
    }

    pub fn with_dimensions(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

impl Default for StubEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

/// FNV-1a, stable across platforms and releases
fn fnv1a(token: &str) -> u64 {
    token.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AdapterError> {
        let mut vector = vec![0.0f32; self.dimensions];
        let lower = text.to_lowercase();
        for token in lower
            .split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|t| t.chars().count() >= STUB_MIN_TOKEN_CHARS)
        {
            let bucket = (fnv1a(token) % self.dimensions as u64) as usize;
            vector[bucket] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }
        Ok(vector)
    }

    fn model_name(&self) -> &str {
        STUB_EMBEDDING_MODEL
    }
}

/// Concrete embedder for all providers
#[derive(Debug)]
pub enum EmbedderKind {
    Gemini(GeminiEmbedder),
    OpenAi(OpenAiEmbedder),
    Ollama(OllamaEmbedder),
    Stub(StubEmbedder),
}

impl Embedder for EmbedderKind {
    fn embed(&self, text: &str) -> Result<Vec<f32>, AdapterError> {
        match self {
            EmbedderKind::Gemini(e) => e.embed(text),
            EmbedderKind::OpenAi(e) => e.embed(text),
            EmbedderKind::Ollama(e) => e.embed(text),
            EmbedderKind::Stub(e) => e.embed(text),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            EmbedderKind::Gemini(e) => e.model_name(),
            EmbedderKind::OpenAi(e) => e.model_name(),
            EmbedderKind::Ollama(e) => e.model_name(),
            EmbedderKind::Stub(e) => e.model_name(),
        }
    }
}

/// Create embedder from the `[embedding]` section (with `[llm]` fallbacks)
pub fn create_embedder(config: &Config) -> Result<EmbedderKind, AdapterError> {
    let settings = config.embedding.resolve(&config.llm);
    debug!(provider = %settings.provider, "creating embedder");

    let model_or = |default: &str| settings.model.clone().unwrap_or_else(|| default.to_string());

    match settings.provider.as_str() {
        "disabled" => Err(AdapterError::Configuration(
            "Embedding provider is disabled".to_string(),
        )),
        "stub" => Ok(EmbedderKind::Stub(StubEmbedder::new())),
        "gemini" => Ok(EmbedderKind::Gemini(GeminiEmbedder::with_transport(
            base_url_or(&settings, GEMINI_BASE_URL),
            model_or(GEMINI_EMBEDDING_MODEL),
            api_key_or_env(&settings, GEMINI_API_KEY_ENV)?,
            Transport::real(settings.timeout_secs),
        ))),
        "openai" => Ok(EmbedderKind::OpenAi(OpenAiEmbedder::with_transport(
            base_url_or(&settings, OPENAI_BASE_URL),
            model_or(OPENAI_EMBEDDING_MODEL),
            api_key_or_env(&settings, OPENAI_API_KEY_ENV)?,
            Transport::real(settings.timeout_secs),
        ))),
        "ollama" => Ok(EmbedderKind::Ollama(OllamaEmbedder::with_transport(
            settings.host.clone(),
            settings.port.clone(),
            model_or(OLLAMA_EMBEDDING_MODEL),
            Transport::real(settings.timeout_secs),
        ))),
        other => Err(AdapterError::Configuration(format!(
            "Unknown embedding provider: {}",
            other
        ))),
    }
}

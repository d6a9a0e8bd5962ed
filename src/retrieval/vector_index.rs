//! Durable vector index and similarity search
//!
//! The index is a single pretty-printed JSON file holding every passage with
//! its embedding and the model that produced them. Search is a linear cosine
//! scan, which is plenty for a tuning guide's few hundred passages.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::llm::adapters::AdapterError;
use crate::retrieval::embedders::Embedder;

/// Index directory inside the data root
pub const STORE_DIR: &str = "embedding_store";

/// Index file inside `STORE_DIR`
pub const INDEX_FILE: &str = "index.json";

/// Similarity store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Index I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Index JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Embedding failed: {0}")]
    Embedding(#[from] AdapterError),

    #[error("No index at {0}; run `ingest` first")]
    MissingIndex(PathBuf),

    #[error("Index was built with model '{index}' but the embedder uses '{embedder}'")]
    ModelMismatch { index: String, embedder: String },
}

/// One retrieved passage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub id: String,
    pub content: String,
    /// Cosine similarity to the query
    pub score: f64,
}

/// Top-k passage search by meaning
pub trait SimilarityStore {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<Passage>, StoreError>;
}

impl<T: SimilarityStore + ?Sized> SimilarityStore for &T {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<Passage>, StoreError> {
        (**self).search(query, top_k)
    }
}

/// Stored passage with its embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub id: String,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// In-memory vector index, persisted as JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorIndex {
    /// Embedding model the vectors came from
    pub model: String,
    entries: Vec<IndexEntry>,
}

/// Cosine similarity; zero when either vector has no magnitude
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

impl VectorIndex {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            entries: Vec::new(),
        }
    }

    /// Index path under a data root
    pub fn default_path(data_root: &Path) -> PathBuf {
        data_root.join(STORE_DIR).join(INDEX_FILE)
    }

    pub fn insert(&mut self, id: impl Into<String>, content: impl Into<String>, embedding: Vec<f32>) {
        self.entries.push(IndexEntry {
            id: id.into(),
            content: content.into(),
            embedding,
        });
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load an index file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            return Err(StoreError::MissingIndex(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let index: VectorIndex = serde_json::from_str(&content)?;
        debug!(path = %path.display(), entries = index.len(), model = %index.model, "loaded vector index");
        Ok(index)
    }

    /// Write the index, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        info!(path = %path.display(), entries = self.len(), "saved vector index");
        Ok(())
    }

    /// Top `top_k` entries by cosine similarity to `query`
    ///
    /// Ties keep insertion order. Entries whose dimension differs from the
    /// query are skipped.
    pub fn search_by_vector(&self, query: &[f32], top_k: usize) -> Vec<Passage> {
        if top_k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.embedding.len() == query.len())
            .map(|(position, entry)| (position, cosine_similarity(query, &entry.embedding)))
            .collect();

        // Stable sort keeps insertion order on equal scores
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(top_k)
            .map(|(position, score)| {
                let entry = &self.entries[position];
                Passage {
                    id: entry.id.clone(),
                    content: entry.content.clone(),
                    score,
                }
            })
            .collect()
    }
}

/// Vector index paired with the embedder that queries it
#[derive(Debug)]
pub struct EmbeddingStore<E: Embedder> {
    index: VectorIndex,
    embedder: E,
}

impl<E: Embedder> EmbeddingStore<E> {
    /// Pair an index with an embedder of the same model
    pub fn new(index: VectorIndex, embedder: E) -> Result<Self, StoreError> {
        if index.model != embedder.model_name() {
            return Err(StoreError::ModelMismatch {
                index: index.model,
                embedder: embedder.model_name().to_string(),
            });
        }
        Ok(Self { index, embedder })
    }

    /// Load the index from the data root
    pub fn open(data_root: &Path, embedder: E) -> Result<Self, StoreError> {
        let index = VectorIndex::load(&VectorIndex::default_path(data_root))?;
        Self::new(index, embedder)
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }
}

impl<E: Embedder> SimilarityStore for EmbeddingStore<E> {
    fn search(&self, query: &str, top_k: usize) -> Result<Vec<Passage>, StoreError> {
        if top_k == 0 || self.index.is_empty() {
            return Ok(Vec::new());
        }
        let vector = self.embedder.embed(query)?;
        let passages = self.index.search_by_vector(&vector, top_k);
        debug!(top_k, found = passages.len(), "similarity search");
        Ok(passages)
    }
}

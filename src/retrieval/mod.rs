//! Tuning-guide retrieval
//!
//! Ingestion splits and embeds a plain-text guide into a JSON vector index;
//! answering embeds the question, pulls the closest passages and grounds a
//! generation call on them.

pub mod answerer;
pub mod embedders;
pub mod ingest;
pub mod splitter;
pub mod vector_index;

pub use answerer::{RetrievalAnswerer, ANSWER_ERROR_PREFIX};
pub use embedders::{create_embedder, Embedder, EmbedderKind, StubEmbedder};
pub use ingest::{ingest_text, IngestError, IngestOptions};
pub use splitter::{split_text, SplitError, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use vector_index::{
    cosine_similarity, EmbeddingStore, IndexEntry, Passage, SimilarityStore, StoreError, VectorIndex,
};

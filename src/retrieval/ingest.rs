//! Tuning-guide ingestion
//!
//! Splits plain text into overlapping windows and embeds each one.

use tracing::{debug, info};

use crate::retrieval::embedders::Embedder;
use crate::retrieval::splitter::{split_text, SplitError, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
use crate::retrieval::vector_index::{StoreError, VectorIndex};

/// Ingestion errors
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Window settings for ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Build an index from plain text
///
/// Passages get ids `passage-0`, `passage-1`, ... in text order. The first
/// embedding failure aborts the whole ingest.
pub fn ingest_text<E: Embedder + ?Sized>(
    embedder: &E,
    text: &str,
    options: IngestOptions,
) -> Result<VectorIndex, IngestError> {
    let windows = split_text(text, options.chunk_size, options.overlap)?;
    info!(
        windows = windows.len(),
        chunk_size = options.chunk_size,
        overlap = options.overlap,
        model = embedder.model_name(),
        "ingesting text"
    );

    let mut index = VectorIndex::new(embedder.model_name());
    for (n, window) in windows.into_iter().enumerate() {
        debug!(passage = n, chars = window.chars().count(), "embedding passage");
        let embedding = embedder.embed(&window).map_err(StoreError::from)?;
        index.insert(format!("passage-{}", n), window, embedding);
    }
    Ok(index)
}

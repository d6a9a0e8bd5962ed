//! Retrieval-augmented answers from the tuning guide

use tracing::{debug, warn};

use crate::config::DEFAULT_TOP_K;
use crate::llm::adapters::LlmAdapter;
use crate::llm::contracts::guide_prompt;
use crate::retrieval::vector_index::SimilarityStore;

/// Prefix of every answer that could not be produced
pub const ANSWER_ERROR_PREFIX: &str = "Error during response generation:";

/// Answers questions from passages retrieved out of a similarity store
pub struct RetrievalAnswerer<'a, S: SimilarityStore + ?Sized, A: LlmAdapter + ?Sized> {
    store: &'a S,
    adapter: &'a A,
}

impl<'a, S: SimilarityStore + ?Sized, A: LlmAdapter + ?Sized> RetrievalAnswerer<'a, S, A> {
    pub fn new(store: &'a S, adapter: &'a A) -> Self {
        Self { store, adapter }
    }

    /// Answer using the default number of passages
    pub fn ask(&self, question: &str) -> String {
        self.answer(question, DEFAULT_TOP_K)
    }

    /// Answer `question` grounded on the `top_k` closest passages
    ///
    /// Never fails: store and generation errors come back as text starting
    /// with `ANSWER_ERROR_PREFIX`.
    pub fn answer(&self, question: &str, top_k: usize) -> String {
        let passages = match self.store.search(question, top_k) {
            Ok(passages) => passages,
            Err(err) => {
                warn!(error = %err, "passage retrieval failed");
                return format!("{} {}", ANSWER_ERROR_PREFIX, err);
            }
        };
        debug!(top_k, retrieved = passages.len(), "retrieved passages");

        let context = passages
            .iter()
            .map(|passage| passage.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        match self.adapter.generate(&guide_prompt(&context, question)) {
            Ok(completion) => completion.content(),
            Err(err) => {
                warn!(error = %err, "guide answer generation failed");
                format!("{} {}", ANSWER_ERROR_PREFIX, err)
            }
        }
    }
}

//! Chunk analysis orchestrator
//!
//! Drives one generation call per chunk and folds each outcome into an
//! `AnalysisResult`. A failing chunk degrades its own record and nothing else.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::analysis::response_parser::{parse_response, ParsedSections};
use crate::analysis::result::AnalysisResult;
use crate::llm::adapters::{AdapterError, LlmAdapter};
use crate::llm::contracts::analysis_prompt;

/// Analyzer tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Maximum in-flight generation calls; 1 is strictly sequential
    pub concurrency: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

/// Analyzes log chunks through a generation adapter
pub struct Analyzer<'a, A: LlmAdapter + ?Sized> {
    adapter: &'a A,
    options: AnalyzerOptions,
}

impl<'a, A: LlmAdapter + ?Sized> Analyzer<'a, A> {
    /// Sequential analyzer
    pub fn new(adapter: &'a A) -> Self {
        Self::with_options(adapter, AnalyzerOptions::default())
    }

    pub fn with_options(adapter: &'a A, options: AnalyzerOptions) -> Self {
        Self { adapter, options }
    }

    pub fn options(&self) -> AnalyzerOptions {
        self.options
    }

    /// Analyze every chunk, returning one record per chunk in input order
    pub fn analyze(&self, chunks: &[String]) -> Vec<AnalysisResult> {
        info!(
            provider = self.adapter.provider_name(),
            chunks = chunks.len(),
            concurrency = self.options.concurrency,
            "analyzing log chunks"
        );

        let results = if self.options.concurrency > 1 && chunks.len() > 1 {
            self.analyze_parallel(chunks)
        } else {
            self.analyze_sequential(chunks)
        };

        let degraded = results.iter().filter(|r| r.is_degraded()).count();
        if degraded > 0 {
            warn!(degraded, total = results.len(), "some chunks could not be analyzed");
        }
        results
    }

    fn analyze_sequential(&self, chunks: &[String]) -> Vec<AnalysisResult> {
        chunks
            .iter()
            .enumerate()
            .map(|(index, chunk)| self.analyze_chunk(index, chunk))
            .collect()
    }

    fn analyze_parallel(&self, chunks: &[String]) -> Vec<AnalysisResult> {
        // No more workers than chunks
        let threads = self.options.concurrency.min(chunks.len());
        debug!(threads, "building analysis thread pool");
        let pool = match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
        {
            Ok(pool) => pool,
            Err(err) => {
                warn!(error = %err, "failed to build analysis thread pool, running sequentially");
                return self.analyze_sequential(chunks);
            }
        };

        pool.install(|| {
            chunks
                .par_iter()
                .enumerate()
                .map(|(index, chunk)| self.analyze_chunk(index, chunk))
                .collect()
        })
    }

    /// Analyze a single chunk
    pub fn analyze_chunk(&self, index: usize, chunk: &str) -> AnalysisResult {
        debug!(chunk = index, lines = chunk.lines().count(), "analyzing chunk");
        let outcome = self.request_sections(chunk);
        if let Err(err) = &outcome {
            warn!(chunk = index, error = %err, "chunk analysis failed");
        }
        AnalysisResult::from(outcome)
    }

    fn request_sections(&self, chunk: &str) -> Result<ParsedSections, AdapterError> {
        let completion = self.adapter.generate(&analysis_prompt(chunk))?;
        Ok(parse_response(&completion.content()))
    }
}

//! slowlog-advisor: LLM-assisted MySQL slow query log analysis
//!
//! Splits slow query logs into bounded chunks, asks a generation service for
//! a labeled analysis of each, and derives a risk score and concrete
//! recommendations from the reply. Questions can be asked against a log or
//! against an ingested tuning guide via similarity search.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod retrieval;

// Re-export the analysis pipeline
pub use analysis::{
    ask_about_log, chunk_log, parse_response, risk_score, sql_recommendations, AnalysisResult,
    Analyzer, AnalyzerOptions, ParsedSections,
};

// Re-export configuration
pub use config::Config;

// Re-export retrieval
pub use retrieval::{EmbeddingStore, RetrievalAnswerer, SimilarityStore, VectorIndex};

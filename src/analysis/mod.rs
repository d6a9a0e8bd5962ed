//! Slow query log analysis
//!
//! - chunker: log text into bounded line windows
//! - response_parser: model reply into labeled sections
//! - risk / recommendations: keyword heuristics over those sections
//! - orchestrator: one generation call per chunk, failures isolated
//! - question: free-text questions against the whole log

pub mod chunker;
pub mod orchestrator;
pub mod question;
pub mod recommendations;
pub mod response_parser;
pub mod result;
pub mod risk;

pub use chunker::{chunk_log, clean_lines, split_lines, ChunkError, DEFAULT_MAX_CHUNK_LINES};
pub use orchestrator::{Analyzer, AnalyzerOptions};
pub use question::ask_about_log;
pub use recommendations::sql_recommendations;
pub use response_parser::{parse_response, ParsedSections, Section};
pub use result::{AnalysisResult, ANALYSIS_ERROR_HINT, ANALYSIS_ERROR_MARKER};
pub use risk::{risk_score, MAX_RISK_SCORE};

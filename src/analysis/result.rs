//! Per-chunk analysis record
//!
//! One `AnalysisResult` per chunk, successful or not. The derived fields
//! (`score`, `sql_recommendation`) are only ever computed here.

use serde::{Deserialize, Serialize};

use crate::analysis::recommendations::sql_recommendations;
use crate::analysis::response_parser::ParsedSections;
use crate::analysis::risk::risk_score;
use crate::llm::adapters::AdapterError;

/// Summary written into a record whose generation call failed
pub const ANALYSIS_ERROR_MARKER: &str = "Error during analysis.";

/// Suggestion written into a record whose generation call failed
pub const ANALYSIS_ERROR_HINT: &str = "Please check the input or API key.";

/// Structured analysis of one log chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub issue: String,
    pub suggestion: String,
    /// Risk score in 0..=100; `None` when the chunk could not be analyzed
    pub score: Option<u8>,
    pub sql_recommendation: Vec<String>,
}

impl AnalysisResult {
    /// Build a record from parsed reply sections
    pub fn from_sections(sections: ParsedSections) -> Self {
        let score = risk_score(&sections.issue);
        let sql_recommendation = sql_recommendations(&sections.suggestion);
        Self {
            summary: sections.summary,
            issue: sections.issue,
            suggestion: sections.suggestion,
            score: Some(score),
            sql_recommendation,
        }
    }

    /// Record standing in for a chunk whose generation call failed
    pub fn degraded(err: &AdapterError) -> Self {
        Self {
            summary: ANALYSIS_ERROR_MARKER.to_string(),
            issue: err.to_string(),
            suggestion: ANALYSIS_ERROR_HINT.to_string(),
            score: None,
            sql_recommendation: Vec::new(),
        }
    }

    /// True for records produced by `degraded`
    pub fn is_degraded(&self) -> bool {
        self.score.is_none()
    }
}

impl From<Result<ParsedSections, AdapterError>> for AnalysisResult {
    fn from(outcome: Result<ParsedSections, AdapterError>) -> Self {
        match outcome {
            Ok(sections) => Self::from_sections(sections),
            Err(err) => Self::degraded(&err),
        }
    }
}

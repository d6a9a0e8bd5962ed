//! Report rendering (text or JSON)

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

use crate::analysis::{split_lines, AnalysisResult};
use crate::cli::Result;

/// Outcome of one CLI command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Analysis {
        chunks: Vec<AnalysisResult>,
    },
    Answer {
        question: String,
        answer: String,
    },
    Ingest {
        index_path: PathBuf,
        passages: usize,
        model: String,
    },
}

#[derive(Serialize)]
struct Envelope<'a> {
    generated_at: DateTime<Utc>,
    #[serde(flatten)]
    report: &'a Report,
}

/// Indent continuation lines of a multi-line field
fn indented(text: &str, indent: &str) -> String {
    split_lines(text).collect::<Vec<_>>().join(&format!("\n{}", indent))
}

impl Report {
    /// Render as pretty JSON stamped with the current time
    pub fn render_json(&self) -> Result<String> {
        let envelope = Envelope {
            generated_at: Utc::now(),
            report: self,
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }

    /// Render for a terminal
    pub fn render_text(&self) -> String {
        match self {
            Report::Analysis { chunks } => render_analysis(chunks),
            Report::Answer { answer, .. } => answer.clone(),
            Report::Ingest {
                index_path,
                passages,
                model,
            } => format!(
                "Indexed {} passages with model '{}' into {}",
                passages,
                model,
                index_path.display()
            ),
        }
    }

    pub fn render(&self, json: bool) -> Result<String> {
        if json {
            self.render_json()
        } else {
            Ok(self.render_text())
        }
    }
}

fn render_analysis(chunks: &[AnalysisResult]) -> String {
    if chunks.is_empty() {
        return "No analyzable lines in log.".to_string();
    }

    let total = chunks.len();
    let blocks: Vec<String> = chunks
        .iter()
        .enumerate()
        .map(|(i, result)| render_chunk(i + 1, total, result))
        .collect();
    blocks.join("\n\n")
}

fn render_chunk(position: usize, total: usize, result: &AnalysisResult) -> String {
    const INDENT: &str = "              ";

    let score = result
        .score
        .map(|s| format!("{}/100", s))
        .unwrap_or_else(|| "n/a".to_string());

    let mut lines = vec![
        format!("Chunk {}/{}", position, total),
        format!("  Summary:    {}", indented(&result.summary, INDENT)),
        format!("  Issue:      {}", indented(&result.issue, INDENT)),
        format!("  Suggestion: {}", indented(&result.suggestion, INDENT)),
        format!("  Risk score: {}", score),
    ];
    if !result.sql_recommendation.is_empty() {
        lines.push("  Recommendations:".to_string());
        lines.extend(result.sql_recommendation.iter().map(|rec| format!("    - {}", rec)));
    }
    lines.join("\n")
}

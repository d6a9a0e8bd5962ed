//! Free-text questions about a whole log
//!
//! The cleaned log goes to the model in one prompt; no chunking, no parsing.

use tracing::{debug, warn};

use crate::analysis::chunker::clean_lines;
use crate::llm::adapters::LlmAdapter;
use crate::llm::contracts::log_question_prompt;

/// Answer `question` using the analyzable lines of `log_text`
///
/// Always returns text: a generation failure comes back as `Error: ...`.
pub fn ask_about_log<A: LlmAdapter + ?Sized>(adapter: &A, question: &str, log_text: &str) -> String {
    let cleaned = clean_lines(log_text).join("\n");
    debug!(
        provider = adapter.provider_name(),
        log_bytes = cleaned.len(),
        "asking question about log"
    );

    match adapter.generate(&log_question_prompt(question, &cleaned)) {
        Ok(completion) => completion.content(),
        Err(err) => {
            warn!(error = %err, "log question failed");
            format!("Error: {}", err)
        }
    }
}

//! Prompt contracts: system prompt and task prompts
//!
//! Defines the fixed contract between the generation service and the
//! analysis pipeline. Plain text builders, no inference.

mod prompts;

// Public exports
pub use prompts::{analysis_prompt, guide_prompt, log_question_prompt, system_prompt};

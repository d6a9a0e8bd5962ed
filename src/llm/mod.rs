//! LLM Integration: provider adapters and prompt contracts
//!
//! - adapters: one `LlmAdapter` per provider over a shared HTTP transport
//! - contracts: the fixed prompts the pipeline sends
//! - types: provider-neutral reply shape

pub mod adapters;
pub mod contracts;
pub mod types;

// Re-export main types
pub use types::Completion;

// Re-export contract functions
pub use contracts::{analysis_prompt, guide_prompt, log_question_prompt, system_prompt};

// Re-export adapters
pub use adapters::{create_adapter, transport::AdapterError, Adapter, LlmAdapter};

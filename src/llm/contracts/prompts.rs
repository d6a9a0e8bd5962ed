//! Prompt builders
//!
//! Defines the fixed prompts sent to the generation service.
//! Inputs are embedded verbatim unless noted.

/// Get the system prompt for chat-style providers
///
/// Gemini receives the task prompt alone; OpenAI and Ollama get this as the
/// system message in front of it.
pub fn system_prompt() -> String {
    "You are an expert MySQL performance analyst. \
     You read slow query logs and tuning documentation and give short, concrete, \
     technically accurate answers."
        .to_string()
}

/// Prompt asking for a labeled analysis of one log chunk
///
/// The reply format matches what `parse_response` scans for.
pub fn analysis_prompt(chunk: &str) -> String {
    format!(
        "
You are an expert MySQL performance analyst.

Here is a chunk of a slow query log:
------------------
{chunk}
------------------

Please provide the following:
1. A summary of the log
2. The most likely performance issue(s)
3. Suggestions to optimize or resolve the issue(s)

Use clear and short bullet points.
Answer in the format:

Summary: ...
Issue: ...
Suggestion: ...
"
    )
}

/// Prompt answering a free-text question against the full log
///
/// Single quotes in the question become double quotes so the question can be
/// shown inside a quoted string.
pub fn log_question_prompt(question: &str, log_data: &str) -> String {
    let safe_question = question.replace('\'', "\"");
    format!(
        "
You are a MySQL performance expert. A user has uploaded a slow query log and has a question.

Here is the user's question:
\"{safe_question}\"

Here is the related MySQL log:
----------------------
{log_data}
----------------------

Based on the log, please provide an expert-level answer to the question.
Use clear, concise language.
"
    )
}

/// Prompt answering a question from retrieved tuning-guide excerpts
pub fn guide_prompt(context: &str, question: &str) -> String {
    format!(
        "
You are a MySQL performance tuning expert.

Here is an excerpt from the MySQL tuning guide:
---------------------
{context}
---------------------

Now answer the user's question below based only on the guide above.

User Question:
{question}
"
    )
}

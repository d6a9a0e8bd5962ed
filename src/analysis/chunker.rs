//! Slow query log chunker
//!
//! Splits raw log text into bounded windows of analyzable lines.
//! Blank lines and `#` comment lines (the slow log's `# Time:`, `# User@Host:`
//! and `# Query_time:` headers) never reach the model.

/// Default number of lines per chunk
pub const DEFAULT_MAX_CHUNK_LINES: usize = 30;

/// Chunking errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkError {
    /// Window size must be at least one line
    #[error("max_chunk_lines must be positive, got {0}")]
    InvalidWindow(usize),
}

/// Split text on `\n`, `\r\n` and a lone `\r`
///
/// Terminators are not part of the yielded lines, and a trailing terminator
/// does not produce an empty last line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                let line = &rest[..pos];
                let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + skip..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Lines that survive cleaning, in original order
///
/// A line is dropped if it is empty after trimming or if its trimmed form
/// starts with `#`. Surviving lines are returned as written.
pub fn clean_lines(log_text: &str) -> Vec<&str> {
    split_lines(log_text)
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .collect()
}

/// Split log text into chunks of at most `max_chunk_lines` lines
///
/// Chunks are consecutive, non-overlapping and newline-joined; the last one
/// may be shorter. Input with no analyzable lines yields an empty vec.
pub fn chunk_log(log_text: &str, max_chunk_lines: usize) -> Result<Vec<String>, ChunkError> {
    if max_chunk_lines == 0 {
        return Err(ChunkError::InvalidWindow(max_chunk_lines));
    }

    Ok(clean_lines(log_text)
        .chunks(max_chunk_lines)
        .map(|window| window.join("\n"))
        .collect())
}

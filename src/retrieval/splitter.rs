//! Fixed-size text windows for ingestion
//!
//! Windows are counted in `char`s so multi-byte text never splits inside a
//! code point.

/// Default window size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default overlap between consecutive windows in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Splitter errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("chunk_size must be positive")]
    ZeroChunkSize,

    #[error("overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    OverlapTooLarge { chunk_size: usize, overlap: usize },
}

/// Split `text` into overlapping windows
///
/// Each window holds up to `chunk_size` chars and starts `chunk_size - overlap`
/// chars after the previous one. Windows are trimmed; blank ones are dropped.
pub fn split_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<String>, SplitError> {
    if chunk_size == 0 {
        return Err(SplitError::ZeroChunkSize);
    }
    if overlap >= chunk_size {
        return Err(SplitError::OverlapTooLarge {
            chunk_size,
            overlap,
        });
    }

    let chars: Vec<char> = text.chars().collect();
    let step = chunk_size - overlap;

    let mut windows = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let trimmed = window.trim();
        if !trimmed.is_empty() {
            windows.push(trimmed.to_string());
        }
        if end == chars.len() {
            break;
        }
        start += step;
    }
    Ok(windows)
}

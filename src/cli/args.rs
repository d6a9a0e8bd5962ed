//! CLI argument parsing
//!
//! ```text
//! slowlog-advisor [--data-root <path>] [--json] [-v...] <command>
//!   analyze <LOG> [--max-chunk-lines N] [--concurrency N]
//!   ask <LOG> <QUESTION...>
//!   guide <QUESTION...> [--top-k N]
//!   ingest <TEXT_FILE> [--chunk-size N] [--overlap N]
//! ```

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "slowlog-advisor",
    version,
    about = "Analyze MySQL slow query logs with an LLM"
)]
pub struct Args {
    /// Directory holding config.toml and embedding_store/
    #[arg(long, global = true)]
    pub data_root: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Chunk a slow query log and analyze every chunk
    Analyze {
        /// Log file, or `-` for stdin
        log: String,

        /// Lines per chunk (default from config, 30)
        #[arg(long)]
        max_chunk_lines: Option<usize>,

        /// Parallel generation calls (default from config, 1)
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Ask a free-text question about a slow query log
    Ask {
        /// Log file, or `-` for stdin
        log: String,

        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },

    /// Ask the ingested tuning guide
    Guide {
        /// Question text
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Passages to retrieve (default from config, 3)
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Build the tuning-guide index from a plain-text file
    Ingest {
        /// Plain-text guide
        text_file: PathBuf,

        /// Window size in characters (default from config, 500)
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Window overlap in characters (default from config, 50)
        #[arg(long)]
        overlap: Option<usize>,
    },
}

/// Join a multi-word question back into one string
pub fn question_text(words: &[String]) -> String {
    words.join(" ")
}

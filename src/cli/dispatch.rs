//! CLI command dispatch
//!
//! Resolves the data root and configuration, then runs one command:
//! - analyze: chunk a log and analyze every chunk
//! - ask: question against the whole log
//! - guide: question against the ingested tuning guide
//! - ingest: build the tuning-guide index

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::{ask_about_log, chunk_log, Analyzer, AnalyzerOptions};
use crate::cli::args::question_text;
use crate::cli::data_root::{resolve_data_root, verify_data_root};
use crate::cli::report::Report;
use crate::cli::{Args, Command, Error, Result, EXIT_SUCCESS};
use crate::config::Config;
use crate::llm::adapters::create_adapter;
use crate::retrieval::{
    create_embedder, ingest_text, EmbeddingStore, IngestOptions, RetrievalAnswerer, VectorIndex,
};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Resolved data root and its configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub data_root: PathBuf,
    pub config: Config,
}

/// Resolve the data root and load its configuration
pub fn prepare(args: &Args) -> Result<Session> {
    let data_root = resolve_data_root(args.data_root.as_deref())?;
    verify_data_root(&data_root)?;
    let config = Config::load(&data_root)?;
    Ok(Session { data_root, config })
}

/// Run a command, print its report, and return the exit code
pub fn run_command(command: &Command, session: &Session, json: bool) -> ExitCode {
    match execute(command, session).and_then(|report| report.render(json)) {
        Ok(output) => {
            println!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Run a command and return its report
pub fn execute(command: &Command, session: &Session) -> Result<Report> {
    let config = &session.config;
    match command {
        Command::Analyze {
            log,
            max_chunk_lines,
            concurrency,
        } => {
            let log_text = read_input(log)?;
            let chunks = chunk_log(
                &log_text,
                max_chunk_lines.unwrap_or(config.analysis.max_chunk_lines),
            )?;
            let concurrency = concurrency.unwrap_or(config.analysis.concurrency);
            if concurrency == 0 {
                return Err(Error::InvalidArgs("--concurrency must be positive".to_string()));
            }

            let adapter = create_adapter(&config.llm)?;
            let analyzer = Analyzer::with_options(&adapter, AnalyzerOptions { concurrency });
            Ok(Report::Analysis {
                chunks: analyzer.analyze(&chunks),
            })
        }
        Command::Ask { log, question } => {
            let log_text = read_input(log)?;
            let question = question_text(question);
            let adapter = create_adapter(&config.llm)?;
            let answer = ask_about_log(&adapter, &question, &log_text);
            Ok(Report::Answer { question, answer })
        }
        Command::Guide { question, top_k } => {
            let question = question_text(question);
            let adapter = create_adapter(&config.llm)?;
            let store = EmbeddingStore::open(&session.data_root, create_embedder(config)?)?;
            let answerer = RetrievalAnswerer::new(&store, &adapter);
            let answer = answerer.answer(&question, top_k.unwrap_or(config.retrieval.top_k));
            Ok(Report::Answer { question, answer })
        }
        Command::Ingest {
            text_file,
            chunk_size,
            overlap,
        } => {
            let text = fs::read_to_string(text_file).map_err(|source| Error::Input {
                path: text_file.display().to_string(),
                source,
            })?;
            let options = IngestOptions {
                chunk_size: chunk_size.unwrap_or(config.retrieval.chunk_size),
                overlap: overlap.unwrap_or(config.retrieval.overlap),
            };

            let embedder = create_embedder(config)?;
            let index = ingest_text(&embedder, &text, options)?;
            let index_path = VectorIndex::default_path(&session.data_root);
            index.save(&index_path)?;
            info!(path = %index_path.display(), passages = index.len(), "ingest complete");

            Ok(Report::Ingest {
                index_path,
                passages: index.len(),
                model: index.model.clone(),
            })
        }
    }
}

/// Read a log file, or stdin for `-`
fn read_input(path: &str) -> Result<String> {
    let input_error = |source| Error::Input {
        path: path.to_string(),
        source,
    };

    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(input_error)?;
        return Ok(buffer);
    }
    fs::read_to_string(Path::new(path)).map_err(input_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::EXIT_CONFIG_ERROR;
    use tempfile::TempDir;

    const LOG: &str = "# Time: 2024-05-01T10:00:00\n# Query_time: 4.1\nSELECT * FROM orders;\nSELECT * FROM users;\n";

    fn stub_session(temp_dir: &TempDir) -> Session {
        fs::write(
            temp_dir.path().join("config.toml"),
            "[llm]\nprovider = \"stub\"\n",
        )
        .unwrap();
        Session {
            data_root: temp_dir.path().to_path_buf(),
            config: Config::load(temp_dir.path()).unwrap(),
        }
    }

    #[test]
    fn test_analyze_with_stub() {
        let temp_dir = TempDir::new().unwrap();
        let session = stub_session(&temp_dir);
        let log_path = temp_dir.path().join("slow.log");
        fs::write(&log_path, LOG).unwrap();

        let command = Command::Analyze {
            log: log_path.display().to_string(),
            max_chunk_lines: Some(1),
            concurrency: None,
        };
        match execute(&command, &session).unwrap() {
            Report::Analysis { chunks } => {
                assert_eq!(chunks.len(), 2);
                assert!(chunks.iter().all(|c| c.score == Some(70)));
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_guide_requires_index() {
        let temp_dir = TempDir::new().unwrap();
        let session = stub_session(&temp_dir);
        let command = Command::Guide {
            question: vec!["buffer".to_string()],
            top_k: None,
        };
        assert!(matches!(execute(&command, &session), Err(Error::Store(_))));
    }

    #[test]
    fn test_ingest_then_guide() {
        let temp_dir = TempDir::new().unwrap();
        let session = stub_session(&temp_dir);
        let guide_path = temp_dir.path().join("guide.txt");
        fs::write(
            &guide_path,
            "Size innodb_buffer_pool_size to hold the working set. Enable the slow query log.",
        )
        .unwrap();

        let ingest = Command::Ingest {
            text_file: guide_path,
            chunk_size: Some(40),
            overlap: Some(5),
        };
        match execute(&ingest, &session).unwrap() {
            Report::Ingest { passages, model, .. } => {
                assert!(passages >= 2);
                assert_eq!(model, "stub");
            }
            other => panic!("unexpected report: {:?}", other),
        }

        let guide = Command::Guide {
            question: vec!["buffer".to_string(), "pool?".to_string()],
            top_k: Some(1),
        };
        match execute(&guide, &session).unwrap() {
            Report::Answer { question, answer } => {
                assert_eq!(question, "buffer pool?");
                assert!(answer.starts_with("Summary:"));
            }
            other => panic!("unexpected report: {:?}", other),
        }
    }

    #[test]
    fn test_missing_log_is_failure() {
        let temp_dir = TempDir::new().unwrap();
        let session = stub_session(&temp_dir);
        let command = Command::Ask {
            log: temp_dir.path().join("absent.log").display().to_string(),
            question: vec!["why".to_string()],
        };
        let err = execute(&command, &session).unwrap_err();
        assert!(matches!(err, Error::Input { .. }));
    }

    #[test]
    fn test_disabled_provider_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let session = Session {
            data_root: temp_dir.path().to_path_buf(),
            config: Config::from_toml_str("[llm]\nprovider = \"disabled\"\n").unwrap(),
        };
        let log_path = temp_dir.path().join("slow.log");
        fs::write(&log_path, LOG).unwrap();

        let command = Command::Ask {
            log: log_path.display().to_string(),
            question: vec!["why".to_string()],
        };
        let err = execute(&command, &session).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_CONFIG_ERROR);
    }
}

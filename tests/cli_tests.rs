//! CLI wiring tests
//!
//! Parse real argv, prepare a session from a temp data root, and execute
//! commands end to end with the stub provider.

use clap::Parser;
use slowlog_advisor::cli::{execute, prepare, Args, Command, Error, Report, EXIT_CONFIG_ERROR};
use std::fs;
use tempfile::TempDir;

fn data_root_with(config: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("config.toml"), config).unwrap();
    temp_dir
}

fn args(argv: &[&str]) -> Args {
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_analyze_fixture_with_stub_json() {
    let root = data_root_with("[llm]\nprovider = \"stub\"\n[analysis]\nmax_chunk_lines = 5\n");
    let root_str = root.path().display().to_string();
    let parsed = args(&[
        "slowlog-advisor",
        "--data-root",
        &root_str,
        "--json",
        "analyze",
        "tests/fixtures/slow_query.log",
    ]);

    let session = prepare(&parsed).unwrap();
    let report = execute(&parsed.command, &session).unwrap();
    let value: serde_json::Value = serde_json::from_str(&report.render(true).unwrap()).unwrap();

    assert_eq!(value["kind"], "analysis");
    assert_eq!(value["chunks"].as_array().unwrap().len(), 3);
    assert_eq!(value["chunks"][0]["score"], 70);
    assert_eq!(
        value["chunks"][0]["sql_recommendation"][0],
        "CREATE INDEX idx_stub ON stub_table(stub_column);"
    );
}

#[test]
fn test_flag_overrides_config() {
    let root = data_root_with("[llm]\nprovider = \"stub\"\n");
    let root_str = root.path().display().to_string();
    let parsed = args(&[
        "slowlog-advisor",
        "analyze",
        "tests/fixtures/slow_query.log",
        "--max-chunk-lines",
        "4",
        "--concurrency",
        "2",
        "--data-root",
        &root_str,
    ]);

    let session = prepare(&parsed).unwrap();
    match execute(&parsed.command, &session).unwrap() {
        Report::Analysis { chunks } => assert_eq!(chunks.len(), 4),
        other => panic!("unexpected report: {:?}", other),
    }
}

#[test]
fn test_zero_chunk_lines_fails() {
    let root = data_root_with("[llm]\nprovider = \"stub\"\n");
    let root_str = root.path().display().to_string();
    let parsed = args(&[
        "slowlog-advisor",
        "--data-root",
        &root_str,
        "analyze",
        "tests/fixtures/slow_query.log",
        "--max-chunk-lines",
        "0",
    ]);

    let session = prepare(&parsed).unwrap();
    assert!(matches!(
        execute(&parsed.command, &session),
        Err(Error::Chunk(_))
    ));
}

#[test]
fn test_ingest_then_guide_via_cli() {
    let root = data_root_with("[llm]\nprovider = \"stub\"\n");
    let root_str = root.path().display().to_string();

    let ingest = args(&[
        "slowlog-advisor",
        "--data-root",
        &root_str,
        "ingest",
        "tests/fixtures/tuning_guide.txt",
    ]);
    let session = prepare(&ingest).unwrap();
    let report = execute(&ingest.command, &session).unwrap();
    assert!(report.render_text().starts_with("Indexed "));
    assert!(root.path().join("embedding_store/index.json").exists());

    let guide = args(&[
        "slowlog-advisor",
        "--data-root",
        &root_str,
        "guide",
        "how",
        "big",
        "is",
        "the",
        "buffer",
        "pool?",
    ]);
    match execute(&guide.command, &session).unwrap() {
        Report::Answer { question, .. } => assert_eq!(question, "how big is the buffer pool?"),
        other => panic!("unexpected report: {:?}", other),
    }
}

#[test]
fn test_invalid_config_is_exit_2() {
    let root = data_root_with("[retrieval]\nchunk_size = 10\noverlap = 20\n");
    let root_str = root.path().display().to_string();
    let parsed = args(&["slowlog-advisor", "--data-root", &root_str, "guide", "q"]);

    let err = prepare(&parsed).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(err.exit_code(), EXIT_CONFIG_ERROR);
}

#[test]
fn test_missing_data_root_is_exit_2() {
    let parsed = args(&[
        "slowlog-advisor",
        "--data-root",
        "/nonexistent/slowlog/12345",
        "ask",
        "slow.log",
        "why?",
    ]);
    assert!(matches!(parsed.command, Command::Ask { .. }));
    assert_eq!(prepare(&parsed).unwrap_err().exit_code(), EXIT_CONFIG_ERROR);
}

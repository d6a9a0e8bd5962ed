//! LLM adapter integration tests
//!
//! Tests adapter implementations without live network calls.
//! Uses fixtures for deterministic testing.

use slowlog_advisor::analysis::{parse_response, risk_score, sql_recommendations};
use slowlog_advisor::config::Config;
use slowlog_advisor::llm::adapters::gemini::{GeminiAdapter, GEMINI_BASE_URL};
use slowlog_advisor::llm::adapters::ollama::OllamaAdapter;
use slowlog_advisor::llm::adapters::openai::OpenAiAdapter;
use slowlog_advisor::llm::adapters::transport::{FakeTransport, Transport};
use slowlog_advisor::llm::adapters::{create_adapter, Adapter, AdapterError, LlmAdapter};
use std::path::PathBuf;

// Test helpers
fn load_fixture(name: &str) -> String {
    let path = PathBuf::from("tests/fixtures").join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", path.display()))
}

#[test]
fn test_gemini_fixture_parts_and_text() {
    let adapter = GeminiAdapter::with_transport(
        GEMINI_BASE_URL.to_string(),
        "gemini-2.0-flash".to_string(),
        "test-key".to_string(),
        Transport::Fake(FakeTransport::new(&load_fixture("gemini_generate.json"))),
    );

    let completion = adapter.generate("prompt").unwrap();
    assert_eq!(completion.parts.len(), 3);
    assert_eq!(completion.text.as_deref(), Some(completion.parts.concat().as_str()));
    assert!(completion.content().starts_with("Summary: Three slow statements"));

    let request = adapter.transport().as_fake().unwrap().last_request().unwrap();
    assert_eq!(
        request.url,
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
    );
    assert!(request
        .headers
        .contains(&("x-goog-api-key".to_string(), "test-key".to_string())));
    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["contents"][0]["parts"][0]["text"], "prompt");
}

#[test]
fn test_gemini_blocked_prompt() {
    let adapter = GeminiAdapter::with_transport(
        GEMINI_BASE_URL.to_string(),
        "gemini-2.0-flash".to_string(),
        "test-key".to_string(),
        Transport::Fake(FakeTransport::new(&load_fixture("gemini_blocked.json"))),
    );
    let err = adapter.generate("prompt").unwrap_err();
    assert!(matches!(err, AdapterError::Provider { ref code, .. } if code == "BLOCKED"));
}

#[test]
fn test_openai_fixture_through_parser() {
    let adapter = OpenAiAdapter::with_transport(
        "https://api.openai.com/v1".to_string(),
        "gpt-4o-mini".to_string(),
        "sk-test".to_string(),
        Transport::Fake(FakeTransport::new(&load_fixture("openai_chat.json"))),
    );

    let sections = parse_response(&adapter.generate("chunk").unwrap().content());
    assert_eq!(sections.summary, "One slow lookup.");
    assert_eq!(risk_score(&sections.issue), 40);
    assert_eq!(
        sql_recommendations(&sections.suggestion),
        vec!["ALTER TABLE order_items ADD INDEX idx_product (product_id) on order_items".to_string()]
    );
}

#[test]
fn test_ollama_fixture_through_parser() {
    let adapter = OllamaAdapter::with_transport(
        "127.0.0.1".to_string(),
        "11434".to_string(),
        "llama3".to_string(),
        Transport::Fake(FakeTransport::new(&load_fixture("ollama_chat.json"))),
    );

    let sections = parse_response(&adapter.generate("chunk").unwrap().content());
    assert_eq!(risk_score(&sections.issue), 20);
    assert_eq!(sql_recommendations(&sections.suggestion).len(), 1);

    let request = adapter.transport().as_fake().unwrap().last_request().unwrap();
    assert_eq!(request.url, "http://127.0.0.1:11434/api/chat");
}

#[test]
fn test_transport_errors_pass_through() {
    let cases = [
        AdapterError::Authentication("HTTP 401: bad key".to_string()),
        AdapterError::Http {
            status: 503,
            message: "overloaded".to_string(),
        },
        AdapterError::Network("timed out".to_string()),
    ];

    for error in cases {
        let adapter = OllamaAdapter::with_transport(
            "127.0.0.1".to_string(),
            "11434".to_string(),
            "llama3".to_string(),
            Transport::Fake(FakeTransport::failing(error.clone())),
        );
        assert_eq!(adapter.generate("chunk").unwrap_err(), error);
    }
}

#[test]
fn test_malformed_json_is_json_error() {
    let adapter = OllamaAdapter::with_transport(
        "127.0.0.1".to_string(),
        "11434".to_string(),
        "llama3".to_string(),
        Transport::Fake(FakeTransport::new("<html>gateway</html>")),
    );
    assert!(matches!(adapter.generate("x"), Err(AdapterError::Json(_))));
}

#[test]
fn test_factory_from_config_file_text() {
    let config = Config::from_toml_str(
        r#"[llm]
provider = "ollama"
model = "llama3"
port = "11500"
"#,
    )
    .unwrap();
    match create_adapter(&config.llm).unwrap() {
        Adapter::Ollama(adapter) => assert_eq!(adapter.base_url(), "http://127.0.0.1:11500"),
        other => panic!("unexpected adapter: {:?}", other),
    }
}

#[test]
fn test_factory_gemini_key_from_env() {
    std::env::set_var("SLOWLOG_IT_GEMINI_KEY", "from-env");
    let config = Config::from_toml_str(
        "[llm]\nprovider = \"gemini\"\napi_key = \"env:SLOWLOG_IT_GEMINI_KEY\"\n",
    )
    .unwrap();
    let adapter = create_adapter(&config.llm).unwrap();
    assert_eq!(adapter.provider_name(), "gemini");
}

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codepix::client::AiClient;
use codepix::error::CodePixError;

fn success_envelope(result: &str) -> serde_json::Value {
    json!({
        "model": "gemini-2.5-flash",
        "modelProvider": "gemini",
        "result": result,
        "time_taken": "1.23 seconds"
    })
}

#[tokio::test]
async fn generate_code_unwraps_the_result_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/generate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success_envelope("```js\nfoo()\n```")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let result = client
        .generate_code("a function named foo", "javascript", "intermediate", "gemini")
        .await
        .expect("result");

    assert_eq!(result, "```js\nfoo()\n```");
}

#[tokio::test]
async fn request_body_carries_the_operation_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/translate"))
        .and(body_partial_json(json!({
            "code": "print(1)",
            "sourceLanguage": "python",
            "targetLanguage": "ruby",
            "modelProvider": "groq"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope("puts 1")))
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let result = client
        .translate_code("print(1)", "python", "ruby", "groq")
        .await
        .expect("result");

    assert_eq!(result, "puts 1");
}

#[tokio::test]
async fn input_is_trimmed_before_posting() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/explain"))
        .and(body_partial_json(json!({ "prompt": "let x = 1;" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope("a binding")))
        .expect(1)
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let result = client
        .explain_code("  let x = 1;  ", "gemini")
        .await
        .expect("result");

    assert_eq!(result, "a binding");
}

#[tokio::test]
async fn missing_result_field_defaults_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/optimize"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "llama-3.3-70b-versatile",
            "modelProvider": "groq",
            "time_taken": "0.50 seconds"
        })))
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let result = client
        .optimize_code("let x = 1;", "javascript", "groq")
        .await
        .expect("result");

    assert_eq!(result, "");
}

#[tokio::test]
async fn error_envelope_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "boom" })))
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let err = client
        .generate_code("anything", "javascript", "intermediate", "gemini")
        .await
        .unwrap_err();

    match err {
        CodePixError::Service(message) => assert_eq!(message, "boom"),
        other => panic!("Expected Service error, got: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_synthesizes_a_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/generate"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let err = client
        .generate_code("anything", "javascript", "intermediate", "gemini")
        .await
        .unwrap_err();

    match err {
        CodePixError::Service(message) => assert!(message.contains("502"), "got: {message}"),
        other => panic!("Expected Service error, got: {other:?}"),
    }
}

#[tokio::test]
async fn empty_input_fails_fast_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope("unreachable")))
        .expect(0)
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let err = client
        .generate_code("   ", "javascript", "intermediate", "gemini")
        .await
        .unwrap_err();

    assert!(matches!(err, CodePixError::Validation(_)));
}

#[tokio::test]
async fn slow_service_surfaces_a_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/ai/explain"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope("too late"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri()).with_timeout(Duration::from_millis(50));
    let err = client.explain_code("let x = 1;", "gemini").await.unwrap_err();

    assert!(matches!(err, CodePixError::Timeout));
}

#[tokio::test]
async fn unreachable_service_surfaces_a_network_error() {
    // Reserve a port, then free it so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = AiClient::new(format!("http://{addr}"));
    let err = client.explain_code("let x = 1;", "gemini").await.unwrap_err();

    assert!(matches!(err, CodePixError::Network(_)));
}

#[tokio::test]
async fn check_status_parses_the_status_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "message": "CodePix AI service is running",
            "timestamp": "2026-08-07T00:00:00Z",
            "uptime": "0h 5m 0s",
            "uptimeSeconds": 300,
            "version": "0.1.0",
            "services": { "gemini": "configured", "groq": "not configured" },
            "endpoints": [
                "GET /api/status",
                "POST /api/ai/generate",
                "POST /api/ai/explain",
                "POST /api/ai/translate",
                "POST /api/ai/optimize"
            ]
        })))
        .mount(&server)
        .await;

    let client = AiClient::new(server.uri());
    let status = client.check_status().await.expect("status");

    assert_eq!(status.status, "OK");
    assert_eq!(status.services.gemini, "configured");
    assert_eq!(status.uptime_seconds, 300);
}

#[tokio::test]
async fn test_connection_reflects_reachability() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "message": "running",
            "timestamp": "2026-08-07T00:00:00Z",
            "uptime": "0h 0m 1s",
            "uptimeSeconds": 1,
            "version": "0.1.0",
            "services": { "gemini": "not configured", "groq": "not configured" },
            "endpoints": []
        })))
        .mount(&server)
        .await;

    let reachable = AiClient::new(server.uri());
    assert!(reachable.test_connection().await);

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let unreachable = AiClient::new(format!("http://{addr}"));
    assert!(!unreachable.test_connection().await);
}

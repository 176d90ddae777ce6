use std::sync::mpsc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shortlink_engine::{
    EngineEvent, EngineHandle, FailureKind, ReqwestShortenClient, ShortenClient, ShortenRequest,
};

#[tokio::test]
async fn success_reply_yields_the_exact_short_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "originalUrl": "https://example.com/very/long/url",
            "expiresAt": null,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "shortUrl": "http://short.url/abc123",
            "shortCode": "abc123",
            "errorMessage": null,
        })))
        // Exactly one request per submission.
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestShortenClient::new(server.uri());
    let request = ShortenRequest::new("https://example.com/very/long/url", None);

    let reply = client.shorten(&request).await.unwrap();
    let outcome = reply.into_outcome().unwrap();

    assert_eq!(outcome.short_url, "http://short.url/abc123");
    assert_eq!(outcome.short_code.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn rejected_reply_on_2xx_surfaces_the_service_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "shortUrl": null,
            "shortCode": null,
            "errorMessage": "Invalid URL provided",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestShortenClient::new(server.uri());
    let request = ShortenRequest::new("https://example.com", None);

    let reply = client.shorten(&request).await.unwrap();
    let err = reply.into_outcome().unwrap_err();

    assert_eq!(err.kind, FailureKind::Rejected);
    assert_eq!(err.message, "Invalid URL provided");
}

#[tokio::test]
async fn non_2xx_uses_the_reason_phrase_as_the_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestShortenClient::new(server.uri());
    let request = ShortenRequest::new("https://example.com", None);

    let err = client.shorten(&request).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(400));
    assert_eq!(err.message, "Bad Request");
}

#[tokio::test]
async fn non_2xx_without_a_reason_phrase_falls_back_to_the_generic_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        // 599 has no canonical reason phrase.
        .respond_with(ResponseTemplate::new(599))
        .mount(&server)
        .await;

    let client = ReqwestShortenClient::new(server.uri());
    let request = ShortenRequest::new("https://example.com", None);

    let err = client.shorten(&request).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(599));
    assert_eq!(err.message, "Failed to shorten URL");
}

#[tokio::test]
async fn malformed_2xx_body_fails_instead_of_hanging() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = ReqwestShortenClient::new(server.uri());
    let request = ShortenRequest::new("https://example.com", None);

    let err = client.shorten(&request).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn unreachable_service_is_a_network_failure() {
    // Nothing listens on this port.
    let client = ReqwestShortenClient::new("http://127.0.0.1:9");
    let request = ShortenRequest::new("https://example.com", None);

    let err = client.shorten(&request).await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Network);
    assert!(!err.message.is_empty());
}

// Multi-threaded so the mock server keeps serving while this test thread
// blocks on the settlement channel.
#[tokio::test(flavor = "multi_thread")]
async fn engine_settles_every_submission_with_one_event() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "shortUrl": "http://short.url/xyz789",
            "shortCode": "xyz789",
            "errorMessage": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (event_tx, event_rx) = mpsc::channel();
    let engine = EngineHandle::new(server.uri(), event_tx);
    engine.submit("https://example.com/very/long/url", None);

    let event = event_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("submission settles");
    let EngineEvent::SubmitCompleted { result } = event;
    let outcome = result.unwrap();

    assert_eq!(outcome.short_url, "http://short.url/xyz789");
    assert!(event_rx.recv_timeout(Duration::from_millis(200)).is_err());
}

#[tokio::test]
async fn engine_settles_failures_too() {
    let (event_tx, event_rx) = mpsc::channel();
    let engine = EngineHandle::new("http://127.0.0.1:9", event_tx);
    engine.submit("https://example.com", None);

    let event = event_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("submission settles");
    let EngineEvent::SubmitCompleted { result } = event;

    assert_eq!(result.unwrap_err().kind, FailureKind::Network);
}

#[tokio::test]
async fn custom_clients_plug_into_the_engine() {
    use std::sync::Arc;

    use async_trait::async_trait;
    use shortlink_engine::{ShortenResult, SubmitError};

    struct CannedClient;

    #[async_trait]
    impl ShortenClient for CannedClient {
        async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResult, SubmitError> {
            assert_eq!(request.original_url, "https://example.com");
            assert_eq!(request.expires_at.as_deref(), Some("2026-12-31T23:59:59Z"));
            Ok(ShortenResult {
                success: Some(true),
                short_url: Some("http://short.url/canned".to_string()),
                short_code: None,
                error_message: None,
            })
        }
    }

    let (event_tx, event_rx) = mpsc::channel();
    let engine = EngineHandle::with_client(Arc::new(CannedClient), event_tx);
    engine.submit(
        "https://example.com",
        Some("2026-12-31T23:59:59Z".to_string()),
    );

    let event = event_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("submission settles");
    let EngineEvent::SubmitCompleted { result } = event;

    assert_eq!(result.unwrap().short_url, "http://short.url/canned");
}

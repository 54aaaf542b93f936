//! End-to-end tests for the persona routes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use baatcheet_client::BackendClient;
use baatcheet_core::{ChatSession, HistoryEntry, Reply, Sender};
use baatcheet_server::{http, AppState, GeneratorError, ResponseGenerator};

const ORIGIN: &str = "https://chat.example.com";

/// One call seen by the stub generator.
#[derive(Debug, Clone)]
struct Call {
    persona_name: String,
    question: String,
    history: Vec<HistoryEntry>,
}

/// Generator returning a fixed outcome and recording its calls.
struct StubGenerator {
    outcome: fn() -> Result<Reply, GeneratorError>,
    calls: Mutex<Vec<Call>>,
}

impl StubGenerator {
    fn new(outcome: fn() -> Result<Reply, GeneratorError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResponseGenerator for StubGenerator {
    async fn generate(
        &self,
        persona_name: &str,
        question: &str,
        history: &[HistoryEntry],
    ) -> Result<Reply, GeneratorError> {
        self.calls.lock().unwrap().push(Call {
            persona_name: persona_name.to_string(),
            question: question.to_string(),
            history: history.to_vec(),
        });
        (self.outcome)()
    }
}

fn reply_x() -> Result<Reply, GeneratorError> {
    Ok(Reply::assistant("X"))
}

/// Start the real router on an ephemeral port and return its base URL.
async fn spawn_server(generator: Arc<StubGenerator>) -> String {
    let router = http::create_router(AppState::new(generator), ORIGIN).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_hitesh_route_relays_generator_reply() {
    let generator = StubGenerator::new(reply_x);
    let base = spawn_server(generator.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/hiteshsir", base))
        .json(&json!({"question": "hi", "history": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"role": "assistant", "content": "X"}));

    let calls = generator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].persona_name, "Hitesh Choudhary");
    assert_eq!(calls[0].question, "hi");
    assert!(calls[0].history.is_empty());
}

#[tokio::test]
async fn test_piyush_route_binds_its_own_persona() {
    let generator = StubGenerator::new(reply_x);
    let base = spawn_server(generator.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/piyushsir", base))
        .json(&json!({
            "question": "system design?",
            "history": [
                {"role": "assistant", "content": "greeting"},
                {"role": "user", "content": "hello"},
                {"role": "assistant", "content": "haan bolo"}
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let calls = generator.calls();
    assert_eq!(calls[0].persona_name, "Piyush Garg");
    assert_eq!(
        calls[0].history,
        vec![
            HistoryEntry::assistant("greeting"),
            HistoryEntry::user("hello"),
            HistoryEntry::assistant("haan bolo"),
        ]
    );
}

#[tokio::test]
async fn test_session_through_real_backend_shows_bot_reply() {
    let generator = StubGenerator::new(reply_x);
    let base = spawn_server(generator.clone()).await;

    let client = BackendClient::new(&base);
    let mut session = ChatSession::default();
    session.send_message("hi", &client).await.unwrap();

    let last = session.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Bot);
    assert_eq!(last.text, "X");
    assert_eq!(session.messages().len(), session.history().len());

    // The seeded greeting is replayed, the new question is not.
    let calls = generator.calls();
    assert_eq!(calls[0].history.len(), 1);
    assert_eq!(calls[0].history[0].content, session.persona().greeting);
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let generator = StubGenerator::new(reply_x);
    let base = spawn_server(generator.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/hiteshsir", base))
        .header("content-type", "application/json")
        .body("{\"history\": []}")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "invalid_json");
    assert!(generator.calls().is_empty());
}

#[tokio::test]
async fn test_blank_question_is_invalid_field() {
    let generator = StubGenerator::new(reply_x);
    let base = spawn_server(generator.clone()).await;

    let response = reqwest::Client::new()
        .post(format!("{}/piyushsir", base))
        .json(&json!({"question": "   ", "history": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "invalid_field");
    assert_eq!(body["error"]["param"], "question");
    assert!(generator.calls().is_empty());
}

#[tokio::test]
async fn test_generator_outage_is_service_unavailable() {
    let generator = StubGenerator::new(|| Err(GeneratorError::Unavailable("refused".into())));
    let base = spawn_server(generator).await;

    let response = reqwest::Client::new()
        .post(format!("{}/hiteshsir", base))
        .json(&json!({"question": "hi", "history": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "generator_unavailable");
}

#[tokio::test]
async fn test_generator_upstream_error_is_bad_gateway() {
    let generator = StubGenerator::new(|| {
        Err(GeneratorError::Upstream {
            status: 500,
            body: "boom".into(),
        })
    });
    let base = spawn_server(generator).await;

    let response = reqwest::Client::new()
        .post(format!("{}/hiteshsir", base))
        .json(&json!({"question": "hi", "history": []}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 502);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["code"], "generator_failed");
}

#[tokio::test]
async fn test_generator_failure_becomes_fallback_in_session() {
    let generator = StubGenerator::new(|| Err(GeneratorError::EmptyReply));
    let base = spawn_server(generator).await;

    let client = BackendClient::new(&base);
    let mut session = ChatSession::default();
    session.send_message("hello", &client).await.unwrap();

    assert_eq!(
        session.history().last().unwrap(),
        &HistoryEntry::assistant(baatcheet_core::FALLBACK_REPLY)
    );
}

#[tokio::test]
async fn test_cors_allows_only_configured_origin() {
    let base = spawn_server(StubGenerator::new(reply_x)).await;
    let client = reqwest::Client::new();

    let allowed = client
        .post(format!("{}/hiteshsir", base))
        .header("origin", ORIGIN)
        .json(&json!({"question": "hi", "history": []}))
        .send()
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        ORIGIN
    );

    let denied = client
        .post(format!("{}/hiteshsir", base))
        .header("origin", "https://evil.example.com")
        .json(&json!({"question": "hi", "history": []}))
        .send()
        .await
        .unwrap();
    assert!(denied
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn test_cors_preflight() {
    let base = spawn_server(StubGenerator::new(reply_x)).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/piyushsir", base))
        .header("origin", ORIGIN)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], ORIGIN);
}

#[tokio::test]
async fn test_health() {
    let base = spawn_server(StubGenerator::new(reply_x)).await;
    let client = BackendClient::new(&base);
    assert!(client.health().await.unwrap());
}

#[test]
fn test_invalid_origin_is_rejected() {
    let generator = StubGenerator::new(reply_x);
    assert!(http::create_router(AppState::new(generator), "bad\norigin").is_err());
}

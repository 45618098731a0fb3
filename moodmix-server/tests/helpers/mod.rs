//! Shared test helpers for moodmix-server integration tests
//!
//! - Stub generators for driving the playlist endpoint
//! - A local chat-completions server standing in for the real API

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    routing::post,
    Json, Router,
};
use http_body_util::BodyExt;
use moodmix_server::services::{GenerationError, PlaylistGenerator};
use moodmix_server::{build_router, AppState};
use serde_json::{json, Value};

/// Generator that always fails like an unreachable API
pub struct FailingGenerator;

#[async_trait]
impl PlaylistGenerator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _mood: &str, _genre: &str) -> Result<String, GenerationError> {
        Err(GenerationError::NetworkError("connection refused".to_string()))
    }
}

/// Generator that returns fixed text
pub struct TextGenerator(pub String);

#[async_trait]
impl PlaylistGenerator for TextGenerator {
    fn name(&self) -> &'static str {
        "text"
    }

    async fn generate(&self, _mood: &str, _genre: &str) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }
}

/// Router wired to `generator`
pub fn app_with(generator: Option<Arc<dyn PlaylistGenerator>>) -> Router {
    build_router(AppState::new(generator))
}

/// POST /playlist request with a JSON body
pub fn playlist_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/playlist")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collect a response body and parse it as JSON
pub async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.expect("Should read body").to_bytes();
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

/// Canned behavior of the fake completions server
#[derive(Clone)]
pub enum FakeReply {
    /// 200 with `content` as the first choice's message
    Content(String),
    /// Given status with a plain error body
    Status(StatusCode),
    /// 200 with a body that is not completion JSON
    Garbage,
    /// Hold the response this long before answering like `Content`
    Delay(Duration, String),
}

/// Start a local chat-completions API on an ephemeral port
///
/// Returns the base URL to put in `GeneratorConfig::base_url`. Requests
/// without `Authorization: Bearer test-key` get 401.
pub async fn start_fake_completions(reply: FakeReply) -> String {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let reply = reply.clone();
            async move {
                if let FakeReply::Delay(delay, _) = &reply {
                    tokio::time::sleep(*delay).await;
                }
                fake_completion(reply, headers, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/v1", addr)
}

fn fake_completion(reply: FakeReply, headers: HeaderMap, body: Value) -> (StatusCode, String) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == "Bearer test-key")
        .unwrap_or(false);
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            json!({"error": {"message": "Invalid API Key"}}).to_string(),
        );
    }

    // The prompt must be a single user message
    if body["messages"][0]["role"] != "user" || body["messages"].as_array().map(Vec::len) != Some(1) {
        return (StatusCode::BAD_REQUEST, "expected one user message".to_string());
    }

    match reply {
        FakeReply::Content(content) | FakeReply::Delay(_, content) => (
            StatusCode::OK,
            json!({
                "id": "chatcmpl-test",
                "object": "chat.completion",
                "model": body["model"],
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }]
            })
            .to_string(),
        ),
        FakeReply::Status(status) => (status, "upstream unavailable".to_string()),
        FakeReply::Garbage => (StatusCode::OK, "<html>not json</html>".to_string()),
    }
}

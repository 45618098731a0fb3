//! Integration tests for moodmix-server HTTP endpoints
//!
//! Tests cover:
//! - POST /playlist with no generator, failing generator, unusable and usable model text
//! - Always-200 behavior for any decodable body
//! - 400 error envelope for undecodable bodies
//! - Health endpoint and embedded UI
//! - Listener binding reports the real address

mod helpers;

use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode};
use helpers::{app_with, body_json, playlist_request, FailingGenerator, TextGenerator};
use moodmix_server::services::PlaylistGenerator;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

fn titles(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("response should be an array")
        .iter()
        .map(|song| song["title"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Playlist Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_playlist_without_generator_uses_catalog() {
    let app = app_with(None);

    let response = app
        .oneshot(playlist_request(r#"{"mood":"chill","genre":"lofi"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(titles(&body)[0], "Moonlight Sonata Lo-Fi");
    assert_eq!(body[0]["artist"], "ChillBeats Collective");
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_failing_generator_still_returns_five_songs() {
    let generator: Arc<dyn PlaylistGenerator> = Arc::new(FailingGenerator);
    let app = app_with(Some(generator));

    let response = app
        .oneshot(playlist_request(r#"{"mood":"energetic","genre":"rock"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(
        titles(&body),
        vec!["Thunder Road", "Break Free", "Rise Up", "Fire Within", "Never Give Up"]
    );
}

#[tokio::test]
async fn test_failing_generator_unknown_mood_synthesizes() {
    let generator: Arc<dyn PlaylistGenerator> = Arc::new(FailingGenerator);
    let app = app_with(Some(generator));

    let response = app
        .oneshot(playlist_request(r#"{"mood":"unknownMood","genre":"anything"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(
        titles(&body),
        vec![
            "Anything Track 1",
            "Anything Track 2",
            "Anything Track 3",
            "Anything Track 4",
            "Anything Track 5",
        ]
    );
    assert_eq!(body[0]["artist"], "Various Artists");
    assert_eq!(
        body[0]["description"],
        "A unknownMood anything song perfect for your mood"
    );
}

#[tokio::test]
async fn test_model_text_wrapped_in_prose_is_used() {
    let text = r#"Here is your playlist:
[
  {"title": "Velvet Rain", "artist": "Night Owls", "description": "Slow and warm"},
  {"title": "Paper Moon", "artist": "June Static", "description": "Hazy guitar"}
]
Hope you enjoy it!"#;
    let generator: Arc<dyn PlaylistGenerator> = Arc::new(TextGenerator(text.to_string()));
    let app = app_with(Some(generator));

    let response = app
        .oneshot(playlist_request(r#"{"mood":"chill","genre":"lofi"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(titles(&body), vec!["Velvet Rain", "Paper Moon"]);
}

#[tokio::test]
async fn test_unusable_model_text_falls_back() {
    let generator: Arc<dyn PlaylistGenerator> =
        Arc::new(TextGenerator("I'd recommend some jazz!".to_string()));
    let app = app_with(Some(generator));

    let response = app
        .oneshot(playlist_request(r#"{"mood":"CHILL","genre":"unknownGenre"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    // First 5 of the flattened chill songs: the whole lofi list
    assert_eq!(titles(&body)[0], "Moonlight Sonata Lo-Fi");
    assert_eq!(titles(&body)[4], "Late Night Drive");
}

#[tokio::test]
async fn test_missing_fields_are_treated_as_empty() {
    let app = app_with(None);

    let response = app.oneshot(playlist_request("{}")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(titles(&body)[0], " Track 1");
    assert_eq!(body[0]["description"], "A   song perfect for your mood");
}

#[tokio::test]
async fn test_invalid_json_body_is_bad_request() {
    let app = app_with(None);

    let response = app.oneshot(playlist_request("mood=chill")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_get_playlist_not_allowed() {
    let app = app_with(None);

    let request = Request::builder()
        .method("GET")
        .uri("/playlist")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Health / UI Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = app_with(None);

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "moodmix-server");
    assert_eq!(body["generator"], false);
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_health_reports_generator() {
    let generator: Arc<dyn PlaylistGenerator> = Arc::new(FailingGenerator);
    let app = app_with(Some(generator));

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let body = body_json(response.into_body()).await;
    assert_eq!(body["generator"], true);
}

#[tokio::test]
async fn test_root_serves_html_form() {
    let app = app_with(None);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn test_app_js_served() {
    let app = app_with(None);

    let request = Request::builder()
        .uri("/static/app.js")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/javascript"
    );
}

// =============================================================================
// Listener Tests
// =============================================================================

#[tokio::test]
async fn test_bind_listener_reports_ephemeral_port() {
    let (listener, addr) = moodmix_server::bind_listener("127.0.0.1", 0).await.unwrap();

    assert_ne!(addr.port(), 0, "port 0 should resolve to the bound port");
    assert_eq!(addr, listener.local_addr().unwrap());
}

//! Tests for the script, voice, catalog and status endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use common::{
    build_test_app, build_test_app_with_speech, fast_policy, get, no_scripts, post_json, send, FakeScripts,
    FakeSpeech, FakeTalks, Reply,
};

fn scripts() -> FakeScripts {
    let mut replies = HashMap::new();
    replies.insert(
        "insulated water bottle".to_string(),
        Reply::Json(json!("Okay so this bottle kept my ice frozen through a 6 hour hike...")),
    );
    replies.insert(
        "rate limited".to_string(),
        Reply::Status(429, r#"{"error":{"message":"Rate limit reached"}}"#),
    );
    FakeScripts { replies }
}

#[tokio::test]
async fn script_endpoint_returns_generated_copy() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), scripts(), fast_policy(1));

    let response = send(&app.router, post_json("/api/script", json!({ "product": "insulated water bottle" }))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({ "script": "Okay so this bottle kept my ice frozen through a 6 hour hike..." })
    );
    assert!(response.request_id.is_some());
}

#[tokio::test]
async fn script_endpoint_passes_provider_errors_through() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), scripts(), fast_policy(1));

    let response = send(&app.router, post_json("/api/script", json!({ "product": "rate limited" }))).await;

    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.json()["error"]["message"], "Rate limit reached");
}

#[tokio::test]
async fn script_endpoint_reports_unexpected_shape_as_500() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), scripts(), fast_policy(1));

    let response = send(&app.router, post_json("/api/script", json!({ "product": "unknown gadget" }))).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = response.json()["error"].as_str().unwrap().to_string();
    assert!(message.contains("no choices"), "got {message}");
}

#[tokio::test]
async fn voice_endpoint_returns_buffered_mpeg() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), no_scripts(), fast_policy(1));

    let response = send(&app.router, post_json("/api/voice", json!({ "text": "hello" }))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("audio/mpeg"));
    assert_eq!(&response.body[..], b"ID3hello");
    assert_eq!(*app.speech.voices.lock().unwrap(), vec![None]);
}

#[tokio::test]
async fn voice_endpoint_forwards_optional_voice() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), no_scripts(), fast_policy(1));

    send(
        &app.router,
        post_json("/api/voice", json!({ "text": "hello", "voiceId": "21m00Tcm4TlvDq8ikWAM" })),
    )
    .await;

    assert_eq!(
        *app.speech.voices.lock().unwrap(),
        vec![Some("21m00Tcm4TlvDq8ikWAM".to_string())]
    );
}

#[tokio::test]
async fn voice_endpoint_passes_provider_errors_through() {
    let speech = Arc::new(FakeSpeech {
        fail: Some((401, r#"{"detail":{"status":"invalid_api_key"}}"#)),
        voices: Mutex::new(Vec::new()),
    });
    let app = build_test_app_with_speech(FakeTalks::new(vec![], vec![]), no_scripts(), speech, fast_policy(1));

    let response = send(&app.router, post_json("/api/voice", json!({ "text": "hello" }))).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert_eq!(response.json()["detail"]["status"], "invalid_api_key");
}

#[tokio::test]
async fn catalog_lists_avatars_with_absolute_urls() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), no_scripts(), fast_policy(1));

    let response = send(&app.router, get("/api/catalog")).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(
        body["avatar_groups"][0]["avatars"][0]["url"],
        "https://ads.example.com/avatars/male/male1.jpg"
    );
    assert_eq!(body["voices"].as_array().unwrap().len(), 6);
    assert_eq!(body["default_voice"], "en-US-JennyNeural");
}

#[tokio::test]
async fn status_reports_provider_configuration() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), no_scripts(), fast_policy(4));

    let response = send(&app.router, get("/api/status")).await;

    let body = response.json();
    assert_eq!(body["services"]["video_generation"], "configured");
    assert_eq!(body["services"]["script_generation"], "not_configured");
    assert_eq!(body["render_polling"]["max_attempts"], 4);
    assert_eq!(body["render_polling"]["budget_ms"], 40);
}

#[tokio::test]
async fn studio_page_is_served() {
    let app = build_test_app(FakeTalks::new(vec![], vec![]), no_scripts(), fast_policy(1));

    let response = send(&app.router, get("/")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.text().contains("AI UGC Ad Video Generator"));
}

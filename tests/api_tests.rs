use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use sinhala_tts::{ServerConfig, routes, state::AppState};

fn test_config() -> ServerConfig {
    ServerConfig {
        host: "0.0.0.0".to_string(),
        port: 3001,
        // Port 9 is the discard service; nothing answers there, so any
        // request that reaches synthesis fails fast.
        vits_server_url: "http://127.0.0.1:9/api/tts".to_string(),
        request_timeout_seconds: 5,
        cache_ttl_hours: 24,
        sinhala_unicode_lower: 0x0D80,
        sinhala_unicode_upper: 0x0DFF,
    }
}

fn synthesize_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/synthesize")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app_state = AppState::new(test_config()).unwrap();

    let app = routes::api::create_api_router().with_state(app_state);

    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_synthesize_empty_text_rejected() {
    let app_state = AppState::new(test_config()).unwrap();
    let app = routes::api::create_api_router().with_state(app_state);

    let response = app
        .oneshot(synthesize_request(json!({ "text": "   " })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Invalid text input");
    assert_eq!(json["details"], "Text is empty or contains only whitespace");
}

#[tokio::test]
async fn test_synthesize_english_text_rejected() {
    let app_state = AppState::new(test_config()).unwrap();
    let app = routes::api::create_api_router().with_state(app_state);

    let response = app
        .oneshot(synthesize_request(json!({ "text": "Hello, world!" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Invalid text input");
    assert!(
        json["details"]
            .as_str()
            .unwrap()
            .contains("does not contain Sinhala characters")
    );
}

#[tokio::test]
async fn test_synthesize_punctuation_only_rejected() {
    let app_state = AppState::new(test_config()).unwrap();
    let app = routes::api::create_api_router().with_state(app_state);

    let response = app
        .oneshot(synthesize_request(json!({ "text": "?!... ()" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["details"], "Text contains only whitespace and punctuation");
}

#[tokio::test]
async fn test_synthesize_unreachable_model_server_returns_500() {
    let app_state = AppState::new(test_config()).unwrap();
    let app = routes::api::create_api_router().with_state(app_state);

    let response = app
        .oneshot(synthesize_request(json!({ "text": "ආයුබෝවන්" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"], "Audio generation failed");
}

#[tokio::test]
async fn test_root_health_route() {
    use axum::{Router, routing::get};

    let app_state = AppState::new(test_config()).unwrap();
    let app = Router::new()
        .route("/", get(sinhala_tts::handlers::api::health_check))
        .with_state(app_state);

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use tutorials_api::config::{LogFormat, ServerConfig};
use tutorials_api::router::build_app_router;
use tutorials_api::state::AppState;
use tutorials_core::repository::TutorialRepository;
use tutorials_core::tutorial::Tutorial;
use tutorials_db::repositories::MemoryTutorialRepo;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
        log_format: LogFormat::Pretty,
    }
}

/// Shared state over an in-memory repository seeded with `tutorials`.
///
/// Keep the returned state and call [`app`] per request so the flash store
/// and repository persist across requests.
pub fn test_state(tutorials: Vec<Tutorial>) -> AppState {
    test_state_with(Arc::new(MemoryTutorialRepo::seeded(tutorials)))
}

pub fn test_state_with(repo: Arc<dyn TutorialRepository>) -> AppState {
    AppState::new(repo, test_config())
}

/// Full application router (same middleware stack as production).
pub fn app(state: &AppState) -> Router {
    build_app_router(state.clone())
}

pub fn sample(title: &str) -> Tutorial {
    Tutorial::new(title, "Test Description", 3, true)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

// ---------------------------------------------------------------------------
// Response helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// The `name=value` part of the first `Set-Cookie` header, as a browser
/// would send it back.
pub fn flash_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

/// Follow a redirect response: GET its `Location` with its flash cookie.
pub async fn follow(state: &AppState, response: Response<Body>) -> Response<Body> {
    let target = location(&response).expect("redirect has a Location").to_string();
    match flash_cookie(&response) {
        Some(cookie) => get_with_cookie(app(state), &target, &cookie).await,
        None => get(app(state), &target).await,
    }
}

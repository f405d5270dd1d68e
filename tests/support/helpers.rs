// tests/support/helpers.rs
use super::mocks;
use axum::body::{self, Body, Bytes};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use blog_articles::application::{ports::ClockPort, services::ApplicationServices};
use blog_articles::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use blog_articles::infrastructure::{repositories::ArticleRepositories, time::FixedClock};
use blog_articles::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

pub fn build_state_with_repos(
    read: Arc<dyn ArticleReadRepository>,
    write: Arc<dyn ArticleWriteRepository>,
) -> HttpState {
    let clock: Arc<ClockPort> = Arc::new(FixedClock(mocks::fixed_now()));
    let services = Arc::new(ApplicationServices::new(write, read, clock));
    HttpState { services }
}

/// Fresh in-memory store behind the full router.
pub fn make_test_router() -> axum::Router {
    let repos = ArticleRepositories::in_memory();
    build_router(build_state_with_repos(repos.read, repos.write))
}

pub fn make_test_router_with_repos(
    read: Arc<dyn ArticleReadRepository>,
    write: Arc<dyn ArticleWriteRepository>,
) -> axum::Router {
    build_router(build_state_with_repos(read, write))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// POST with an arbitrary `Content-Type` header and raw body.
pub fn raw_post(uri: &str, content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

pub fn form_post(uri: &str, form: &str) -> Request<Body> {
    raw_post(uri, "application/x-www-form-urlencoded", form.to_string())
}

pub fn json_post(uri: &str, json: &Value) -> Request<Body> {
    raw_post(uri, "application/json", json.to_string())
}

pub async fn body_bytes(resp: Response) -> Bytes {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
}

pub async fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp).await.to_vec()).expect("utf-8 body")
}

pub async fn body_json(resp: Response) -> Value {
    serde_json::from_slice(&body_bytes(resp).await).expect("json body")
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("location header")
        .to_string()
}

pub fn content_type(resp: &Response) -> String {
    resp.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string()
}

pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let ct = content_type(&resp);
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

pub async fn assert_error_page(resp: Response, expected_status: StatusCode) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = content_type(&resp);
    assert!(ct.starts_with("text/html"), "unexpected content-type: {ct}");
    body_text(resp).await
}

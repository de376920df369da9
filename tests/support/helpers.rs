// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt as _;
use user_registry::application::{ports::util::SlugGenerator, services::ApplicationServices};
use user_registry::domain::user::UserRepository;
use user_registry::infrastructure::util::DefaultSlugGenerator;
use user_registry::presentation::http::{routes::build_router, state::HttpState};

pub const TEST_MAX_PROBES: u32 = 50;

pub fn build_services(repo: Arc<dyn UserRepository>) -> Arc<ApplicationServices> {
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    Arc::new(ApplicationServices::new(repo, slugger, TEST_MAX_PROBES))
}

pub fn make_test_router(repo: Arc<dyn UserRepository>) -> Router {
    let state = HttpState {
        services: build_services(repo),
    };
    build_router(state, Vec::new())
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Assert an error body carries the expected status, reason and detail.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, detail: &str) {
    assert_eq!(status, expected, "unexpected status, body: {body}");
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        expected.canonical_reason()
    );
    assert_eq!(body.get("detail").and_then(Value::as_str), Some(detail));
}

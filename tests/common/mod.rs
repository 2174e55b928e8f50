#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{Body, BoxBody};
use axum::http::{header, Request, Response};
use axum::Router;
use reservation_desk_backend::controller::{router_endpoints, AppState};
use reservation_desk_backend::repositories::memory_repo::MemoryRepo;
use reservation_desk_backend::views::HtmlRenderer;
use tower::ServiceExt;

/// Router wired to a fresh in-memory store; the store handle is returned
/// so tests can inspect what actually got persisted.
pub fn test_app(strict_forms: bool) -> (Arc<MemoryRepo>, Router) {
    let repo = Arc::new(MemoryRepo::new());
    let app_state = AppState {
        customers: repo.clone(),
        reservations: repo.clone(),
        views: Arc::new(HtmlRenderer),
        strict_forms,
    };
    (repo, router_endpoints(app_state))
}

pub async fn send_get(app: &Router, uri: &str) -> Response<BoxBody> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_form(app: &Router, uri: &str, body: &str) -> Response<BoxBody> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response<BoxBody>) -> String {
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<BoxBody>) -> String {
    response.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}

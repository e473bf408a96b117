use std::sync::Arc;

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, Request, StatusCode, Uri};
use axum::response::Response;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;

fn state_for(base: &str) -> AppState {
    AppState { http: reqwest::Client::new(), api_base_url: Arc::from(base) }
}

/// Bind a stub placement API on an ephemeral port and return its base URL.
async fn spawn_upstream() -> String {
    let upstream = Router::new()
        .route(
            "/api/job-sites",
            get(|uri: Uri, headers: HeaderMap| async move {
                Json(json!({
                    "query": uri.query(),
                    "auth": headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()),
                }))
            }),
        )
        .route(
            "/api/register",
            post(|body: String| async move {
                (StatusCode::BAD_REQUEST, Json(json!({ "email": ["already taken"], "echo": body })))
            }),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });
    format!("http://{addr}")
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(state_for("http://127.0.0.1:1"));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unreachable_upstream_maps_to_bad_gateway() {
    let app = api_routes(state_for("http://127.0.0.1:1"));
    let response = app
        .oneshot(Request::builder().uri("/api/dashboard").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn forward_preserves_query_and_authorization() {
    let base = spawn_upstream().await;
    let app = api_routes(state_for(&base));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/job-sites?country=South%20Africa")
                .header(AUTHORIZATION, "Bearer token-1")
                .header("cookie", "ignored=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "application/json");
    let body = body_json(response).await;
    assert_eq!(body["query"], "country=South%20Africa");
    assert_eq!(body["auth"], "Bearer token-1");
}

#[tokio::test]
async fn forward_passes_upstream_error_status_and_body_through() {
    let base = spawn_upstream().await;
    let app = api_routes(state_for(&base));
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/register")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"email":"a@b.c"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["email"][0], "already taken");
    assert_eq!(body["echo"], r#"{"email":"a@b.c"}"#);
}

#[tokio::test]
async fn unknown_api_path_returns_upstream_not_found() {
    let base = spawn_upstream().await;
    let app = api_routes(state_for(&base));
    let response = app
        .oneshot(Request::builder().uri("/api/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

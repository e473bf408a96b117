//! `/api/*` forwarding to the external placement API.
//!
//! The browser calls relative `/api/...` paths; this handler replays each
//! request against `API_BASE_URL` with the same method, path, query, and body.
//! Only `content-type`, `accept`, and `authorization` are carried over. The
//! upstream status, content type, and body come back unchanged.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

const FORWARDED_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, ACCEPT, AUTHORIZATION];

#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("placement API unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        match self {
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, self.to_string()).into_response(),
        }
    }
}

/// `ANY /api/{*path}` — replay the request upstream.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ForwardError> {
    let url = upstream_url(&state.api_base_url, uri.path(), uri.query());

    let mut request = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "api forward failed");
        ForwardError::Upstream(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;
    tracing::debug!(%method, path = uri.path(), status = status.as_u16(), "api forwarded");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}

/// Upstream URL for a request path (which still carries its `/api` prefix).
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}{path}?{q}"),
        None => format!("{base}{path}"),
    }
}

/// The subset of inbound headers that is replayed upstream.
pub(crate) fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in FORWARDED_HEADERS {
        if let Some(value) = inbound.get(&name) {
            out.insert(name, value.clone());
        }
    }
    out
}

#[cfg(test)]
#[path = "forward_test.rs"]
mod forward_test;

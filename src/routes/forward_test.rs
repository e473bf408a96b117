use axum::http::HeaderValue;
use axum::http::header::COOKIE;

use super::*;

#[test]
fn upstream_url_keeps_api_prefix_and_query() {
    assert_eq!(
        upstream_url("http://api.test", "/api/job-sites", Some("country=United%20Kingdom")),
        "http://api.test/api/job-sites?country=United%20Kingdom"
    );
}

#[test]
fn upstream_url_without_query() {
    assert_eq!(upstream_url("http://api.test", "/api/dashboard", None), "http://api.test/api/dashboard");
    assert_eq!(upstream_url("http://api.test", "/api/dashboard", Some("")), "http://api.test/api/dashboard");
}

#[test]
fn forwarded_headers_keep_only_allowed_set() {
    let mut inbound = HeaderMap::new();
    inbound.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    inbound.insert(ACCEPT, HeaderValue::from_static("application/json"));
    inbound.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    inbound.insert(COOKIE, HeaderValue::from_static("session=secret"));

    let out = forwarded_headers(&inbound);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert!(out.get(COOKIE).is_none());
}

#[test]
fn forwarded_headers_empty_when_none_present() {
    assert!(forwarded_headers(&HeaderMap::new()).is_empty());
}

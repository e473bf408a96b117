//! REST API helpers for the placement backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, relative to the
//! host, which forwards `/api/*` to the configured backend.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, String>`. Reads leave it to the caller to log
//! and move on; writes reduce server error bodies to the first usable message
//! so pages can show it in a banner. There is no retry, timeout, or
//! cancellation here.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApplicationData, ContactFormData, JobSite, PopularCountry, RegisterResponse};

pub const DASHBOARD_ENDPOINT: &str = "/api/dashboard";
pub const JOB_SITES_ENDPOINT: &str = "/api/job-sites";
pub const POPULAR_COUNTRIES_ENDPOINT: &str = "/api/popular-countries";
pub const REGISTER_ENDPOINT: &str = "/api/register";
pub const CONTACT_ENDPOINT: &str = "/api/contact";

pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const CONTACT_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[cfg(any(test, feature = "hydrate"))]
fn job_sites_endpoint(country: Option<&str>) -> String {
    match country.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => format!(
            "{JOB_SITES_ENDPOINT}?country={}",
            crate::util::query::encode_component(c)
        ),
        None => JOB_SITES_ENDPOINT.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Pick the message shown for a rejected write: the server's own message when
/// the body carries one, otherwise `fallback`.
#[cfg(any(test, feature = "hydrate"))]
fn server_error_or(body: Option<&serde_json::Value>, fallback: &str) -> String {
    body.and_then(super::types::first_error_message)
        .unwrap_or_else(|| fallback.to_owned())
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json(url: &str, what: &str) -> Result<serde_json::Value, String> {
    let resp = with_auth(gloo_net::http::Request::get(url))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())
}

/// Fetch the curated job sites for the signed-in user from `/api/dashboard`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_dashboard_sites() -> Result<Vec<JobSite>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(DASHBOARD_ENDPOINT, "dashboard").await?;
        Ok(super::types::parse_list(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch job sites from `/api/job-sites`, optionally filtered by country.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_job_sites(country: Option<&str>) -> Result<Vec<JobSite>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = job_sites_endpoint(country);
        let body = get_json(&url, "job sites").await?;
        Ok(super::types::parse_list(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = country;
        Err("not available on server".to_owned())
    }
}

/// Fetch the server-ranked popular countries from `/api/popular-countries`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_popular_countries() -> Result<Vec<PopularCountry>, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_json(POPULAR_COUNTRIES_ENDPOINT, "popular countries").await?;
        Ok(super::types::parse_list(body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Register a new applicant via `POST /api/register`.
///
/// # Errors
///
/// Returns the first server-provided error message, or a generic message when
/// the request fails without one.
pub async fn register_user(data: &ApplicationData) -> Result<RegisterResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(REGISTER_ENDPOINT))
            .json(data)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| REGISTER_FAILED_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<serde_json::Value>().await.ok();
            return Err(server_error_or(body.as_ref(), REGISTER_FAILED_MESSAGE));
        }
        resp.json::<RegisterResponse>()
            .await
            .map_err(|_| REGISTER_FAILED_MESSAGE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err("not available on server".to_owned())
    }
}

/// Send a contact message via `POST /api/contact`.
///
/// # Errors
///
/// Returns the server-provided error message, or a generic message when the
/// request fails without one.
pub async fn submit_contact(form: &ContactFormData) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(CONTACT_ENDPOINT))
            .json(form)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|_| CONTACT_FAILED_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.json::<serde_json::Value>().await.ok();
            return Err(server_error_or(body.as_ref(), CONTACT_FAILED_MESSAGE));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err("not available on server".to_owned())
    }
}

//! Wire DTOs for the placement API boundary.
//!
//! DESIGN
//! ======
//! The backend contract is loosely typed: list endpoints may answer with a
//! bare array or wrap it in `results`/`data`, identifiers arrive as numbers or
//! strings, and error bodies come in several shapes. Parsing is therefore
//! tolerant here so pages can stay schema-agnostic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A job site listing as returned by the directory and dashboard endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSite {
    /// Backend identifier, normalized to a string.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Country the site serves.
    #[serde(default)]
    pub country: String,
    /// Display name of the site.
    #[serde(alias = "name", default)]
    pub site_name: String,
    /// Public URL of the site.
    #[serde(default)]
    pub url: String,
}

/// A country ranked by how many job sites are associated with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularCountry {
    pub country: String,
    #[serde(alias = "site_count", default)]
    pub count: u32,
}

/// Wizard form state sent to the registration endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
    pub age: String,
    pub country: String,
    pub desired_job: String,
    pub start_month: String,
}

/// The application data handed to the payment step. Never carries the password.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedApplication {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub desired_job: String,
    pub start_month: String,
}

impl From<&ApplicationData> for SubmittedApplication {
    fn from(data: &ApplicationData) -> Self {
        Self {
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
            email: data.email.clone(),
            country: data.country.clone(),
            desired_job: data.desired_job.clone(),
            start_month: data.start_month.clone(),
        }
    }
}

/// Contact form payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Session tokens issued after a successful registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(alias = "access_token")]
    pub access: String,
    #[serde(alias = "refresh_token", default)]
    pub refresh: Option<String>,
}

/// Parse a list payload that may be a bare array or an object wrapping the
/// array under `results` or `data`.
///
/// Entries that fail to deserialize are skipped; any other shape yields an
/// empty list.
pub fn parse_list<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match ["results", "data"]
            .iter()
            .find_map(|key| match map.remove(*key) {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            }) {
            Some(items) => items,
            None => return Vec::new(),
        },
        _ => return Vec::new(),
    };
    items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect()
}

/// Pull the first human-readable error out of a server error body.
///
/// Checks a bare string body, then the `detail`/`message`/`error` keys, then
/// walks fields in server order looking for a string, a list starting with a
/// string, or a nested object containing one.
pub fn first_error_message(body: &Value) -> Option<String> {
    match body {
        Value::String(s) => non_empty(s),
        Value::Array(items) => items.iter().find_map(first_error_message),
        Value::Object(map) => {
            for key in ["detail", "message", "error"] {
                if let Some(Value::String(s)) = map.get(key) {
                    if let Some(msg) = non_empty(s) {
                        return Some(msg);
                    }
                }
            }
            map.values().find_map(first_error_message)
        }
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}

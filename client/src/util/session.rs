//! Session token persistence.
//!
//! The wizard is the only writer: tokens are stored once registration
//! succeeds. API helpers read the access token to authorize requests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::storage;
use crate::net::types::RegisterResponse;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Persist the tokens from a registration response. Returns `false` if the
/// access token could not be written.
pub fn store_tokens(tokens: &RegisterResponse) -> bool {
    let stored = storage::save_string(ACCESS_TOKEN_KEY, &tokens.access);
    if let Some(refresh) = tokens.refresh.as_deref() {
        storage::save_string(REFRESH_TOKEN_KEY, refresh);
    }
    stored
}

/// The stored access token, if any.
pub fn access_token() -> Option<String> {
    storage::load_string(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
}

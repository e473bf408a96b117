//! URL helpers for the bookmarkable directory view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The directory page treats the `country` query parameter as the source of
//! truth for its selection. These helpers build the hrefs it navigates to.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::state::sites::CountrySelection;

pub const SITES_PATH: &str = "/sites";
pub const COUNTRY_PARAM: &str = "country";

/// Percent-encode a query component, leaving RFC 3986 unreserved bytes as-is.
pub fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Whether a raw `country` query value already reads exactly as the
/// selection it produces, so the URL needs no rewrite.
pub fn is_canonical_country(raw: Option<&str>) -> bool {
    CountrySelection::from_query(raw).query_value() == raw
}

/// Directory href for `selection`: no query for all countries, otherwise
/// `?country=<name>`.
pub fn sites_href(selection: &CountrySelection) -> String {
    match selection.query_value() {
        Some(country) => format!("{SITES_PATH}?{COUNTRY_PARAM}={}", encode_component(country)),
        None => SITES_PATH.to_owned(),
    }
}

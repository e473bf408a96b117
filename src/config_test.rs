use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<HostConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    HostConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        ApiTimeouts {
            request_secs: DEFAULT_API_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("API_BASE_URL", "https://api.example.test/"),
        ("API_REQUEST_TIMEOUT_SECS", "45"),
        ("API_CONNECT_TIMEOUT_SECS", "3"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://api.example.test");
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 45, connect_secs: 3 });
}

#[test]
fn from_lookup_rejects_bad_port() {
    assert_eq!(config_from(&[("PORT", "http")]), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(config_from(&[("PORT", "70000")]), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    assert_eq!(
        config_from(&[("API_BASE_URL", "ftp://files.example.test")]),
        Err(ConfigError::InvalidApiBaseUrl("ftp://files.example.test".into()))
    );
}

#[test]
fn unparseable_timeouts_fall_back_to_defaults() {
    let cfg = config_from(&[("API_REQUEST_TIMEOUT_SECS", "soon"), ("API_CONNECT_TIMEOUT_SECS", "-1")]).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_API_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.timeouts.connect_secs, DEFAULT_API_CONNECT_TIMEOUT_SECS);
}

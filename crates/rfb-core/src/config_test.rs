use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_url, "http://localhost:4000");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "rfb/0.1 (customer-feedback)");
    assert!(cfg.geo_high_accuracy);
    assert_eq!(cfg.geo_timeout_ms, 10_000);
    assert_eq!(cfg.geo_max_age_ms, 300_000);
    assert_eq!(cfg.geo_timeout().as_secs(), 10);
    assert_eq!(cfg.geo_max_age().as_secs(), 300);
}

#[test]
fn build_app_config_api_url_override() {
    let mut map = HashMap::new();
    map.insert("RFB_API_URL", "https://api.example.in");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_url, "https://api.example.in");
}

#[test]
fn build_app_config_rejects_non_http_api_url() {
    let mut map = HashMap::new();
    map.insert("RFB_API_URL", "localhost:4000");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RFB_API_URL"),
        "expected InvalidEnvVar(RFB_API_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("RFB_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn build_app_config_request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("RFB_REQUEST_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RFB_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(RFB_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_geo_high_accuracy_accepts_false() {
    let mut map = HashMap::new();
    map.insert("RFB_GEO_HIGH_ACCURACY", "false");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(!cfg.geo_high_accuracy);
}

#[test]
fn build_app_config_geo_high_accuracy_invalid() {
    let mut map = HashMap::new();
    map.insert("RFB_GEO_HIGH_ACCURACY", "maybe");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RFB_GEO_HIGH_ACCURACY"),
        "expected InvalidEnvVar(RFB_GEO_HIGH_ACCURACY), got: {result:?}"
    );
}

#[test]
fn build_app_config_geo_timeouts_override() {
    let mut map = HashMap::new();
    map.insert("RFB_GEO_TIMEOUT_MS", "2500");
    map.insert("RFB_GEO_MAX_AGE_MS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.geo_timeout_ms, 2_500);
    assert_eq!(cfg.geo_max_age_ms, 0);
}

#[test]
fn build_app_config_geo_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("RFB_GEO_TIMEOUT_MS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RFB_GEO_TIMEOUT_MS"),
        "expected InvalidEnvVar(RFB_GEO_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn unparseable_override_is_the_only_config_error() {
    let mut map = HashMap::new();
    map.insert("RFB_GEO_TIMEOUT_MS", "ten seconds");
    let err = build_app_config(lookup_from_map(&map)).unwrap_err();
    let ConfigError::InvalidEnvVar { var, reason } = err;
    assert_eq!(var, "RFB_GEO_TIMEOUT_MS");
    assert!(!reason.is_empty());
}

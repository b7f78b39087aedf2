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
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "DEVFINDER_ENV"));
}

#[test]
fn build_app_config_defaults() {
    let map = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.api_base_url, "https://api.github.com/");
    assert_eq!(cfg.ip_api_base_url, "https://api.ipify.org/");
    assert!(cfg.github_token.is_none());
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "devfinder/0.1 (profile-lookup)");
    assert!(cfg.rate_limit_ip_lookup);
    assert_eq!(
        cfg.theme_path,
        std::path::PathBuf::from("./.devfinder/theme.json")
    );
    assert_eq!(cfg.system_theme, Theme::Dark);
    assert_eq!(cfg.page_url, "https://devfinder.local/");
}

#[test]
fn build_app_config_overrides() {
    let mut map = HashMap::new();
    map.insert("DEVFINDER_ENV", "production");
    map.insert("DEVFINDER_API_BASE_URL", "http://127.0.0.1:9000");
    map.insert("GITHUB_TOKEN", "ghp_secret");
    map.insert("DEVFINDER_REQUEST_TIMEOUT_SECS", "5");
    map.insert("DEVFINDER_RATE_LIMIT_IP_LOOKUP", "false");
    map.insert("DEVFINDER_SYSTEM_THEME", "light");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.github_token.as_deref(), Some("ghp_secret"));
    assert_eq!(cfg.request_timeout_secs, 5);
    assert!(!cfg.rate_limit_ip_lookup);
    assert_eq!(cfg.system_theme, Theme::Light);
}

#[test]
fn empty_github_token_counts_as_unset() {
    let mut map = HashMap::new();
    map.insert("GITHUB_TOKEN", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.github_token.is_none());
}

#[test]
fn debug_output_redacts_token() {
    let mut map = HashMap::new();
    map.insert("GITHUB_TOKEN", "ghp_secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let debug = format!("{cfg:?}");
    assert!(!debug.contains("ghp_secret"), "token leaked: {debug}");
    assert!(debug.contains("[redacted]"));
}

#[test]
fn invalid_timeout_is_rejected() {
    for raw in ["soon", "0"] {
        let mut map = HashMap::new();
        map.insert("DEVFINDER_REQUEST_TIMEOUT_SECS", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DEVFINDER_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar for {raw:?}, got: {result:?}"
        );
    }
}

#[test]
fn invalid_bool_is_rejected() {
    let mut map = HashMap::new();
    map.insert("DEVFINDER_RATE_LIMIT_IP_LOOKUP", "sometimes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DEVFINDER_RATE_LIMIT_IP_LOOKUP")
    );
}

#[test]
fn invalid_system_theme_is_rejected() {
    let mut map = HashMap::new();
    map.insert("DEVFINDER_SYSTEM_THEME", "sepia");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DEVFINDER_SYSTEM_THEME")
    );
}

#[test]
fn non_http_base_url_is_rejected() {
    let mut map = HashMap::new();
    map.insert("DEVFINDER_IP_API_BASE_URL", "ftp://example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DEVFINDER_IP_API_BASE_URL")
    );
}

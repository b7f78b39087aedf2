use crate::app_config::{AppConfig, Environment};
use crate::theme::Theme;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(invalid(var, format!("expected a boolean, got {other:?}"))),
        }
    };

    let parse_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Ok(raw)
        } else {
            Err(invalid(var, format!("expected an http(s) URL, got {raw:?}")))
        }
    };

    let env = parse_environment(&or_default("DEVFINDER_ENV", "development"))?;
    let log_level = or_default("DEVFINDER_LOG_LEVEL", "info");

    let api_base_url = parse_url("DEVFINDER_API_BASE_URL", "https://api.github.com/")?;
    let ip_api_base_url = parse_url("DEVFINDER_IP_API_BASE_URL", "https://api.ipify.org/")?;
    let github_token = lookup("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty());
    let request_timeout_secs = parse_u64("DEVFINDER_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "DEVFINDER_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }
    let user_agent = or_default("DEVFINDER_USER_AGENT", "devfinder/0.1 (profile-lookup)");
    let rate_limit_ip_lookup = parse_bool("DEVFINDER_RATE_LIMIT_IP_LOOKUP", "true")?;

    let theme_path = PathBuf::from(or_default("DEVFINDER_THEME_PATH", "./.devfinder/theme.json"));
    let system_theme = or_default("DEVFINDER_SYSTEM_THEME", "dark")
        .parse::<Theme>()
        .map_err(|reason| invalid("DEVFINDER_SYSTEM_THEME", reason))?;
    let page_url = parse_url("DEVFINDER_PAGE_URL", "https://devfinder.local/")?;

    Ok(AppConfig {
        env,
        log_level,
        api_base_url,
        ip_api_base_url,
        github_token,
        request_timeout_secs,
        user_agent,
        rate_limit_ip_lookup,
        theme_path,
        system_theme,
        page_url,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "DEVFINDER_ENV".to_string(),
            reason: format!("unknown environment {other:?}"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

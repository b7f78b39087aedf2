use std::path::PathBuf;

use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub api_base_url: String,
    pub ip_api_base_url: String,
    pub github_token: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Resolve the caller's IP address to include it in rate-limit messages.
    pub rate_limit_ip_lookup: bool,
    pub theme_path: PathBuf,
    /// Stand-in for the desktop color-scheme preference.
    pub system_theme: Theme,
    pub page_url: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("api_base_url", &self.api_base_url)
            .field("ip_api_base_url", &self.ip_api_base_url)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "[redacted]"),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("rate_limit_ip_lookup", &self.rate_limit_ip_lookup)
            .field("theme_path", &self.theme_path)
            .field("system_theme", &self.system_theme)
            .field("page_url", &self.page_url)
            .finish()
    }
}

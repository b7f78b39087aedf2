//! HTTP client for the profile API and the IP lookup service.
//!
//! Wraps `reqwest` with status handling for the cases the widget cares
//! about: 404 becomes [`GithubError::NotFound`], 403 becomes
//! [`GithubError::RateLimited`], anything else outside 2xx becomes
//! [`GithubError::UnexpectedStatus`]. Nothing is retried.

use std::time::Duration;

use devfinder_core::{AppConfig, Handle};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};

use crate::error::GithubError;
use crate::types::GithubUser;

/// Client for `GET /users/{handle}` and the plain-text IP lookup.
///
/// Use [`GithubClient::new`] with the loaded configuration, or
/// [`GithubClient::with_base_urls`] to point at mock servers in tests.
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: Client,
    api_base: Url,
    ip_base: Url,
}

impl GithubClient {
    /// # Errors
    ///
    /// See [`GithubClient::with_base_urls`].
    pub fn new(config: &AppConfig) -> Result<Self, GithubError> {
        Self::with_base_urls(
            &config.api_base_url,
            &config.ip_api_base_url,
            config.github_token.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// # Errors
    ///
    /// - [`GithubError::InvalidBaseUrl`] if either base URL does not parse.
    /// - [`GithubError::InvalidToken`] if `token` cannot be sent as a header.
    /// - [`GithubError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_base_urls(
        api_base: &str,
        ip_base: &str,
        token: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GithubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| GithubError::InvalidToken)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base: parse_base(api_base)?,
            ip_base: parse_base(ip_base)?,
        })
    }

    /// Fetches one profile.
    ///
    /// # Errors
    ///
    /// - [`GithubError::NotFound`] on 404.
    /// - [`GithubError::RateLimited`] on 403.
    /// - [`GithubError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`GithubError::Http`] on network failure.
    /// - [`GithubError::Deserialize`] if the body is not a profile.
    pub async fn fetch_user(&self, handle: &Handle) -> Result<GithubUser, GithubError> {
        let url = self.user_url(handle)?;
        tracing::debug!(%url, "requesting profile");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GithubError::NotFound {
                url: url.to_string(),
            });
        }

        if status == StatusCode::FORBIDDEN {
            let header_num = |name: &str| {
                response
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<i64>().ok())
            };
            let remaining = header_num("x-ratelimit-remaining").and_then(|n| u64::try_from(n).ok());
            let reset_at = header_num("x-ratelimit-reset");
            return Err(GithubError::RateLimited {
                url: url.to_string(),
                remaining,
                reset_at,
            });
        }

        if !status.is_success() {
            return Err(GithubError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<GithubUser>(&body).map_err(|e| GithubError::Deserialize {
            context: format!("profile for {handle}"),
            source: e,
        })
    }

    /// Asks the IP lookup service for the caller's public address.
    ///
    /// # Errors
    ///
    /// - [`GithubError::UnexpectedStatus`] on a non-2xx status.
    /// - [`GithubError::Http`] on network failure.
    /// - [`GithubError::EmptyIp`] if the body is blank.
    pub async fn fetch_public_ip(&self) -> Result<String, GithubError> {
        tracing::debug!(url = %self.ip_base, "requesting caller IP address");
        let response = self.client.get(self.ip_base.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.ip_base.to_string(),
            });
        }

        let ip = response.text().await?.trim().to_owned();
        if ip.is_empty() {
            return Err(GithubError::EmptyIp);
        }
        Ok(ip)
    }

    fn user_url(&self, handle: &Handle) -> Result<Url, GithubError> {
        self.api_base
            .join(&format!("users/{handle}"))
            .map_err(|e| GithubError::InvalidBaseUrl {
                url: self.api_base.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Parses a base URL, ensuring exactly one trailing slash so relative
/// joins append to the path instead of replacing its last segment.
fn parse_base(raw: &str) -> Result<Url, GithubError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| GithubError::InvalidBaseUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(api_base: &str) -> GithubClient {
        GithubClient::with_base_urls(api_base, "https://api.ipify.org", None, 30, "devfinder-test")
            .expect("client construction should not fail")
    }

    #[test]
    fn user_url_appends_to_base_path() {
        let handle = Handle::parse("octocat").unwrap();
        let client = test_client("https://api.github.com");
        assert_eq!(
            client.user_url(&handle).unwrap().as_str(),
            "https://api.github.com/users/octocat"
        );

        let client = test_client("https://ghe.example.com/api/v3/");
        assert_eq!(
            client.user_url(&handle).unwrap().as_str(),
            "https://ghe.example.com/api/v3/users/octocat"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = GithubClient::with_base_urls("not a url", "https://api.ipify.org", None, 30, "t")
            .unwrap_err();
        assert!(matches!(err, GithubError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let err = GithubClient::with_base_urls(
            "https://api.github.com",
            "https://api.ipify.org",
            Some("bad\ntoken"),
            30,
            "t",
        )
        .unwrap_err();
        assert!(matches!(err, GithubError::InvalidToken));
    }
}

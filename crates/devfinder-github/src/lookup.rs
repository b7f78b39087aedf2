//! The profile fetcher: one lookup per call, every outcome mapped onto
//! exactly one success or [`LookupError`].

use devfinder_core::{AppConfig, Handle, Profile};

use crate::client::GithubClient;
use crate::error::{GithubError, LookupError};
use crate::normalize::into_profile;

#[derive(Debug, Clone)]
pub struct ProfileFetcher {
    client: GithubClient,
    resolve_ip_on_rate_limit: bool,
}

impl ProfileFetcher {
    pub fn new(client: GithubClient, resolve_ip_on_rate_limit: bool) -> Self {
        Self {
            client,
            resolve_ip_on_rate_limit,
        }
    }

    /// # Errors
    ///
    /// Returns [`GithubError`] if the underlying client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, GithubError> {
        Ok(Self::new(
            GithubClient::new(config)?,
            config.rate_limit_ip_lookup,
        ))
    }

    /// Looks up `handle`. A rate-limited response triggers one IP lookup
    /// whose result only feeds the error message; nothing is retried.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotFound`] on 404.
    /// - [`LookupError::RateLimited`] on 403.
    /// - [`LookupError::Transport`] on network or decoding failure, and when
    ///   the IP lookup after a 403 fails.
    /// - [`LookupError::UnexpectedStatus`] on any other status.
    pub async fn lookup(&self, handle: &Handle) -> Result<Profile, LookupError> {
        match self.client.fetch_user(handle).await {
            Ok(user) => Ok(into_profile(user)),
            Err(GithubError::RateLimited {
                remaining,
                reset_at,
                ..
            }) => {
                tracing::warn!(%handle, ?remaining, ?reset_at, "profile API rate limit exceeded");
                if !self.resolve_ip_on_rate_limit {
                    return Err(LookupError::RateLimited { ip: None });
                }
                match self.client.fetch_public_ip().await {
                    Ok(ip) => Err(LookupError::RateLimited { ip: Some(ip) }),
                    Err(e) => {
                        tracing::error!(error = %e, "can't get the user's IP address");
                        Err(LookupError::Transport(e))
                    }
                }
            }
            Err(e) => {
                tracing::debug!(%handle, error = %e, "profile lookup failed");
                Err(e.into())
            }
        }
    }
}

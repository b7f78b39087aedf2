use thiserror::Error;

/// Errors returned by [`crate::GithubClient`].
#[derive(Debug, Error)]
pub enum GithubError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("user not found: {url}")]
    NotFound { url: String },

    /// The API refused the request because the rate limit is exhausted.
    #[error("rate limited by {url} (remaining {remaining:?}, resets at {reset_at:?})")]
    RateLimited {
        url: String,
        remaining: Option<u64>,
        reset_at: Option<i64>,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IP lookup returned an empty body")]
    EmptyIp,

    #[error("access token is not a valid header value")]
    InvalidToken,

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Outcome of a failed profile lookup, one variant per case the status
/// region distinguishes.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no profile exists for this handle")]
    NotFound,

    /// `ip` is `None` when the IP lookup is switched off.
    #[error("API rate limit exhausted (ip: {ip:?})")]
    RateLimited { ip: Option<String> },

    #[error("transport failure: {0}")]
    Transport(#[source] GithubError),

    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },
}

impl LookupError {
    /// Text written into the status region for this failure.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            LookupError::NotFound => "No results".to_string(),
            LookupError::RateLimited { ip: Some(ip) } => {
                format!("API rate limit exceeded for {ip} (403 Forbidden)")
            }
            LookupError::RateLimited { ip: None } => {
                "API rate limit exceeded (403 Forbidden)".to_string()
            }
            LookupError::Transport(_) | LookupError::UnexpectedStatus { .. } => {
                "Something went wrong".to_string()
            }
        }
    }
}

impl From<GithubError> for LookupError {
    fn from(err: GithubError) -> Self {
        match err {
            GithubError::NotFound { .. } => LookupError::NotFound,
            GithubError::UnexpectedStatus { status, .. } => LookupError::UnexpectedStatus { status },
            // Callers resolve the IP before converting; reaching here means
            // the lookup was skipped.
            GithubError::RateLimited { .. } => LookupError::RateLimited { ip: None },
            other => LookupError::Transport(other),
        }
    }
}

//! Wire types for the profile API.

use serde::Deserialize;

/// `GET /users/{handle}` response body. Fields the widget does not show
/// are ignored; optional fields accept both `null` and absence.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    /// RFC 3339 timestamp, e.g. `"2011-01-25T18:44:36Z"`.
    pub created_at: String,
}

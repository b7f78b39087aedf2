/// Snapshot of one profile as returned by the API.
///
/// Built once per successful lookup and handed to the renderer by shared
/// reference; nothing mutates it afterwards and it is never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub avatar_url: String,
    pub display_name: Option<String>,
    pub handle: String,
    pub profile_url: String,
    /// Timestamp exactly as the API sent it.
    pub joined_at: String,
    pub bio: Option<String>,
    pub public_repo_count: u64,
    pub follower_count: u64,
    pub following_count: u64,
    pub location: Option<String>,
    /// May lack a scheme.
    pub website_url: Option<String>,
    pub twitter_handle: Option<String>,
    /// A leading `@` marks a handle on the same platform.
    pub company: Option<String>,
}

//! Conversion of wire types into the domain [`Profile`].

use devfinder_core::Profile;

use crate::types::GithubUser;

/// Moves a [`GithubUser`] into a [`Profile`]. Optional fields are carried
/// as-is; deciding what counts as unavailable is the renderer's job.
#[must_use]
pub fn into_profile(user: GithubUser) -> Profile {
    Profile {
        avatar_url: user.avatar_url,
        display_name: user.name,
        handle: user.login,
        profile_url: user.html_url,
        joined_at: user.created_at,
        bio: user.bio,
        public_repo_count: user.public_repos,
        follower_count: user.followers,
        following_count: user.following,
        location: user.location,
        website_url: user.blog,
        twitter_handle: user.twitter_username,
        company: user.company,
    }
}

//! Client for the public profile API and the IP lookup service, plus the
//! profile fetcher built on top of them.

pub mod client;
pub mod error;
pub mod generation;
pub mod lookup;
pub mod normalize;
pub mod types;

pub use client::GithubClient;
pub use error::{GithubError, LookupError};
pub use generation::{Generation, LookupGeneration};
pub use lookup::ProfileFetcher;
pub use normalize::into_profile;
pub use types::GithubUser;

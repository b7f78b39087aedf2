//! Keeps the searched handle in the page location's `user` query
//! parameter, with a history stack of visited locations.

use anyhow::Context;
use devfinder_core::Handle;
use reqwest::Url;

pub const USER_PARAM: &str = "user";

#[derive(Debug, Clone)]
pub struct NavigationSync {
    location: Url,
    history: Vec<Url>,
}

impl NavigationSync {
    #[must_use]
    pub fn new(location: Url) -> Self {
        Self {
            history: vec![location.clone()],
            location,
        }
    }

    /// # Errors
    ///
    /// Returns an error if `raw` is not an absolute URL.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let location = Url::parse(raw).with_context(|| format!("invalid page URL {raw:?}"))?;
        Ok(Self::new(location))
    }

    #[must_use]
    pub fn location(&self) -> &Url {
        &self.location
    }

    #[must_use]
    pub fn history(&self) -> &[Url] {
        &self.history
    }

    /// The `user` parameter, trimmed. `None` when it is missing or empty;
    /// a whitespace-only value comes back as `""`.
    #[must_use]
    pub fn requested_user(&self) -> Option<String> {
        self.location
            .query_pairs()
            .find(|(key, _)| key == USER_PARAM)
            .filter(|(_, value)| !value.is_empty())
            .map(|(_, value)| value.trim().to_owned())
    }

    /// Sets `user` to `handle` and pushes the resulting location. Other
    /// parameters keep their order; an existing `user` keeps its position
    /// and any duplicates are dropped.
    pub fn push_user(&mut self, handle: &Handle) {
        let mut replaced = false;
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (key, value) in self.location.query_pairs() {
            if key == USER_PARAM {
                if !replaced {
                    pairs.push((key.into_owned(), handle.to_string()));
                    replaced = true;
                }
            } else {
                pairs.push((key.into_owned(), value.into_owned()));
            }
        }
        if !replaced {
            pairs.push((USER_PARAM.to_owned(), handle.to_string()));
        }

        let mut next = self.location.clone();
        next.query_pairs_mut().clear().extend_pairs(pairs);
        tracing::debug!(location = %next, "pushing history entry");
        self.history.push(next.clone());
        self.location = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(raw: &str) -> NavigationSync {
        NavigationSync::parse(raw).expect("valid test URL")
    }

    fn handle(raw: &str) -> Handle {
        Handle::parse(raw).unwrap()
    }

    #[test]
    fn requested_user_reads_and_trims_param() {
        assert_eq!(
            nav("https://devfinder.local/?user=%20octocat%20").requested_user(),
            Some("octocat".to_string())
        );
        assert_eq!(nav("https://devfinder.local/").requested_user(), None);
        assert_eq!(nav("https://devfinder.local/?user=").requested_user(), None);
        assert_eq!(
            nav("https://devfinder.local/?user=%20%20").requested_user(),
            Some(String::new())
        );
    }

    #[test]
    fn push_user_appends_param_and_history() {
        let mut n = nav("https://devfinder.local/");
        n.push_user(&handle("octocat"));
        assert_eq!(n.location().as_str(), "https://devfinder.local/?user=octocat");
        assert_eq!(n.history().len(), 2);
        assert_eq!(n.requested_user(), Some("octocat".to_string()));
    }

    #[test]
    fn push_user_replaces_in_place_and_keeps_other_params() {
        let mut n = nav("https://devfinder.local/?tab=repos&user=old&lang=en&user=dup");
        n.push_user(&handle("new-user"));
        assert_eq!(
            n.location().as_str(),
            "https://devfinder.local/?tab=repos&user=new-user&lang=en"
        );
    }

    #[test]
    fn parse_rejects_relative_urls() {
        assert!(NavigationSync::parse("/?user=octocat").is_err());
    }
}

//! Writes a [`Profile`] into the [`ViewState`], one entry point per field.

use chrono::{DateTime, Utc};
use devfinder_core::{normalize, Field, Profile};

use super::{Anchor, FieldSlot, ViewConfig, ViewState};

/// Sole owner of the display state.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: ViewConfig,
    view: ViewState,
}

impl Renderer {
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            view: ViewState::default(),
        }
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Renders every field of `profile` and updates the title.
    pub fn render(&mut self, profile: &Profile) {
        self.show_avatar(&profile.avatar_url, &profile.handle);
        self.show_name(&normalize(profile.display_name.as_deref()));
        self.show_handle(&profile.handle, &profile.profile_url);
        self.show_join_date(&profile.joined_at);
        self.show_bio(&normalize(profile.bio.as_deref()));
        self.show_repositories(profile.public_repo_count);
        self.show_followers(profile.follower_count);
        self.show_following(profile.following_count);
        self.show_location(&normalize(profile.location.as_deref()));
        self.show_website(&normalize(profile.website_url.as_deref()));
        self.show_twitter(&normalize(profile.twitter_handle.as_deref()));
        self.show_company(&normalize(profile.company.as_deref()));
        self.view.title = format!("{} | {}", self.config.title_prefix, profile.handle);
    }

    pub fn show_avatar(&mut self, url: &str, alt: &str) {
        self.view.avatar.src = url.to_owned();
        self.view.avatar.alt = alt.to_owned();
    }

    pub fn show_name(&mut self, name: &Field) {
        let class = &self.config.name_unavailable_class;
        match name {
            Field::Available(value) => set_text_available(&mut self.view.name, value, class),
            Field::Unavailable => {
                set_unavailable(&mut self.view.name, &self.config.unavailable_text, class);
            }
        }
    }

    pub fn show_handle(&mut self, handle: &str, profile_url: &str) {
        self.view.handle.set_link(Anchor {
            href: profile_url.to_owned(),
            text: format!("@{handle}"),
            class: self.config.handle_link_class.clone(),
        });
    }

    /// Formats the timestamp as `DD Mon YYYY` (UTC) and keeps the raw
    /// value as the slot's `datetime`.
    pub fn show_join_date(&mut self, raw: &str) {
        let slot = &mut self.view.joined;
        slot.datetime = Some(raw.to_owned());
        match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => {
                let formatted = parsed
                    .with_timezone(&Utc)
                    .format(&self.config.date_format)
                    .to_string();
                set_text_available(slot, &formatted, &self.config.unavailable_class);
            }
            Err(e) => {
                tracing::warn!(value = %raw, error = %e, "unparseable join date");
                set_unavailable(
                    slot,
                    &self.config.unavailable_text,
                    &self.config.unavailable_class,
                );
            }
        }
    }

    pub fn show_bio(&mut self, bio: &Field) {
        let class = &self.config.unavailable_class;
        match bio {
            Field::Available(value) => set_text_available(&mut self.view.bio, value, class),
            Field::Unavailable => {
                set_unavailable(&mut self.view.bio, &self.config.no_bio_text, class);
            }
        }
    }

    pub fn show_repositories(&mut self, count: u64) {
        self.view.repositories.set_text(count.to_string());
    }

    pub fn show_followers(&mut self, count: u64) {
        self.view.followers.set_text(count.to_string());
    }

    pub fn show_following(&mut self, count: u64) {
        self.view.following.set_text(count.to_string());
    }

    pub fn show_location(&mut self, location: &Field) {
        let class = &self.config.unavailable_class;
        match location {
            Field::Available(value) => set_text_available(&mut self.view.location, value, class),
            Field::Unavailable => {
                set_unavailable(&mut self.view.location, &self.config.unavailable_text, class);
            }
        }
    }

    /// Links to the site, adding `http://` when no scheme is present. The
    /// visible text stays as stored.
    pub fn show_website(&mut self, website: &Field) {
        let class = &self.config.unavailable_class;
        match website {
            Field::Available(value) => {
                let href = if value.starts_with("http://") || value.starts_with("https://") {
                    value.clone()
                } else {
                    format!("http://{value}")
                };
                let anchor = self.anchor(href, value.clone());
                set_link_available(&mut self.view.website, anchor, class);
            }
            Field::Unavailable => {
                set_unavailable(&mut self.view.website, &self.config.unavailable_text, class);
            }
        }
    }

    pub fn show_twitter(&mut self, twitter: &Field) {
        let class = &self.config.unavailable_class;
        match twitter {
            Field::Available(value) => {
                let anchor = self.anchor(
                    format!("{}{value}", self.config.twitter_base),
                    format!("@{value}"),
                );
                set_link_available(&mut self.view.twitter, anchor, class);
            }
            Field::Unavailable => {
                set_unavailable(&mut self.view.twitter, &self.config.unavailable_text, class);
            }
        }
    }

    /// A leading `@` marks an organisation on the same platform and becomes
    /// a link to it; anything else is plain text.
    pub fn show_company(&mut self, company: &Field) {
        let class = &self.config.unavailable_class;
        match company {
            Field::Available(value) => match value.strip_prefix('@') {
                Some(org) => {
                    let anchor = self.anchor(
                        format!("{}{org}", self.config.github_base),
                        format!("@{org}"),
                    );
                    set_link_available(&mut self.view.company, anchor, class);
                }
                None => set_text_available(&mut self.view.company, value, class),
            },
            Field::Unavailable => {
                set_unavailable(&mut self.view.company, &self.config.unavailable_text, class);
            }
        }
    }

    fn anchor(&self, href: String, text: String) -> Anchor {
        Anchor {
            href,
            text,
            class: self.config.link_class.clone(),
        }
    }
}

fn set_unavailable(slot: &mut FieldSlot, text: &str, class: &str) {
    slot.add_class(class);
    slot.set_text(text);
}

fn set_text_available(slot: &mut FieldSlot, text: &str, class: &str) {
    slot.remove_class(class);
    slot.set_text(text);
}

fn set_link_available(slot: &mut FieldSlot, anchor: Anchor, class: &str) {
    slot.remove_class(class);
    slot.set_link(anchor);
}

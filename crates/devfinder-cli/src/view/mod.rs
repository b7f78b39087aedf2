//! Explicit display state for one rendered profile.
//!
//! Every attribute owns a [`FieldSlot`]: a class set plus its content.
//! Content is text, a single link, or nothing; writing either kind replaces
//! whatever was there, so re-rendering never stacks links.

mod config;
mod render;
mod terminal;

use std::collections::BTreeSet;

use serde::Serialize;

pub use config::ViewConfig;
pub use render::Renderer;
pub use terminal::format_view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub href: String,
    pub text: String,
    pub class: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Link(Anchor),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSlot {
    pub classes: BTreeSet<String>,
    pub content: Content,
    /// Machine-readable companion value (join date only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

impl FieldSlot {
    pub fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_owned());
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    pub fn set_link(&mut self, anchor: Anchor) {
        self.content = Content::Link(anchor);
    }

    /// Visible text, whether plain or the text of the link.
    #[must_use]
    pub fn text(&self) -> &str {
        match &self.content {
            Content::Empty => "",
            Content::Text(text) => text,
            Content::Link(anchor) => &anchor.text,
        }
    }

    #[must_use]
    pub fn link(&self) -> Option<&Anchor> {
        match &self.content {
            Content::Link(anchor) => Some(anchor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Avatar {
    pub src: String,
    pub alt: String,
}

/// Everything the page shows for a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub title: String,
    pub avatar: Avatar,
    pub name: FieldSlot,
    /// Canonical `@handle` link to the profile page.
    pub handle: FieldSlot,
    pub joined: FieldSlot,
    pub bio: FieldSlot,
    pub repositories: FieldSlot,
    pub followers: FieldSlot,
    pub following: FieldSlot,
    pub location: FieldSlot,
    pub website: FieldSlot,
    pub twitter: FieldSlot,
    pub company: FieldSlot,
}

impl ViewState {
    /// Slots in display order, labelled.
    #[must_use]
    pub fn slots(&self) -> [(&'static str, &FieldSlot); 11] {
        [
            ("name", &self.name),
            ("handle", &self.handle),
            ("joined", &self.joined),
            ("bio", &self.bio),
            ("repos", &self.repositories),
            ("followers", &self.followers),
            ("following", &self.following),
            ("location", &self.location),
            ("website", &self.website),
            ("twitter", &self.twitter),
            ("company", &self.company),
        ]
    }
}

//! Plain-text rendering of the view state for stdout.

use std::fmt::Write as _;

use super::{Content, FieldSlot, ViewState};

/// Formats `view` as aligned `label  value` lines. Slots carrying
/// `unavailable_class` are prefixed with `-`; links print as `text <href>`.
/// Slots never written (an empty view) are skipped.
#[must_use]
pub fn format_view(view: &ViewState, unavailable_class: &str) -> String {
    let mut out = String::new();
    if !view.title.is_empty() {
        let _ = writeln!(out, "{}", view.title);
    }
    if !view.avatar.src.is_empty() {
        let _ = writeln!(out, "{:<10} {}", "avatar", view.avatar.src);
    }
    for (label, slot) in view.slots() {
        if slot.content == Content::Empty {
            continue;
        }
        let marker = if slot.has_class(unavailable_class) { "-" } else { " " };
        let _ = writeln!(out, "{marker}{label:<9} {}", describe(slot));
    }
    out
}

fn describe(slot: &FieldSlot) -> String {
    match slot.link() {
        Some(anchor) => format!("{} <{}>", anchor.text, anchor.href),
        None => slot.text().to_owned(),
    }
}

/// Fixed names and wording the renderer writes into the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewConfig {
    pub unavailable_class: String,
    /// Name is hidden from sighted users instead of greyed out.
    pub name_unavailable_class: String,
    pub unavailable_text: String,
    pub no_bio_text: String,
    pub link_class: String,
    pub handle_link_class: String,
    pub github_base: String,
    pub twitter_base: String,
    pub title_prefix: String,
    pub date_format: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            unavailable_class: "is-not-available".to_string(),
            name_unavailable_class: "sr-only".to_string(),
            unavailable_text: devfinder_core::UNAVAILABLE_TEXT.to_string(),
            no_bio_text: "This profile has no bio".to_string(),
            link_class: "result__link".to_string(),
            handle_link_class: "result__username".to_string(),
            github_base: "https://github.com/".to_string(),
            twitter_base: "https://twitter.com/".to_string(),
            title_prefix: "devfinder".to_string(),
            date_format: "%d %b %Y".to_string(),
        }
    }
}

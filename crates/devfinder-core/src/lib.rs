//! Domain types shared by the devfinder crates: handle validation, field
//! normalization, the `Profile` snapshot, theme preference handling and
//! environment-driven configuration.

pub mod app_config;
pub mod config;
pub mod handle;
pub mod normalize;
pub mod profile;
pub mod theme;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use handle::{is_valid_handle, Handle};
pub use normalize::{normalize, Field, UNAVAILABLE_TEXT};
pub use profile::Profile;
pub use theme::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, SwitcherState, Theme,
    ThemeController, THEME_STORAGE_KEY,
};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid handle: {0:?}")]
    InvalidHandle(String),

    #[error("preference store I/O error at {path}: {source}")]
    PreferenceIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("preference store at {path} is not valid JSON: {source}")]
    PreferenceParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

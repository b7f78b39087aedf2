//! Light/dark display preference.
//!
//! The displayed theme is the stored override when there is one, otherwise
//! the system preference. An override is written only while it differs from
//! the system preference; toggling back to match the system removes it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::CoreError;

/// Key under which the override lives in a [`PreferenceStore`].
pub const THEME_STORAGE_KEY: &str = "root-class";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class placed on the root element while this theme is forced.
    #[must_use]
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Light => "is-light",
            Theme::Dark => "is-dark",
        }
    }

    #[must_use]
    pub fn from_root_class(class: &str) -> Option<Self> {
        match class {
            "is-light" => Some(Theme::Light),
            "is-dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("expected \"light\" or \"dark\", got {other:?}")),
        }
    }
}

/// Key-value persistence for display preferences.
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`CoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// # Errors
    ///
    /// Returns [`CoreError`] if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// # Errors
    ///
    /// Returns [`CoreError`] if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in a single file.
///
/// A missing file reads as empty. The parent directory is created on the
/// first write.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, CoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| CoreError::PreferenceParse {
            path: self.path.display().to_string(),
            source: e,
        })
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let body = serde_json::to_string_pretty(entries).map_err(|e| {
            CoreError::PreferenceParse {
                path: self.path.display().to_string(),
                source: e,
            }
        })?;
        std::fs::write(&self.path, body).map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> CoreError {
        CoreError::PreferenceIo {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_owned(), value.to_owned());
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// What the theme switcher control shows for the displayed theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitcherState {
    pub checked: bool,
    /// Name of the theme the switch would move to.
    pub label: &'static str,
    pub icon: &'static str,
}

impl SwitcherState {
    #[must_use]
    pub fn for_theme(displayed: Theme) -> Self {
        match displayed {
            Theme::Dark => Self {
                checked: true,
                label: "light",
                icon: "sun",
            },
            Theme::Light => Self {
                checked: false,
                label: "dark",
                icon: "moon",
            },
        }
    }
}

#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    system: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, system: Theme) -> Self {
        Self { store, system }
    }

    #[must_use]
    pub fn system(&self) -> Theme {
        self.system
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored override, if any. Unrecognized stored values are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the store cannot be read.
    pub fn override_theme(&self) -> Result<Option<Theme>, CoreError> {
        let Some(raw) = self.store.get(THEME_STORAGE_KEY)? else {
            return Ok(None);
        };
        let parsed = Theme::from_root_class(&raw);
        if parsed.is_none() {
            tracing::warn!(value = %raw, "ignoring unrecognized stored theme override");
        }
        Ok(parsed)
    }

    /// # Errors
    ///
    /// Returns [`CoreError`] if the store cannot be read.
    pub fn displayed(&self) -> Result<Theme, CoreError> {
        Ok(self.override_theme()?.unwrap_or(self.system))
    }

    /// Class on the root element: the override's class, or none when
    /// following the system.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the store cannot be read.
    pub fn root_class(&self) -> Result<Option<&'static str>, CoreError> {
        Ok(self.override_theme()?.map(Theme::root_class))
    }

    /// # Errors
    ///
    /// Returns [`CoreError`] if the store cannot be read.
    pub fn switcher(&self) -> Result<SwitcherState, CoreError> {
        Ok(SwitcherState::for_theme(self.displayed()?))
    }

    /// Flips the displayed theme and returns the new one.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the store cannot be read or written.
    pub fn toggle(&mut self) -> Result<Theme, CoreError> {
        let next = self.displayed()?.opposite();
        if next == self.system {
            self.store.remove(THEME_STORAGE_KEY)?;
        } else {
            self.store.set(THEME_STORAGE_KEY, next.root_class())?;
        }
        tracing::debug!(theme = %next, system = %self.system, "theme toggled");
        Ok(next)
    }

    /// Records a new system preference and returns the displayed theme.
    /// A stored override keeps precedence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError`] if the store cannot be read.
    pub fn system_changed(&mut self, system: Theme) -> Result<Theme, CoreError> {
        self.system = system;
        self.displayed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(system: Theme) -> ThemeController<MemoryPreferenceStore> {
        ThemeController::new(MemoryPreferenceStore::default(), system)
    }

    #[test]
    fn follows_system_without_override() {
        let c = controller(Theme::Dark);
        assert_eq!(c.displayed().unwrap(), Theme::Dark);
        assert_eq!(c.root_class().unwrap(), None);
    }

    #[test]
    fn toggle_stores_then_clears_override() {
        let mut c = controller(Theme::Dark);

        assert_eq!(c.toggle().unwrap(), Theme::Light);
        assert_eq!(
            c.store().get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("is-light")
        );
        assert_eq!(c.root_class().unwrap(), Some("is-light"));

        assert_eq!(c.toggle().unwrap(), Theme::Dark);
        assert_eq!(c.store().get(THEME_STORAGE_KEY).unwrap(), None);
        assert_eq!(c.root_class().unwrap(), None);
    }

    #[test]
    fn toggle_from_light_system_stores_dark() {
        let mut c = controller(Theme::Light);
        assert_eq!(c.toggle().unwrap(), Theme::Dark);
        assert_eq!(
            c.store().get(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("is-dark")
        );
    }

    #[test]
    fn system_change_is_ignored_while_override_is_stored() {
        let mut c = controller(Theme::Dark);
        c.toggle().unwrap();
        assert_eq!(c.system_changed(Theme::Light).unwrap(), Theme::Light);
        assert_eq!(c.system_changed(Theme::Dark).unwrap(), Theme::Light);
        assert_eq!(c.override_theme().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn system_change_updates_display_without_override() {
        let mut c = controller(Theme::Dark);
        assert_eq!(c.system_changed(Theme::Light).unwrap(), Theme::Light);
        assert_eq!(c.switcher().unwrap(), SwitcherState::for_theme(Theme::Light));
    }

    #[test]
    fn unknown_stored_value_falls_back_to_system() {
        let mut store = MemoryPreferenceStore::default();
        store.set(THEME_STORAGE_KEY, "is-purple").unwrap();
        let c = ThemeController::new(store, Theme::Light);
        assert_eq!(c.displayed().unwrap(), Theme::Light);
    }

    #[test]
    fn switcher_state_matches_displayed_theme() {
        let dark = SwitcherState::for_theme(Theme::Dark);
        assert!(dark.checked);
        assert_eq!((dark.label, dark.icon), ("light", "sun"));

        let light = SwitcherState::for_theme(Theme::Light);
        assert!(!light.checked);
        assert_eq!((light.label, light.icon), ("dark", "moon"));
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light ".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.json");

        let mut c = ThemeController::new(FilePreferenceStore::new(&path), Theme::Dark);
        c.toggle().unwrap();

        let reopened = ThemeController::new(FilePreferenceStore::new(&path), Theme::Dark);
        assert_eq!(reopened.displayed().unwrap(), Theme::Light);

        let mut reopened = reopened;
        reopened.toggle().unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get(THEME_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn file_store_rejects_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = FilePreferenceStore::new(&path);
        assert!(matches!(
            store.get(THEME_STORAGE_KEY),
            Err(CoreError::PreferenceParse { .. })
        ));
    }
}

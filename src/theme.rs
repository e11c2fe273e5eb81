use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    /// Icon shown on the toggle: the sun offers a way out of dark mode.
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage rejected write for `{key}`")]
    WriteRejected { key: String },
}

/// Origin-scoped string key/value persistence.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The persisted theme preference on top of a [`PreferenceStore`].
pub struct ThemePreference<S> {
    store: S,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Theme {
        match self.store.read(THEME_KEY) {
            Ok(Some(value)) => Theme::from_str(&value).unwrap_or_else(|| {
                log::debug!("ignoring unknown stored theme {value:?}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::debug!("theme preference not loaded: {err}");
                Theme::default()
            }
        }
    }

    /// Persists `theme`. Failures only cost durability, so they are logged and dropped.
    pub fn save(&self, theme: Theme) {
        if let Err(err) = self.store.write(THEME_KEY, theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
    }
}

/// Flips `current`, persists the result and returns it for the caller to apply.
pub fn toggle_theme<S: PreferenceStore>(current: Theme, preference: &ThemePreference<S>) -> Theme {
    let next = current.toggled();
    preference.save(next);
    next
}

/// The theme on screen, tracked in memory instead of read back from the page.
pub struct ThemeSwitch<S> {
    current: Theme,
    preference: ThemePreference<S>,
}

impl<S: PreferenceStore> ThemeSwitch<S> {
    pub fn new(preference: ThemePreference<S>) -> Self {
        let current = preference.load();
        Self {
            current,
            preference,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// One click: flips, persists, and returns the theme to apply.
    pub fn toggle(&mut self) -> Theme {
        self.current = toggle_theme(self.current, &self.preference);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap};

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct DisabledStore;

    impl PreferenceStore for DisabledStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteRejected {
                key: key.to_string(),
            })
        }
    }

    #[test]
    fn load_defaults_to_light_without_prior_save() {
        let preference = ThemePreference::new(MemoryStore::default());

        assert_eq!(preference.load(), Theme::Light);
    }

    #[test]
    fn saved_dark_theme_round_trips() {
        let preference = ThemePreference::new(MemoryStore::default());

        preference.save(Theme::Dark);

        assert_eq!(preference.load(), Theme::Dark);
    }

    #[test]
    fn unknown_stored_value_falls_back_to_light() {
        let store = MemoryStore::default();
        store
            .write(THEME_KEY, "sepia")
            .expect("memory store accepts writes");
        let preference = ThemePreference::new(store);

        assert_eq!(preference.load(), Theme::Light);
    }

    #[test]
    fn toggling_twice_restores_and_persists_the_start_state() {
        for start in [Theme::Light, Theme::Dark] {
            let preference = ThemePreference::new(MemoryStore::default());

            let once = toggle_theme(start, &preference);
            assert_eq!(once, start.toggled());
            assert_eq!(preference.load(), once);

            let twice = toggle_theme(once, &preference);
            assert_eq!(twice, start);
            assert_eq!(preference.load(), start);
        }
    }

    #[test]
    fn toggle_still_flips_when_storage_is_disabled() {
        let preference = ThemePreference::new(DisabledStore);

        assert_eq!(toggle_theme(Theme::Light, &preference), Theme::Dark);
        assert_eq!(preference.load(), Theme::Light);
    }

    #[test]
    fn icon_and_label_follow_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }

    #[test]
    fn back_to_back_clicks_each_flip_the_theme() {
        let mut switch = ThemeSwitch::new(ThemePreference::new(MemoryStore::default()));
        assert_eq!(switch.current(), Theme::Light);

        assert_eq!(switch.toggle(), Theme::Dark);
        assert_eq!(switch.toggle(), Theme::Light);

        assert_eq!(switch.current(), Theme::Light);
        assert_eq!(switch.preference.load(), Theme::Light);
    }

    #[test]
    fn switch_starts_from_the_stored_theme() {
        let preference = ThemePreference::new(MemoryStore::default());
        preference.save(Theme::Dark);

        let mut switch = ThemeSwitch::new(preference);

        assert_eq!(switch.current(), Theme::Dark);
        assert_eq!(switch.toggle(), Theme::Light);
        assert_eq!(switch.preference.load(), Theme::Light);
    }

    #[test]
    fn switch_keeps_flipping_without_storage() {
        let mut switch = ThemeSwitch::new(ThemePreference::new(DisabledStore));

        assert_eq!(switch.toggle(), Theme::Dark);
        assert_eq!(switch.toggle(), Theme::Light);
        assert_eq!(switch.toggle(), Theme::Dark);
    }
}

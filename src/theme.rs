use std::fmt;
use std::str::FromStr;

/// Local-storage key the preference is persisted under.
pub const STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System if system_prefers_dark => ResolvedTheme::Dark,
            ThemePreference::System => ResolvedTheme::Light,
        }
    }

    /// Preference chosen by flipping the dark-mode switch. The switch always
    /// pins an explicit theme.
    pub fn from_switch(dark: bool) -> Self {
        if dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

impl ResolvedTheme {
    pub fn is_dark(self) -> bool {
        self == ResolvedTheme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Key-value persistence for the theme preference.
pub trait ThemeStore {
    /// Stored preference, or [`ThemePreference::System`] when nothing usable
    /// has been stored.
    fn load(&self) -> ThemePreference;
    fn save(&mut self, preference: ThemePreference);
}

/// In-memory store, used when the browser refuses local storage.
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    #[cfg(test)]
    pub fn with_raw(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> ThemePreference {
        self.value
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    fn save(&mut self, preference: ThemePreference) {
        self.value = Some(preference.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_system() {
        assert_eq!(MemoryThemeStore::default().load(), ThemePreference::System);
    }

    #[test]
    fn garbage_falls_back_to_system() {
        assert_eq!(MemoryThemeStore::with_raw("sepia").load(), ThemePreference::System);
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryThemeStore::default();
        store.save(ThemePreference::Dark);
        assert_eq!(store.load(), ThemePreference::Dark);
    }

    #[test]
    fn system_follows_media_query() {
        assert_eq!(ThemePreference::System.resolve(true), ResolvedTheme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), ResolvedTheme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), ResolvedTheme::Light);
    }

    #[test]
    fn only_system_preference_tracks_scheme_changes() {
        let before = false;
        let after = true;
        assert_ne!(
            ThemePreference::System.resolve(before),
            ThemePreference::System.resolve(after)
        );
        for pinned in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(pinned.resolve(before), pinned.resolve(after));
        }
    }

    #[test]
    fn switch_pins_explicit_theme() {
        assert_eq!(ThemePreference::from_switch(true), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_switch(false), ThemePreference::Light);
    }

    #[test]
    fn stored_names_round_trip() {
        for preference in [ThemePreference::Light, ThemePreference::Dark, ThemePreference::System] {
            let parsed: ThemePreference = preference.as_str().parse().unwrap();
            assert_eq!(parsed, preference);
        }
        assert_eq!(" dark\n".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
    }
}

use web_sys::{MediaQueryList, Storage};

use super::error::{document, window, HostError};
use crate::theme::{ResolvedTheme, ThemePreference, ThemeStore, STORAGE_KEY};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Theme preference persisted in `localStorage`.
pub struct LocalStorageThemeStore {
    storage: Storage,
}

impl LocalStorageThemeStore {
    pub fn open() -> Result<Self, HostError> {
        let storage = window()?
            .local_storage()?
            .ok_or(HostError::Unavailable("local storage"))?;
        Ok(Self { storage })
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> ThemePreference {
        match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring stored theme {:?}", e);
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                log::warn!("Failed to read theme preference: {:?}", e);
                ThemePreference::default()
            }
        }
    }

    fn save(&mut self, preference: ThemePreference) {
        if let Err(e) = self.storage.set_item(STORAGE_KEY, preference.as_str()) {
            log::warn!("Failed to persist theme preference: {:?}", e);
        }
    }
}

/// Opens local storage, falling back to memory when the browser blocks it.
pub fn theme_store() -> Box<dyn ThemeStore> {
    match LocalStorageThemeStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("Theme preference will not persist: {}", e);
            Box::new(crate::theme::MemoryThemeStore::default())
        }
    }
}

/// The OS colour-scheme query. It fires `change` when the user switches
/// between light and dark.
pub fn dark_scheme_query() -> Result<MediaQueryList, HostError> {
    window()?
        .match_media(DARK_QUERY)?
        .ok_or(HostError::Unavailable("colour scheme media query"))
}

pub fn system_prefers_dark() -> bool {
    dark_scheme_query().map(|query| query.matches()).unwrap_or(false)
}

/// Marks the document root with the resolved theme so the global styles
/// pick it up.
pub fn apply_theme(theme: ResolvedTheme) -> Result<(), HostError> {
    let root = document()?
        .document_element()
        .ok_or(HostError::Unavailable("document element"))?;
    root.set_attribute("data-theme", theme.as_str())?;
    Ok(())
}

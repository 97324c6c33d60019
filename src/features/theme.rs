use crate::consent::{ConsentCategory, ConsentStore};
use crate::storage::KeyValueStorage;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Storage key the theme preference lives under.
pub const THEME_STORAGE_KEY: &str = "ncw-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => anyhow::bail!("unknown theme '{other}' (expected light or dark)"),
        }
    }
}

/// Where a theme choice ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ThemePersistence {
    Persisted,
    SessionOnly,
}

/// Theme persistence gated on the `preferences` category.
///
/// Without that consent the theme is kept for the session only, and any
/// previously persisted value is removed when consent is withdrawn.
pub struct ThemeGate {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    session: Option<Theme>,
}

impl ThemeGate {
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            session: None,
        }
    }

    /// Session choice first, then the persisted one if consent allows
    /// reading it.
    pub fn current(&self, store: &ConsentStore) -> Option<Theme> {
        if self.session.is_some() {
            return self.session;
        }
        if !store.is_category_enabled(ConsentCategory::Preferences) {
            return None;
        }
        match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw.parse().ok(),
            Ok(None) => None,
            Err(e) => {
                debug!(error = %e, "theme storage unreadable");
                None
            }
        }
    }

    pub fn set(&mut self, store: &ConsentStore, theme: Theme) -> ThemePersistence {
        self.session = Some(theme);
        if !store.is_category_enabled(ConsentCategory::Preferences) {
            debug!(theme = %theme, "preferences not granted; theme kept for session");
            return ThemePersistence::SessionOnly;
        }
        match self.storage.set(&self.key, &theme.to_string()) {
            Ok(()) => ThemePersistence::Persisted,
            Err(e) => {
                warn!(error = %e, "failed to persist theme");
                ThemePersistence::SessionOnly
            }
        }
    }

    /// Bring persisted data in line with current consent. Call after every
    /// consent change.
    pub fn apply_consent(&self, store: &ConsentStore) {
        if store.is_category_enabled(ConsentCategory::Preferences) {
            return;
        }
        if let Err(e) = self.storage.remove(&self.key) {
            warn!(error = %e, "failed to remove persisted theme");
        }
    }
}

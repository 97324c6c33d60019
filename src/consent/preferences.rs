use super::category::ConsentCategory;
use serde::{Deserialize, Serialize};

/// Per-category consent flags.
///
/// `necessary` is not stored: it always reads `true` and writes to it are
/// ignored, so no construction or mutation path can clear it. The serialized
/// form always carries all four keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "PreferencesWire", into = "PreferencesWire")]
pub struct ConsentPreferences {
    preferences: bool,
    analytics: bool,
    marketing: bool,
}

impl ConsentPreferences {
    /// Only `necessary` granted. This is the undecided default.
    #[must_use]
    pub const fn necessary_only() -> Self {
        Self {
            preferences: false,
            analytics: false,
            marketing: false,
        }
    }

    #[must_use]
    pub const fn all_granted() -> Self {
        Self {
            preferences: true,
            analytics: true,
            marketing: true,
        }
    }

    /// Build from an arbitrary selection. Missing categories default to
    /// denied; an entry for `necessary` is ignored whatever its value.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (ConsentCategory, bool)>,
    {
        entries
            .into_iter()
            .fold(Self::necessary_only(), |prefs, (category, enabled)| {
                prefs.with(category, enabled)
            })
    }

    #[must_use]
    pub const fn get(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Preferences => self.preferences,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// Set a category. Returns `true` when the stored value changed.
    /// Setting `necessary` is a no-op.
    pub fn set(&mut self, category: ConsentCategory, enabled: bool) -> bool {
        let slot = match category {
            ConsentCategory::Necessary => return false,
            ConsentCategory::Preferences => &mut self.preferences,
            ConsentCategory::Analytics => &mut self.analytics,
            ConsentCategory::Marketing => &mut self.marketing,
        };
        let changed = *slot != enabled;
        *slot = enabled;
        changed
    }

    #[must_use]
    pub fn with(mut self, category: ConsentCategory, enabled: bool) -> Self {
        self.set(category, enabled);
        self
    }

    /// Flip a category, returning its new value. `necessary` stays `true`.
    pub fn toggle(&mut self, category: ConsentCategory) -> bool {
        let next = !self.get(category);
        self.set(category, next);
        self.get(category)
    }

    /// Granted categories in catalog order (always starts with `necessary`).
    pub fn granted(&self) -> impl Iterator<Item = ConsentCategory> + '_ {
        ConsentCategory::ALL
            .into_iter()
            .filter(move |category| self.get(*category))
    }

    #[must_use]
    pub const fn is_necessary_only(&self) -> bool {
        !self.preferences && !self.analytics && !self.marketing
    }
}

/// Exact persisted shape of the preferences object: four boolean keys, no
/// more, no fewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PreferencesWire {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub preferences: bool,
}

impl From<PreferencesWire> for ConsentPreferences {
    fn from(wire: PreferencesWire) -> Self {
        Self {
            preferences: wire.preferences,
            analytics: wire.analytics,
            marketing: wire.marketing,
        }
    }
}

impl From<ConsentPreferences> for PreferencesWire {
    fn from(prefs: ConsentPreferences) -> Self {
        Self {
            necessary: true,
            analytics: prefs.analytics,
            marketing: prefs.marketing,
            preferences: prefs.preferences,
        }
    }
}

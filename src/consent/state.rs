use super::category::ConsentCategory;
use super::preferences::ConsentPreferences;
use super::record::ConsentRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which consent surface is currently presented. At most one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Visibility {
    #[default]
    None,
    Banner,
    Editor,
}

/// In-memory consent state, owned by [`ConsentStore`](super::ConsentStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentState {
    pub has_consented: bool,
    pub preferences: ConsentPreferences,
    pub consent_timestamp: Option<DateTime<Utc>>,
    pub visibility: Visibility,
}

impl ConsentState {
    /// No decision on record; ask with the banner.
    #[must_use]
    pub const fn undecided() -> Self {
        Self {
            has_consented: false,
            preferences: ConsentPreferences::necessary_only(),
            consent_timestamp: None,
            visibility: Visibility::Banner,
        }
    }

    /// A trusted record restored on startup. Nothing is shown.
    #[must_use]
    pub fn from_record(record: &ConsentRecord) -> Self {
        Self {
            has_consented: true,
            preferences: record.preferences,
            consent_timestamp: Some(record.consent_timestamp),
            visibility: Visibility::None,
        }
    }

    #[must_use]
    pub const fn is_banner_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Banner)
    }

    #[must_use]
    pub const fn is_editor_visible(&self) -> bool {
        matches!(self.visibility, Visibility::Editor)
    }

    #[must_use]
    pub const fn is_category_enabled(&self, category: ConsentCategory) -> bool {
        self.preferences.get(category)
    }

    #[must_use]
    pub fn status(&self) -> ConsentStatus {
        ConsentStatus {
            has_consented: self.has_consented,
            analytics: self.preferences.get(ConsentCategory::Analytics),
            marketing: self.preferences.get(ConsentCategory::Marketing),
            preferences: self.preferences.get(ConsentCategory::Preferences),
            consent_timestamp: self.consent_timestamp,
        }
    }
}

impl Default for ConsentState {
    fn default() -> Self {
        Self::undecided()
    }
}

/// Read-only snapshot for features that need more than one bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentStatus {
    pub has_consented: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub preferences: bool,
    pub consent_timestamp: Option<DateTime<Utc>>,
}

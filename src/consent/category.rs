use crate::error::CategoryError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A bucket of data processing a visitor can consent to.
///
/// `Necessary` is structurally distinguished: it is always granted and no
/// code path can revoke it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConsentCategory {
    Necessary,
    Preferences,
    Analytics,
    Marketing,
}

impl ConsentCategory {
    /// Every category, in catalog order.
    pub const ALL: [Self; 4] = [
        Self::Necessary,
        Self::Preferences,
        Self::Analytics,
        Self::Marketing,
    ];

    /// Categories a visitor may toggle.
    pub const OPTIONAL: [Self; 3] = [Self::Preferences, Self::Analytics, Self::Marketing];

    #[must_use]
    pub const fn is_required(self) -> bool {
        matches!(self, Self::Necessary)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Necessary => "necessary",
            Self::Preferences => "preferences",
            Self::Analytics => "analytics",
            Self::Marketing => "marketing",
        }
    }
}

impl FromStr for ConsentCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| CategoryError::Unknown(s.trim().to_string()))
    }
}

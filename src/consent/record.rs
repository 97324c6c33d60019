use super::preferences::{ConsentPreferences, PreferencesWire};
use crate::error::RecordError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema tag written into every record. Records carrying any other value
/// are discarded wholesale.
pub const CONSENT_SCHEMA_VERSION: &str = "1.0";

/// Storage key the record lives under.
pub const CONSENT_STORAGE_KEY: &str = "ncw-cookie-consent";

/// The persisted consent decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentRecord {
    pub schema_version: String,
    pub preferences: ConsentPreferences,
    pub consent_timestamp: DateTime<Utc>,
}

impl ConsentRecord {
    pub fn new(preferences: ConsentPreferences, consent_timestamp: DateTime<Utc>) -> Self {
        Self {
            schema_version: CONSENT_SCHEMA_VERSION.to_string(),
            preferences,
            consent_timestamp,
        }
    }

    /// Parse and validate a stored record.
    ///
    /// The version is checked before the rest of the shape so stale records
    /// report a mismatch rather than a shape error. Anything other than the
    /// exact layout is rejected; nothing is coerced.
    pub fn parse(raw: &str) -> Result<Self, RecordError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| RecordError::Malformed(e.to_string()))?;

        let Some(object) = value.as_object() else {
            return Err(RecordError::Malformed("record is not a JSON object".into()));
        };
        let version = object
            .get("version")
            .and_then(Value::as_str)
            .ok_or_else(|| RecordError::Malformed("missing string field `version`".into()))?;
        if version != CONSENT_SCHEMA_VERSION {
            return Err(RecordError::VersionMismatch {
                expected: CONSENT_SCHEMA_VERSION.to_string(),
                found: version.to_string(),
            });
        }

        let wire: RecordWire =
            serde_json::from_value(value).map_err(|e| RecordError::Malformed(e.to_string()))?;

        if !wire.preferences.necessary {
            return Err(RecordError::Malformed(
                "`preferences.necessary` must be true".into(),
            ));
        }

        let consent_timestamp = DateTime::parse_from_rfc3339(&wire.consent_date)
            .map_err(|e| RecordError::InvalidDate(format!("{}: {e}", wire.consent_date)))?
            .with_timezone(&Utc);

        Ok(Self {
            schema_version: wire.version,
            preferences: wire.preferences.into(),
            consent_timestamp,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&RecordWire {
            version: self.schema_version.clone(),
            preferences: self.preferences.into(),
            consent_date: format_timestamp(self.consent_timestamp),
        })
    }
}

/// ISO-8601 with millisecond precision and a `Z` suffix.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RecordWire {
    version: String,
    preferences: PreferencesWire,
    consent_date: String,
}

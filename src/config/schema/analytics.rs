use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Measurement id handed to the analytics script (e.g. "G-XXXXXXX").
    /// Analytics never loads without one, whatever the visitor granted.
    #[serde(default)]
    pub measurement_id: Option<String>,
}

impl AnalyticsConfig {
    pub fn measurement_id(&self) -> Option<&str> {
        self.measurement_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

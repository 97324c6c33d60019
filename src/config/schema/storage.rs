use crate::consent::CONSENT_STORAGE_KEY;
use crate::features::THEME_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// "file" | "memory" | "disabled"
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    /// Directory for the file backend. `~` is expanded.
    #[serde(default = "default_storage_path")]
    pub path: String,
    /// Key the consent record is stored under
    #[serde(default = "default_consent_key")]
    pub key: String,
    /// Key the theme preference is stored under
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_storage_backend() -> String {
    "file".into()
}

fn default_storage_path() -> String {
    "~/.ncw-consent/storage".into()
}

fn default_consent_key() -> String {
    CONSENT_STORAGE_KEY.into()
}

fn default_theme_key() -> String {
    THEME_STORAGE_KEY.into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
            key: default_consent_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl StorageConfig {
    pub fn expanded_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.path).to_string())
    }
}

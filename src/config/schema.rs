mod analytics;
mod observability;
mod storage;

pub use analytics::AnalyticsConfig;
pub use observability::ObservabilityConfig;
pub use storage::StorageConfig;

use crate::error::ConfigError;
use crate::storage::validate_key;
use anyhow::{Context, Result};
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// ── Top-level config ──────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());

        Self {
            config_path: home.join(".ncw-consent").join("config.toml"),
            storage: StorageConfig::default(),
            observability: ObservabilityConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.storage.key)
            .with_context(|| format!("storage.key {:?} is not a valid key", self.storage.key))?;
        validate_key(&self.storage.theme_key).with_context(|| {
            format!(
                "storage.theme_key {:?} is not a valid key",
                self.storage.theme_key
            )
        })?;
        if self.storage.key == self.storage.theme_key {
            return Err(ConfigError::Validation(
                "storage.key and storage.theme_key must differ".into(),
            )
            .into());
        }
        if self.storage.backend == "file" && self.storage.path.trim().is_empty() {
            return Err(
                ConfigError::Validation("storage.path must be set for the file backend".into())
                    .into(),
            );
        }
        Ok(())
    }

    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let config_dir = home.join(".ncw-consent");
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create .ncw-consent directory")?;
        }

        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            let config = Self {
                config_path,
                ..Self::default()
            };
            config.validate()?;
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        // Set computed path that is skipped during serialization
        config.config_path = path.to_path_buf();
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to config
    pub fn apply_env_overrides(&mut self) {
        // Storage backend: NCW_CONSENT_STORAGE
        if let Ok(backend) = std::env::var("NCW_CONSENT_STORAGE") {
            if !backend.is_empty() {
                self.storage.backend = backend;
            }
        }

        // Storage directory: NCW_CONSENT_STORAGE_PATH
        if let Ok(path) = std::env::var("NCW_CONSENT_STORAGE_PATH") {
            if !path.is_empty() {
                self.storage.path = path;
            }
        }

        // Analytics measurement id: NCW_CONSENT_MEASUREMENT_ID
        if let Ok(id) = std::env::var("NCW_CONSENT_MEASUREMENT_ID") {
            if !id.is_empty() {
                self.analytics.measurement_id = Some(id);
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        fs::write(&self.config_path, toml_str).with_context(|| {
            format!("Failed to write config file: {}", self.config_path.display())
        })?;
        Ok(())
    }
}

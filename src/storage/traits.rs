use crate::error::StorageError;

/// String key-value primitive the consent core persists through.
///
/// Mirrors the browser's local storage contract: values are opaque strings,
/// a missing key reads as `None`, and removing a missing key succeeds.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Human-readable name of this backend
    fn name(&self) -> &str;
}

/// Keys become file names for the file backend, so keep them boring.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.len() <= 128
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

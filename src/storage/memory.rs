use super::traits::{KeyValueStorage, validate_key};
use crate::error::StorageError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Process-local storage. Clones share the same map, which is how tests
/// simulate a reload: build a second store over a clone of the first one's
/// storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any write that would push the total stored bytes past `limit`,
    /// like a browser's per-origin quota.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota_bytes: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let bytes = others + key.len() + value.len();
            if bytes > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    bytes,
                    limit,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Storage that refuses every operation, as in a locked-down browser
/// context with storage disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledStorage;

impl KeyValueStorage for DisabledStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

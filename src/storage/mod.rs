pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileStorage;
pub use memory::{DisabledStorage, MemoryStorage};
pub use traits::{KeyValueStorage, validate_key};

use crate::config::StorageConfig;
use std::sync::Arc;

/// Factory: create the storage backend named in config
pub fn create_storage(config: &StorageConfig) -> Arc<dyn KeyValueStorage> {
    match config.backend.as_str() {
        "file" => Arc::new(FileStorage::new(config.expanded_path())),
        "memory" => Arc::new(MemoryStorage::new()),
        "disabled" | "none" => Arc::new(DisabledStorage),
        _ => {
            tracing::warn!(
                "Unknown storage backend '{}', falling back to memory",
                config.backend
            );
            Arc::new(MemoryStorage::new())
        }
    }
}

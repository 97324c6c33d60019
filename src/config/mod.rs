pub mod schema;

pub use schema::{AnalyticsConfig, Config, ObservabilityConfig, StorageConfig};

//! Consent management core: categories, preferences, the persisted record,
//! and the store that owns canonical state.

pub mod catalog;
pub mod category;
pub mod clock;
pub mod preferences;
pub mod record;
pub mod state;
pub mod store;

pub use catalog::{CategoryInfo, catalog, category_info};
pub use category::ConsentCategory;
pub use clock::{Clock, ManualClock, SystemClock};
pub use preferences::ConsentPreferences;
pub use record::{CONSENT_SCHEMA_VERSION, CONSENT_STORAGE_KEY, ConsentRecord, format_timestamp};
pub use state::{ConsentState, ConsentStatus, Visibility};
pub use store::{ConsentStore, load_initial_state};

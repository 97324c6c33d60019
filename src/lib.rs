#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::unnecessary_literal_bound,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod config;
pub mod consent;
pub mod error;
pub mod features;
#[doc(hidden)]
pub mod observability;
pub mod storage;
pub mod surfaces;
pub mod ui;

pub use config::Config;
pub use consent::{
    ConsentCategory, ConsentPreferences, ConsentRecord, ConsentState, ConsentStatus,
    ConsentStore, Visibility,
};
pub use error::{CategoryError, ConfigError, RecordError, StorageError};

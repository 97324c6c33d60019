//! Downstream features that act only when the visitor allowed them.

pub mod analytics;
pub mod theme;

pub use analytics::{
    ANALYTICS_SCRIPT_ID, AnalyticsAction, AnalyticsBootstrap, AnalyticsScript, BlockReason,
    ConsentSignal, DryRunLoader, ScriptLoader,
};
pub use theme::{THEME_STORAGE_KEY, Theme, ThemeGate, ThemePersistence};

use super::traits::{ConsentEvent, Observer};
use crate::consent::{ConsentCategory, ConsentState};
use tracing::{info, warn};

/// Observer that reports every transition through tracing
pub struct LogObserver;

impl LogObserver {
    pub fn new() -> Self {
        Self
    }
}

impl Observer for LogObserver {
    fn record_event(&self, event: &ConsentEvent, state: &ConsentState) {
        let prefs = &state.preferences;
        match event {
            ConsentEvent::PersistenceFailed { operation, message } => {
                warn!(operation = %operation, error = %message, "{}", event.name());
            }
            ConsentEvent::Undecided { reason } => {
                info!(reason = %reason, visibility = %state.visibility, "{}", event.name());
            }
            _ if event.is_decision() || matches!(event, ConsentEvent::Restored) => {
                info!(
                    has_consented = state.has_consented,
                    preferences = prefs.get(ConsentCategory::Preferences),
                    analytics = prefs.get(ConsentCategory::Analytics),
                    marketing = prefs.get(ConsentCategory::Marketing),
                    visibility = %state.visibility,
                    "{}",
                    event.name()
                );
            }
            _ => {
                info!(visibility = %state.visibility, "{}", event.name());
            }
        }
    }

    fn name(&self) -> &str {
        "log"
    }
}

use super::category::ConsentCategory;
use super::clock::Clock;
use super::preferences::ConsentPreferences;
use super::record::{CONSENT_STORAGE_KEY, ConsentRecord};
use super::state::{ConsentState, ConsentStatus, Visibility};
use crate::observability::{ConsentEvent, Observer};
use crate::storage::KeyValueStorage;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Read the persisted decision, or fall back to the undecided default.
///
/// Synchronous and side-effect free beyond the single read. Any failure
/// (missing key, unreadable storage, malformed or stale record) yields the
/// undecided state with the banner requested, together with the reason.
pub fn load_initial_state(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> (ConsentState, ConsentEvent) {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no consent record stored");
            return undecided("no record");
        }
        Err(e) => {
            warn!(key, error = %e, "consent storage unreadable");
            return undecided(&format!("storage unavailable: {e}"));
        }
    };

    match ConsentRecord::parse(&raw) {
        Ok(record) => {
            debug!(key, consent_date = %record.consent_timestamp, "consent record restored");
            (ConsentState::from_record(&record), ConsentEvent::Restored)
        }
        Err(e) => {
            warn!(key, error = %e, "discarding stored consent record");
            undecided(&e.to_string())
        }
    }
}

fn undecided(reason: &str) -> (ConsentState, ConsentEvent) {
    (
        ConsentState::undecided(),
        ConsentEvent::Undecided {
            reason: reason.to_string(),
        },
    )
}

/// Single source of truth for the visitor's consent.
///
/// State is only reachable through the operations below; there are no raw
/// setters. Every mutation that records a decision writes storage before
/// observers are told about it. Write failures are logged and swallowed so
/// every operation returns a valid state.
pub struct ConsentStore {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    key: String,
    observers: Vec<Box<dyn Observer>>,
    state: ConsentState,
}

impl ConsentStore {
    /// Open a store over the default consent key.
    pub fn new(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self::with_key(storage, clock, CONSENT_STORAGE_KEY)
    }

    /// Open a store over `key`, reading the persisted state immediately so the
    /// first state handed out already has the right visibility.
    pub fn with_key(
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let (state, _) = load_initial_state(storage.as_ref(), &key);
        Self {
            storage,
            clock,
            key,
            observers: Vec::new(),
            state,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        debug!(observer = observer.name(), "consent observer subscribed");
        self.observers.push(observer);
    }

    pub fn state(&self) -> &ConsentState {
        &self.state
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    /// Re-read persisted state, as a fresh page load would.
    pub fn initialize(&mut self) -> &ConsentState {
        let (state, event) = load_initial_state(self.storage.as_ref(), &self.key);
        self.state = state;
        self.publish(&event);
        &self.state
    }

    /// Grant every category.
    pub fn accept_all(&mut self) -> &ConsentState {
        self.decide(ConsentPreferences::all_granted(), ConsentEvent::AcceptedAll)
    }

    /// Deny everything except `necessary`.
    pub fn reject_all(&mut self) -> &ConsentState {
        self.decide(ConsentPreferences::necessary_only(), ConsentEvent::RejectedAll)
    }

    /// Record a partial selection. `necessary` is granted whatever the draft
    /// says.
    pub fn save_custom_preferences(&mut self, draft: ConsentPreferences) -> &ConsentState {
        let preferences = draft.with(ConsentCategory::Necessary, true);
        self.decide(preferences, ConsentEvent::SavedCustom)
    }

    /// Present the editor. Legal before or after a decision.
    pub fn show_preferences_panel(&mut self) -> &ConsentState {
        self.state.visibility = Visibility::Editor;
        self.publish(&ConsentEvent::PanelShown);
        &self.state
    }

    /// Hide whichever surface is showing. Records nothing: an undecided
    /// visitor stays undecided and sees the banner again on the next load.
    pub fn hide_modals(&mut self) -> &ConsentState {
        self.state.visibility = Visibility::None;
        self.publish(&ConsentEvent::Dismissed);
        &self.state
    }

    /// Forget the stored decision and ask again.
    pub fn reset_consent(&mut self) -> &ConsentState {
        if let Err(e) = self.storage.remove(&self.key) {
            warn!(key = %self.key, error = %e, "failed to clear consent record");
            self.publish(&ConsentEvent::PersistenceFailed {
                operation: "remove".into(),
                message: e.to_string(),
            });
        }
        self.state = ConsentState::undecided();
        info!(key = %self.key, "consent reset");
        self.publish(&ConsentEvent::Reset);
        &self.state
    }

    /// The gate every downstream feature checks before acting.
    pub fn is_category_enabled(&self, category: ConsentCategory) -> bool {
        self.state.is_category_enabled(category)
    }

    pub fn consent_status(&self) -> ConsentStatus {
        self.state.status()
    }

    fn decide(&mut self, preferences: ConsentPreferences, event: ConsentEvent) -> &ConsentState {
        let record = ConsentRecord::new(preferences, self.clock.now());
        self.persist(&record);

        self.state = ConsentState {
            has_consented: true,
            preferences: record.preferences,
            consent_timestamp: Some(record.consent_timestamp),
            visibility: Visibility::None,
        };
        info!(
            event = event.name(),
            granted = ?record.preferences.granted().collect::<Vec<_>>(),
            "consent decision recorded"
        );
        self.publish(&event);
        &self.state
    }

    fn persist(&self, record: &ConsentRecord) {
        let result = record
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(&self.key, &json)
                    .map_err(|e| e.to_string())
            });

        if let Err(message) = result {
            warn!(
                key = %self.key,
                backend = self.storage.name(),
                error = %message,
                "consent decision not persisted; it will be asked for again next visit"
            );
            self.publish(&ConsentEvent::PersistenceFailed {
                operation: "set".into(),
                message,
            });
        }
    }

    fn publish(&self, event: &ConsentEvent) {
        for observer in &self.observers {
            observer.record_event(event, &self.state);
        }
    }
}

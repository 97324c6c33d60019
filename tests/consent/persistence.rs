use crate::recorder::Recorder;
use ncw_consent::consent::{CONSENT_STORAGE_KEY, SystemClock, load_initial_state};
use ncw_consent::observability::ConsentEvent;
use ncw_consent::storage::{DisabledStorage, FileStorage, KeyValueStorage, MemoryStorage};
use ncw_consent::{ConsentCategory, ConsentPreferences, ConsentStore, Visibility};
use std::sync::Arc;
use tempfile::TempDir;

fn record_with_version(version: &str) -> String {
    format!(
        r#"{{"version":"{version}","preferences":{{"necessary":true,"analytics":true,"marketing":true,"preferences":true}},"consentDate":"2025-01-01T00:00:00.000Z"}}"#
    )
}

#[test]
fn stale_version_shows_banner() {
    let storage = MemoryStorage::new();
    storage
        .set(CONSENT_STORAGE_KEY, &record_with_version("0.9"))
        .unwrap();

    let (state, event) = load_initial_state(&storage, CONSENT_STORAGE_KEY);
    assert!(!state.has_consented);
    assert_eq!(state.visibility, Visibility::Banner);
    assert!(!state.is_category_enabled(ConsentCategory::Analytics));
    assert!(matches!(event, ConsentEvent::Undecided { reason } if reason.contains("0.9")));
}

#[test]
fn current_version_restores() {
    let storage = MemoryStorage::new();
    storage
        .set(CONSENT_STORAGE_KEY, &record_with_version("1.0"))
        .unwrap();

    let (state, event) = load_initial_state(&storage, CONSENT_STORAGE_KEY);
    assert_eq!(event, ConsentEvent::Restored);
    assert!(state.has_consented);
    assert!(state.is_category_enabled(ConsentCategory::Marketing));
}

#[test]
fn corrupt_values_fall_back_to_undecided() {
    let corrupt = [
        "",
        "not json",
        "[]",
        "null",
        r#"{"version":1.0}"#,
        r#"{"version":"1.0","preferences":{"necessary":true},"consentDate":"2025-01-01T00:00:00.000Z"}"#,
        r#"{"version":"1.0","preferences":{"necessary":true,"analytics":"yes","marketing":false,"preferences":false},"consentDate":"2025-01-01T00:00:00.000Z"}"#,
        r#"{"version":"1.0","preferences":{"necessary":true,"analytics":false,"marketing":false,"preferences":false},"consentDate":"yesterday"}"#,
    ];
    for raw in corrupt {
        let storage = MemoryStorage::new();
        storage.set(CONSENT_STORAGE_KEY, raw).unwrap();
        let store = ConsentStore::new(Arc::new(storage), Arc::new(SystemClock));
        assert!(store.state().is_banner_visible(), "accepted {raw:?}");
        assert!(!store.state().has_consented);
    }
}

#[test]
fn stored_necessary_false_is_discarded() {
    let storage = MemoryStorage::new();
    storage
        .set(
            CONSENT_STORAGE_KEY,
            r#"{"version":"1.0","preferences":{"necessary":false,"analytics":false,"marketing":false,"preferences":true},"consentDate":"2025-01-01T00:00:00.000Z"}"#,
        )
        .unwrap();

    let (state, event) = load_initial_state(&storage, CONSENT_STORAGE_KEY);
    assert!(matches!(event, ConsentEvent::Undecided { reason } if reason.contains("necessary")));
    assert!(!state.has_consented);
    assert!(state.is_banner_visible());
    assert!(state.is_category_enabled(ConsentCategory::Necessary));
    assert!(!state.is_category_enabled(ConsentCategory::Preferences));
}

#[test]
fn failed_write_keeps_decision_for_session_only() {
    let storage = MemoryStorage::with_quota(8);
    let recorder = Recorder::new(&storage, CONSENT_STORAGE_KEY);
    let mut store = ConsentStore::new(Arc::new(storage.clone()), Arc::new(SystemClock));
    store.subscribe(Box::new(recorder.clone()));

    let state = store.accept_all();
    assert!(state.has_consented);
    assert_eq!(state.visibility, Visibility::None);
    assert!(store.is_category_enabled(ConsentCategory::Analytics));
    assert_eq!(
        recorder.event_names(),
        ["consent.persistence_failed", "consent.accepted_all"]
    );

    let reloaded = ConsentStore::new(Arc::new(storage), Arc::new(SystemClock));
    assert!(reloaded.state().is_banner_visible());
}

#[test]
fn disabled_storage_never_fails_an_operation() {
    let mut store = ConsentStore::new(Arc::new(DisabledStorage), Arc::new(SystemClock));
    assert!(store.state().is_banner_visible());

    assert!(store.reject_all().has_consented);
    assert_eq!(store.show_preferences_panel().visibility, Visibility::Editor);
    assert!(!store.reset_consent().has_consented);
    assert!(store.initialize().is_banner_visible());
}

#[test]
fn file_storage_survives_a_new_process() {
    let tmp = TempDir::new().unwrap();
    let draft = ConsentPreferences::necessary_only()
        .with(ConsentCategory::Analytics, true)
        .with(ConsentCategory::Preferences, true);

    {
        let mut store = ConsentStore::new(
            Arc::new(FileStorage::new(tmp.path())),
            Arc::new(SystemClock),
        );
        store.save_custom_preferences(draft);
    }

    let raw = std::fs::read_to_string(tmp.path().join(CONSENT_STORAGE_KEY)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["version"], "1.0");
    assert_eq!(json["preferences"]["necessary"], true);
    assert_eq!(json["preferences"]["marketing"], false);

    let store = ConsentStore::new(
        Arc::new(FileStorage::new(tmp.path())),
        Arc::new(SystemClock),
    );
    assert_eq!(store.state().preferences, draft);
    assert!(!store.state().is_banner_visible());
}

#[test]
fn custom_key_isolates_records() {
    let storage = MemoryStorage::new();
    let mut site_a =
        ConsentStore::with_key(Arc::new(storage.clone()), Arc::new(SystemClock), "site-a");
    site_a.accept_all();

    let site_b = ConsentStore::with_key(Arc::new(storage.clone()), Arc::new(SystemClock), "site-b");
    assert!(site_b.state().is_banner_visible());
    assert!(storage.get(CONSENT_STORAGE_KEY).unwrap().is_none());
}

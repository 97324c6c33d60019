use crate::recorder::Recorder;
use chrono::{Duration, TimeZone, Utc};
use ncw_consent::consent::{CONSENT_STORAGE_KEY, ManualClock};
use ncw_consent::storage::{KeyValueStorage, MemoryStorage};
use ncw_consent::{ConsentCategory, ConsentPreferences, ConsentStore, Visibility};
use std::sync::Arc;

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2025, 9, 1, 8, 30, 0).unwrap(),
    ))
}

fn open(storage: &MemoryStorage) -> ConsentStore {
    ConsentStore::new(Arc::new(storage.clone()), clock())
}

type Operation = (&'static str, fn(&mut ConsentStore));

fn operations() -> [Operation; 7] {
    [
        ("accept_all", |s: &mut ConsentStore| {
            s.accept_all();
        }),
        ("reject_all", |s: &mut ConsentStore| {
            s.reject_all();
        }),
        ("save_custom", |s: &mut ConsentStore| {
            s.save_custom_preferences(
                ConsentPreferences::necessary_only()
                    .with(ConsentCategory::Necessary, false)
                    .with(ConsentCategory::Analytics, true),
            );
        }),
        ("show_panel", |s: &mut ConsentStore| {
            s.show_preferences_panel();
        }),
        ("hide_modals", |s: &mut ConsentStore| {
            s.hide_modals();
        }),
        ("reset", |s: &mut ConsentStore| {
            s.reset_consent();
        }),
        ("initialize", |s: &mut ConsentStore| {
            s.initialize();
        }),
    ]
}

#[test]
fn necessary_stays_granted_through_any_sequence() {
    let operations = operations();
    let mut cases = 0;
    for first in operations {
        for second in operations {
            for third in operations {
                let storage = MemoryStorage::new();
                let mut store = open(&storage);
                let sequence = [first, second, third];

                assert!(store.is_category_enabled(ConsentCategory::Necessary));
                for (step, (name, operation)) in sequence.iter().enumerate() {
                    operation(&mut store);
                    let names: Vec<_> = sequence.iter().map(|(n, _)| *n).collect();
                    assert!(
                        store.is_category_enabled(ConsentCategory::Necessary),
                        "necessary cleared by {name} at step {step} of {names:?}"
                    );
                }

                let reloaded = open(&storage);
                assert!(reloaded.is_category_enabled(ConsentCategory::Necessary));
                cases += 1;
            }
        }
    }
    assert_eq!(cases, 343);
}

#[test]
fn accept_then_reload_restores_without_banner() {
    let storage = MemoryStorage::new();
    open(&storage).accept_all();

    let mut reloaded = open(&storage);
    let state = reloaded.initialize();
    assert!(state.has_consented);
    assert_eq!(state.visibility, Visibility::None);
    for category in ConsentCategory::ALL {
        assert!(state.is_category_enabled(category));
    }
}

#[test]
fn reject_then_reload_keeps_only_necessary() {
    let storage = MemoryStorage::new();
    open(&storage).reject_all();

    let reloaded = open(&storage);
    let state = reloaded.state();
    assert!(state.has_consented);
    assert!(!state.is_banner_visible());
    assert_eq!(state.preferences.granted().count(), 1);
    assert!(!reloaded.is_category_enabled(ConsentCategory::Analytics));
}

#[test]
fn marketing_is_off_until_granted() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage);
    assert!(!store.is_category_enabled(ConsentCategory::Marketing));

    store.save_custom_preferences(
        ConsentPreferences::necessary_only().with(ConsentCategory::Analytics, true),
    );
    assert!(!store.is_category_enabled(ConsentCategory::Marketing));

    store.accept_all();
    assert!(store.is_category_enabled(ConsentCategory::Marketing));
}

#[test]
fn every_custom_selection_round_trips() {
    for mask in 0u8..8 {
        let preferences = mask & 1 != 0;
        let analytics = mask & 2 != 0;
        let marketing = mask & 4 != 0;
        let draft = ConsentPreferences::from_entries([
            (ConsentCategory::Preferences, preferences),
            (ConsentCategory::Analytics, analytics),
            (ConsentCategory::Marketing, marketing),
        ]);

        let storage = MemoryStorage::new();
        let saved = open(&storage).save_custom_preferences(draft).clone();
        let restored = open(&storage).state().clone();

        assert_eq!(restored.preferences, draft, "mask {mask:03b}");
        assert_eq!(restored.consent_timestamp, saved.consent_timestamp);
        assert_eq!(
            restored.is_category_enabled(ConsentCategory::Marketing),
            marketing
        );
    }
}

#[test]
fn later_decision_overwrites_earlier_one() {
    let storage = MemoryStorage::new();
    let clock = clock();
    let mut store = ConsentStore::new(Arc::new(storage.clone()), clock.clone());

    let first = store.accept_all().consent_timestamp;
    clock.advance(Duration::minutes(5));
    let second = store.reject_all().consent_timestamp;
    assert!(second > first);

    let restored = open(&storage);
    assert_eq!(restored.state().consent_timestamp, second);
    assert!(!restored.is_category_enabled(ConsentCategory::Preferences));
}

#[test]
fn observers_see_state_only_after_it_is_persisted() {
    let storage = MemoryStorage::new();
    let recorder = Recorder::new(&storage, CONSENT_STORAGE_KEY);
    let mut store = open(&storage);
    store.subscribe(Box::new(recorder.clone()));

    store.save_custom_preferences(
        ConsentPreferences::necessary_only().with(ConsentCategory::Preferences, true),
    );

    let seen = recorder.seen();
    assert_eq!(seen.len(), 1);
    let stored = seen[0].stored.as_deref().expect("record written before publish");
    let record = ncw_consent::ConsentRecord::parse(stored).unwrap();
    assert_eq!(record.preferences, seen[0].state.preferences);
    assert_eq!(
        Some(record.consent_timestamp),
        seen[0].state.consent_timestamp
    );
}

#[test]
fn event_stream_follows_operations() {
    let storage = MemoryStorage::new();
    let recorder = Recorder::new(&storage, CONSENT_STORAGE_KEY);
    let mut store = open(&storage);
    store.subscribe(Box::new(recorder.clone()));

    store.initialize();
    store.show_preferences_panel();
    store.hide_modals();
    store.accept_all();
    store.reset_consent();

    assert_eq!(
        recorder.event_names(),
        [
            "consent.undecided",
            "consent.panel_shown",
            "consent.dismissed",
            "consent.accepted_all",
            "consent.reset",
        ]
    );
    assert_eq!(storage.get(CONSENT_STORAGE_KEY).unwrap(), None);
}

#[test]
fn dismissing_undecided_banner_records_nothing() {
    let storage = MemoryStorage::new();
    let mut store = open(&storage);
    let state = store.hide_modals();
    assert!(!state.has_consented);
    assert_eq!(state.visibility, Visibility::None);
    assert!(storage.is_empty());

    assert!(open(&storage).state().is_banner_visible());
}

#[test]
fn custom_save_forces_necessary_into_the_record() {
    let storage = MemoryStorage::new();
    let draft = ConsentPreferences::from_entries([
        (ConsentCategory::Necessary, false),
        (ConsentCategory::Analytics, true),
        (ConsentCategory::Marketing, false),
        (ConsentCategory::Preferences, true),
    ]);
    open(&storage).save_custom_preferences(draft);

    let raw = storage.get(CONSENT_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["preferences"]["necessary"], true);
    assert_eq!(json["preferences"]["analytics"], true);
    assert_eq!(json["preferences"]["marketing"], false);
    assert_eq!(json["preferences"]["preferences"], true);
}

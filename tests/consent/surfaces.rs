use ncw_consent::consent::SystemClock;
use ncw_consent::storage::MemoryStorage;
use ncw_consent::surfaces::{Banner, BannerAction, ConsentSurfaces, PreferencesEditor};
use ncw_consent::{ConsentCategory, ConsentStore, Visibility};
use std::sync::Arc;

fn setup() -> (MemoryStorage, ConsentStore, ConsentSurfaces) {
    let storage = MemoryStorage::new();
    let store = ConsentStore::new(Arc::new(storage.clone()), Arc::new(SystemClock));
    let surfaces = ConsentSurfaces::new(store.state());
    (storage, store, surfaces)
}

#[test]
fn banner_and_editor_are_mutually_exclusive() {
    let (_storage, mut store, mut surfaces) = setup();

    for action in BannerAction::ALL {
        store.reset_consent();
        let state = Banner::handle(&mut store, action);
        surfaces.sync(state);
        assert!(!(Banner::is_visible(state) && PreferencesEditor::is_visible(state)));
    }

    let state = store.show_preferences_panel();
    assert_eq!(ConsentSurfaces::active(state), Visibility::Editor);
    assert!(!Banner::is_visible(state));
}

#[test]
fn customize_then_save_records_draft() {
    let (storage, mut store, mut surfaces) = setup();

    let state = Banner::handle(&mut store, BannerAction::Customize);
    surfaces.sync(state);
    surfaces.editor.set(ConsentCategory::Analytics, true);
    surfaces.editor.set(ConsentCategory::Necessary, false);
    let state = surfaces.editor.save(&mut store);

    assert!(state.has_consented);
    assert_eq!(state.visibility, Visibility::None);
    assert!(state.is_category_enabled(ConsentCategory::Necessary));
    assert!(state.is_category_enabled(ConsentCategory::Analytics));
    assert!(!state.is_category_enabled(ConsentCategory::Marketing));
    assert!(!storage.is_empty());
}

#[test]
fn closing_editor_discards_draft() {
    let (_storage, mut store, mut surfaces) = setup();
    store.reject_all();

    surfaces.sync(store.show_preferences_panel());
    surfaces.editor.toggle(ConsentCategory::Marketing);
    assert!(surfaces.editor.draft().get(ConsentCategory::Marketing));
    surfaces.editor.close(&mut store);

    assert!(!store.is_category_enabled(ConsentCategory::Marketing));
    surfaces.sync(store.show_preferences_panel());
    assert!(!surfaces.editor.draft().get(ConsentCategory::Marketing));
}

#[test]
fn draft_follows_decisions_made_while_closed() {
    let (_storage, mut store, mut surfaces) = setup();

    surfaces.sync(store.accept_all());
    assert!(surfaces.editor.draft().get(ConsentCategory::Marketing));

    surfaces.sync(store.reject_all());
    surfaces.sync(store.show_preferences_panel());
    assert!(!surfaces.editor.draft().get(ConsentCategory::Marketing));
    assert!(!surfaces.editor.draft().get(ConsentCategory::Analytics));
}

#[test]
fn editor_rows_lock_necessary() {
    let (_storage, store, surfaces) = setup();
    let rows: Vec<_> = surfaces.editor.rows().collect();
    assert_eq!(rows.len(), 4);

    let necessary = rows
        .iter()
        .find(|row| row.info.category == ConsentCategory::Necessary)
        .unwrap();
    assert!(necessary.locked && necessary.enabled);
    assert!(rows.iter().filter(|row| row.locked).count() == 1);
    assert!(store.state().is_banner_visible());
}

#[test]
fn editor_reachable_after_decision() {
    let (_storage, mut store, mut surfaces) = setup();
    Banner::handle(&mut store, BannerAction::AcceptAll);

    let state = store.show_preferences_panel();
    surfaces.sync(state);
    assert!(state.has_consented);
    assert!(PreferencesEditor::is_visible(state));
    assert!(surfaces.editor.draft().get(ConsentCategory::Analytics));

    surfaces.editor.set(ConsentCategory::Analytics, false);
    let state = surfaces.editor.save(&mut store);
    assert!(!state.is_category_enabled(ConsentCategory::Analytics));
    assert!(state.is_category_enabled(ConsentCategory::Preferences));
}

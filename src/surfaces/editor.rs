use crate::consent::{
    CategoryInfo, ConsentCategory, ConsentPreferences, ConsentState, ConsentStore, catalog,
};

/// One toggle row as the editor presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorRow {
    pub info: &'static CategoryInfo,
    pub enabled: bool,
    /// Required categories render as a locked, always-on toggle
    pub locked: bool,
}

/// The preferences editor and its draft.
///
/// Edits land in the draft only. The draft is re-seeded from canonical state
/// whenever the editor comes into view, and follows canonical state while
/// the editor is closed, so closing without saving discards it and a stale
/// draft is never shown. Visibility itself is read from the store.
#[derive(Debug, Clone)]
pub struct PreferencesEditor {
    draft: ConsentPreferences,
    last_seen_open: bool,
}

impl PreferencesEditor {
    pub fn new(state: &ConsentState) -> Self {
        Self {
            draft: state.preferences,
            last_seen_open: state.is_editor_visible(),
        }
    }

    pub fn is_visible(state: &ConsentState) -> bool {
        state.is_editor_visible()
    }

    /// Observe a published state.
    pub fn sync(&mut self, state: &ConsentState) {
        let open = state.is_editor_visible();
        if !open || !self.last_seen_open {
            self.draft = state.preferences;
        }
        self.last_seen_open = open;
    }

    pub fn draft(&self) -> &ConsentPreferences {
        &self.draft
    }

    pub fn rows(&self) -> impl Iterator<Item = EditorRow> + '_ {
        catalog().iter().map(|info| EditorRow {
            info,
            enabled: self.draft.get(info.category),
            locked: info.required,
        })
    }

    /// Flip a category in the draft. Required categories do not move.
    pub fn toggle(&mut self, category: ConsentCategory) -> bool {
        self.draft.toggle(category)
    }

    pub fn set(&mut self, category: ConsentCategory, enabled: bool) {
        self.draft.set(category, enabled);
    }

    /// Commit the draft.
    pub fn save<'s>(&mut self, store: &'s mut ConsentStore) -> &'s ConsentState {
        let state = store.save_custom_preferences(self.draft);
        self.sync(state);
        state
    }

    /// Accept everything, bypassing the draft.
    pub fn accept_all<'s>(&mut self, store: &'s mut ConsentStore) -> &'s ConsentState {
        let state = store.accept_all();
        self.sync(state);
        state
    }

    /// Reject everything optional, bypassing the draft.
    pub fn reject_all<'s>(&mut self, store: &'s mut ConsentStore) -> &'s ConsentState {
        let state = store.reject_all();
        self.sync(state);
        state
    }

    /// Close without saving; the draft is dropped.
    pub fn close<'s>(&mut self, store: &'s mut ConsentStore) -> &'s ConsentState {
        let state = store.hide_modals();
        self.sync(state);
        state
    }
}

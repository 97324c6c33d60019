//! Banner and preferences editor. Both only read the store's state and
//! route visitor intent back to its operations.

pub mod banner;
pub mod editor;

pub use banner::{Banner, BannerAction};
pub use editor::{EditorRow, PreferencesEditor};

use crate::consent::{ConsentState, Visibility};

/// The surfaces a host renders, kept in step with the store.
#[derive(Debug, Clone)]
pub struct ConsentSurfaces {
    pub editor: PreferencesEditor,
}

impl ConsentSurfaces {
    pub fn new(state: &ConsentState) -> Self {
        Self {
            editor: PreferencesEditor::new(state),
        }
    }

    /// Feed every published state through here.
    pub fn sync(&mut self, state: &ConsentState) {
        self.editor.sync(state);
    }

    /// The single surface to present, if any.
    pub fn active(state: &ConsentState) -> Visibility {
        state.visibility
    }
}

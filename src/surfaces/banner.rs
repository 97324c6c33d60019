use crate::consent::{ConsentState, ConsentStore};

/// What a visitor can do from the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BannerAction {
    AcceptAll,
    RejectAll,
    Customize,
    Dismiss,
}

impl BannerAction {
    pub const ALL: [Self; 4] = [
        Self::AcceptAll,
        Self::RejectAll,
        Self::Customize,
        Self::Dismiss,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AcceptAll => "Accept all",
            Self::RejectAll => "Reject all",
            Self::Customize => "Customize",
            Self::Dismiss => "Not now",
        }
    }
}

/// The dismissible consent banner.
///
/// Holds no state: whether it shows is read from the store every time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Banner;

impl Banner {
    pub const TITLE: &'static str = "We value your privacy";
    pub const MESSAGE: &'static str = "We use cookies to run this site, remember your \
        preferences, understand how it is used and measure our marketing. Choose which \
        categories you allow.";

    pub fn is_visible(state: &ConsentState) -> bool {
        state.is_banner_visible()
    }

    /// Route a banner action to the store.
    pub fn handle(store: &mut ConsentStore, action: BannerAction) -> &ConsentState {
        tracing::debug!(action = %action, "banner action");
        match action {
            BannerAction::AcceptAll => store.accept_all(),
            BannerAction::RejectAll => store.reject_all(),
            BannerAction::Customize => store.show_preferences_panel(),
            BannerAction::Dismiss => store.hide_modals(),
        }
    }
}

use ncw_consent::Config;
use ncw_consent::consent::{ConsentStore, SystemClock};
use ncw_consent::features::{AnalyticsAction, AnalyticsBootstrap, DryRunLoader, ThemeGate};
use ncw_consent::observability::create_observer;
use ncw_consent::storage::create_storage;
use ncw_consent::surfaces::ConsentSurfaces;
use std::sync::Arc;
use tracing::debug;

/// Everything one page load wires together: the store, the surfaces that
/// observe it, and the features gated on it.
pub struct Session {
    pub store: ConsentStore,
    pub surfaces: ConsentSurfaces,
    pub theme: ThemeGate,
    pub analytics: AnalyticsBootstrap<DryRunLoader>,
    pub last_analytics_action: AnalyticsAction,
}

impl Session {
    pub fn open(config: &Config) -> Self {
        let storage = create_storage(&config.storage);
        let mut store = ConsentStore::with_key(
            Arc::clone(&storage),
            Arc::new(SystemClock),
            &config.storage.key,
        );
        store.subscribe(create_observer(&config.observability));
        debug!(
            backend = storage.name(),
            visibility = %store.state().visibility,
            has_consented = store.state().has_consented,
            "consent session opened"
        );

        let surfaces = ConsentSurfaces::new(store.state());
        let theme = ThemeGate::new(storage, &config.storage.theme_key);
        let mut analytics =
            AnalyticsBootstrap::new(DryRunLoader::default(), config.analytics.measurement_id());
        let last_analytics_action = analytics.apply(&store.consent_status());

        Self {
            store,
            surfaces,
            theme,
            analytics,
            last_analytics_action,
        }
    }

    /// Propagate the store's latest state to surfaces and gated features.
    /// Call after every store operation.
    pub fn settle(&mut self) -> AnalyticsAction {
        self.surfaces.sync(self.store.state());
        self.theme.apply_consent(&self.store);
        self.last_analytics_action = self.analytics.apply(&self.store.consent_status());
        self.last_analytics_action
    }
}

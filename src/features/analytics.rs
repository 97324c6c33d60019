use crate::consent::ConsentStatus;
use tracing::{debug, info};

/// Id the analytics script tag is injected under.
pub const ANALYTICS_SCRIPT_ID: &str = "ncw-analytics";

const ANALYTICS_SCRIPT_BASE: &str = "https://www.googletagmanager.com/gtag/js";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ConsentSignal {
    Granted,
    Denied,
}

impl From<bool> for ConsentSignal {
    fn from(granted: bool) -> Self {
        if granted { Self::Granted } else { Self::Denied }
    }
}

/// The script tag the bootstrap asks its loader to inject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyticsScript {
    pub id: String,
    pub src: String,
    pub measurement_id: String,
    pub analytics_storage: ConsentSignal,
    pub ad_storage: ConsentSignal,
}

impl AnalyticsScript {
    fn new(measurement_id: &str, status: &ConsentStatus) -> Self {
        Self {
            id: ANALYTICS_SCRIPT_ID.to_string(),
            src: format!("{ANALYTICS_SCRIPT_BASE}?id={measurement_id}"),
            measurement_id: measurement_id.to_string(),
            analytics_storage: status.analytics.into(),
            ad_storage: status.marketing.into(),
        }
    }
}

/// Whatever actually inserts and removes script tags.
pub trait ScriptLoader {
    fn load(&mut self, script: &AnalyticsScript);

    fn unload(&mut self, id: &str);

    /// Push new consent signals to an already loaded script.
    fn update(&mut self, script: &AnalyticsScript) {
        self.unload(&script.id);
        self.load(script);
    }
}

/// Loader that only remembers what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct DryRunLoader {
    pub loaded: Vec<AnalyticsScript>,
    pub history: Vec<String>,
}

impl ScriptLoader for DryRunLoader {
    fn load(&mut self, script: &AnalyticsScript) {
        self.history.push(format!("load {}", script.src));
        self.loaded.retain(|s| s.id != script.id);
        self.loaded.push(script.clone());
    }

    fn unload(&mut self, id: &str) {
        self.history.push(format!("unload {id}"));
        self.loaded.retain(|s| s.id != id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum BlockReason {
    NoConsent,
    NotConfigured,
}

/// What [`AnalyticsBootstrap::apply`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsAction {
    Loaded,
    Unloaded,
    SignalsUpdated,
    Unchanged,
    Blocked(BlockReason),
}

/// Loads or unloads analytics to match the visitor's consent.
///
/// Call [`apply`](Self::apply) with a fresh status after every consent
/// change; the bootstrap never caches consent itself.
pub struct AnalyticsBootstrap<L: ScriptLoader> {
    loader: L,
    measurement_id: Option<String>,
    active: Option<AnalyticsScript>,
}

impl<L: ScriptLoader> AnalyticsBootstrap<L> {
    pub fn new(loader: L, measurement_id: Option<&str>) -> Self {
        Self {
            loader,
            measurement_id: measurement_id.map(ToOwned::to_owned),
            active: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_script(&self) -> Option<&AnalyticsScript> {
        self.active.as_ref()
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn apply(&mut self, status: &ConsentStatus) -> AnalyticsAction {
        let Some(measurement_id) = self.measurement_id.as_deref() else {
            debug!("analytics not configured");
            return self.unload_or(AnalyticsAction::Blocked(BlockReason::NotConfigured));
        };

        if !status.analytics {
            return self.unload_or(AnalyticsAction::Blocked(BlockReason::NoConsent));
        }

        let script = AnalyticsScript::new(measurement_id, status);
        if self.active.as_ref() == Some(&script) {
            return AnalyticsAction::Unchanged;
        }

        let action = if self.active.is_some() {
            info!(ad_storage = %script.ad_storage, "updating analytics consent signals");
            self.loader.update(&script);
            AnalyticsAction::SignalsUpdated
        } else {
            info!(src = %script.src, ad_storage = %script.ad_storage, "loading analytics");
            self.loader.load(&script);
            AnalyticsAction::Loaded
        };
        self.active = Some(script);
        action
    }

    fn unload_or(&mut self, idle: AnalyticsAction) -> AnalyticsAction {
        match self.active.take() {
            Some(script) => {
                info!(id = %script.id, "unloading analytics");
                self.loader.unload(&script.id);
                AnalyticsAction::Unloaded
            }
            None => idle,
        }
    }
}

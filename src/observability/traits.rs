use crate::consent::ConsentState;

/// Transitions the consent store reports to its observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsentEvent {
    /// A trusted record was read at startup
    Restored,
    /// No usable record; `reason` says why
    Undecided { reason: String },
    AcceptedAll,
    RejectedAll,
    SavedCustom,
    PanelShown,
    Dismissed,
    Reset,
    /// A write or remove failed; the in-memory state still moved on
    PersistenceFailed { operation: String, message: String },
}

impl ConsentEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Restored => "consent.restored",
            Self::Undecided { .. } => "consent.undecided",
            Self::AcceptedAll => "consent.accepted_all",
            Self::RejectedAll => "consent.rejected_all",
            Self::SavedCustom => "consent.saved_custom",
            Self::PanelShown => "consent.panel_shown",
            Self::Dismissed => "consent.dismissed",
            Self::Reset => "consent.reset",
            Self::PersistenceFailed { .. } => "consent.persistence_failed",
        }
    }

    /// Whether the event records (or clears) a visitor decision
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            Self::AcceptedAll | Self::RejectedAll | Self::SavedCustom | Self::Reset
        )
    }
}

/// Subscriber notified after every state publication.
///
/// Observers only read. The state they receive has already been persisted.
pub trait Observer: Send + Sync {
    fn record_event(&self, event: &ConsentEvent, state: &ConsentState);

    /// Human-readable name of this observer
    fn name(&self) -> &str;
}

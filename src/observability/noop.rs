use super::traits::{ConsentEvent, Observer};
use crate::consent::ConsentState;

/// Observer that discards every event
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline(always)]
    fn record_event(&self, _event: &ConsentEvent, _state: &ConsentState) {}

    fn name(&self) -> &str {
        "noop"
    }
}

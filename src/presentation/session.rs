//! Per-presentation bookkeeping

use std::time::{Duration, Instant};

/// Identifies one scheduled dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub(crate) u64);

/// Owned handle to the pending auto-dismiss
///
/// Dropping it from the session is the cancellation; any later attempt to
/// fire its id is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissTimer {
    pub id: TimerId,
    pub deadline: Instant,
}

impl DismissTimer {
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

/// One visible period, from activation to dismissal
#[derive(Debug, Clone)]
pub struct PresentationSession {
    pub started_at: Instant,
    pub timer: Option<DismissTimer>,
    /// Snapshot at activation (forced off for loading alerts)
    pub tap_to_dismiss: bool,
    /// Zero means the session only ends on tap or external dismissal
    pub effective_duration: Duration,
}

impl PresentationSession {
    /// Drop the pending timer, returning it if one was scheduled
    pub fn cancel_timer(&mut self) -> Option<DismissTimer> {
        self.timer.take()
    }

    pub fn owns_timer(&self, id: TimerId) -> bool {
        self.timer.as_ref().is_some_and(|t| t.id == id)
    }
}

//! Toast presentation controller
//!
//! Drives the `Hidden`/`Visible` state machine for one bound toast. All
//! entry points first reconcile with the host-owned flag, so writes from the
//! host are picked up no matter which call comes next.

use std::time::Duration;

use super::binding::{AlertProvider, Presenting};
use super::clock::{Clock, SystemClock};
use super::session::{DismissTimer, PresentationSession, TimerId};
use crate::alert::AlertDescriptor;

/// Auto-dismiss delay used when nothing is configured
pub const DEFAULT_DURATION: Duration = Duration::from_secs(2);

/// Tap and dismiss hooks
pub type Callback = Box<dyn FnMut()>;

type Subscriber = Box<dyn FnMut(&ToastEvent)>;

/// Convert user-facing seconds into a duration.
///
/// Negative and NaN values clamp to zero (no auto-dismiss); values too large
/// for `Duration` saturate.
pub fn duration_from_secs(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

/// Settings snapshotted by each new session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    /// Zero disables auto-dismiss
    pub duration: Duration,
    pub tap_to_dismiss: bool,
}

impl ToastOptions {
    pub fn from_secs(duration_secs: f64, tap_to_dismiss: bool) -> Self {
        Self {
            duration: duration_from_secs(duration_secs),
            tap_to_dismiss,
        }
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            tap_to_dismiss: true,
        }
    }
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The auto-dismiss deadline passed
    Expired,
    /// The user tapped the toast
    Tapped,
    /// The host cleared the flag
    External,
    /// The controller was rebound to another flag
    Unbound,
}

/// Change notifications delivered to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown(AlertDescriptor),
    AlertReplaced(AlertDescriptor),
    Dismissed(DismissReason),
}

struct ToastBinding {
    presenting: Presenting,
    alert: AlertProvider,
}

/// Presentation state machine for a single toast
pub struct ToastController<C: Clock = SystemClock> {
    clock: C,
    options: ToastOptions,
    on_tap: Option<Callback>,
    on_dismiss: Option<Callback>,
    binding: Option<ToastBinding>,
    session: Option<PresentationSession>,
    alert: Option<AlertDescriptor>,
    /// Flag generation the current session was started from
    shown_generation: u64,
    next_timer: u64,
    subscribers: Vec<Subscriber>,
}

impl Default for ToastController<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> ToastController<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            options: ToastOptions::default(),
            on_tap: None,
            on_dismiss: None,
            binding: None,
            session: None,
            alert: None,
            shown_generation: 0,
            next_timer: 0,
            subscribers: Vec::new(),
        }
    }

    /// Set duration, tap behaviour and callbacks. Takes effect for the next
    /// session; a visible toast keeps the values it started with.
    pub fn configure(
        &mut self,
        duration: Duration,
        tap_to_dismiss: bool,
        on_tap: Option<Callback>,
        on_dismiss: Option<Callback>,
    ) {
        self.options = ToastOptions {
            duration,
            tap_to_dismiss,
        };
        self.on_tap = on_tap;
        self.on_dismiss = on_dismiss;
    }

    pub fn set_options(&mut self, options: ToastOptions) {
        self.options = options;
    }

    pub fn options(&self) -> ToastOptions {
        self.options
    }

    pub fn set_on_tap(&mut self, on_tap: impl FnMut() + 'static) {
        self.on_tap = Some(Box::new(on_tap));
    }

    pub fn set_on_dismiss(&mut self, on_dismiss: impl FnMut() + 'static) {
        self.on_dismiss = Some(Box::new(on_dismiss));
    }

    /// Attach the host's flag and descriptor provider.
    ///
    /// A session started from a previous binding ends with
    /// [`DismissReason::Unbound`] first. The new flag is synced immediately,
    /// so binding a flag that is already set shows the toast.
    pub fn bind(
        &mut self,
        presenting: Presenting,
        alert: impl Fn() -> AlertDescriptor + 'static,
    ) {
        self.finish(DismissReason::Unbound);
        self.binding = Some(ToastBinding {
            presenting,
            alert: Box::new(alert),
        });
        self.alert = None;
        self.sync();
    }

    /// Register an observer for shown/replaced/dismissed events
    pub fn subscribe(&mut self, observer: impl FnMut(&ToastEvent) + 'static) {
        self.subscribers.push(Box::new(observer));
    }

    pub fn is_visible(&self) -> bool {
        self.session.is_some()
    }

    /// Descriptor observed at activation or at the last replacement
    pub fn alert(&self) -> Option<&AlertDescriptor> {
        self.alert.as_ref()
    }

    pub fn session(&self) -> Option<&PresentationSession> {
        self.session.as_ref()
    }

    pub fn pending_timer(&self) -> Option<&DismissTimer> {
        self.session.as_ref().and_then(|s| s.timer.as_ref())
    }

    /// Time left before the pending timer is due, if one is scheduled
    pub fn time_until_dismiss(&self) -> Option<Duration> {
        self.pending_timer()
            .map(|timer| timer.remaining(self.clock.now()))
    }

    /// Reconcile with the bound flag and descriptor
    pub fn sync(&mut self) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        let presenting = binding.presenting.get();
        let generation = binding.presenting.generation();

        match (self.session.is_some(), presenting) {
            (false, true) => self.activate(),
            (true, false) => {
                self.finish(DismissReason::External);
            }
            // Flag was cleared and set again since the last sync
            (true, true) if generation != self.shown_generation => {
                self.end_session(DismissReason::External, false);
                self.activate();
            }
            (true, true) => self.refresh_alert(),
            (false, false) => {}
        }
    }

    /// Handle a tap on the toast. Returns true if it dismissed the toast.
    pub fn tap(&mut self) -> bool {
        self.sync();

        let Some(session) = self.session.as_ref() else {
            return false;
        };
        if !session.tap_to_dismiss {
            return false;
        }

        if let Some(on_tap) = self.on_tap.as_mut() {
            on_tap();
        }
        self.finish(DismissReason::Tapped)
    }

    /// Fire the pending timer if its deadline has passed
    pub fn tick(&mut self) -> bool {
        self.sync();

        let now = self.clock.now();
        let due = self
            .pending_timer()
            .filter(|timer| timer.is_due(now))
            .map(|timer| timer.id);

        match due {
            Some(id) => self.fire_timer(id),
            None => false,
        }
    }

    /// Deliver a timer firing. Ids that do not belong to the current session
    /// are ignored.
    pub fn fire_timer(&mut self, id: TimerId) -> bool {
        self.sync();

        if !self.session.as_ref().is_some_and(|s| s.owns_timer(id)) {
            #[cfg(debug_assertions)]
            log::trace!("Ignoring stale dismiss timer {:?}", id);
            return false;
        }
        self.finish(DismissReason::Expired)
    }

    /// Programmatic dismissal: clear the flag and let sync observe it
    pub fn dismiss(&mut self) -> bool {
        let Some(binding) = self.binding.as_ref() else {
            return false;
        };
        binding.presenting.set(false);

        let was_visible = self.session.is_some();
        self.sync();
        was_visible && self.session.is_none()
    }

    fn activate(&mut self) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        let alert = (binding.alert)();
        self.shown_generation = binding.presenting.generation();

        let (effective_duration, tap_to_dismiss) = if alert.is_loading() {
            (Duration::ZERO, false)
        } else {
            (self.options.duration, self.options.tap_to_dismiss)
        };

        let started_at = self.clock.now();
        let timer = if effective_duration.is_zero() {
            None
        } else {
            started_at
                .checked_add(effective_duration)
                .map(|deadline| DismissTimer {
                    id: self.next_timer_id(),
                    deadline,
                })
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Toast shown: {:?}, duration {:?}, tap_to_dismiss {}",
            alert.variant(),
            effective_duration,
            tap_to_dismiss
        );

        // Replacing the session drops whatever timer it owned.
        self.session = Some(PresentationSession {
            started_at,
            timer,
            tap_to_dismiss,
            effective_duration,
        });
        self.alert = Some(alert.clone());
        self.notify(ToastEvent::Shown(alert));
    }

    // The running timer is left alone: session settings are fixed at activation.
    fn refresh_alert(&mut self) {
        let Some(binding) = self.binding.as_ref() else {
            return;
        };
        let alert = (binding.alert)();
        if self.alert.as_ref() == Some(&alert) {
            return;
        }

        #[cfg(debug_assertions)]
        log::debug!("Toast replaced while visible: {:?}", alert.variant());

        self.alert = Some(alert.clone());
        self.notify(ToastEvent::AlertReplaced(alert));
    }

    fn finish(&mut self, reason: DismissReason) -> bool {
        self.end_session(reason, true)
    }

    // `clear_flag` is false only when the host already re-set the flag for a
    // new session.
    fn end_session(&mut self, reason: DismissReason, clear_flag: bool) -> bool {
        let Some(mut session) = self.session.take() else {
            return false;
        };
        session.cancel_timer();

        if clear_flag {
            if let Some(binding) = self.binding.as_ref() {
                binding.presenting.set(false);
            }
        }

        #[cfg(debug_assertions)]
        log::debug!(
            "Toast dismissed ({:?}) after {:?}",
            reason,
            self.clock.now().saturating_duration_since(session.started_at)
        );

        self.notify(ToastEvent::Dismissed(reason));
        if let Some(on_dismiss) = self.on_dismiss.as_mut() {
            on_dismiss();
        }
        true
    }

    fn next_timer_id(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId(self.next_timer)
    }

    fn notify(&mut self, event: ToastEvent) {
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&event);
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;

//! Presentation lifecycle for a single toast
//!
//! The controller watches a host-owned visibility flag, schedules the
//! auto-dismiss deadline, handles taps and reports completion exactly once
//! per visible period.

mod binding;
mod clock;
mod controller;
mod session;

pub use binding::{AlertProvider, Presenting};
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{
    Callback, DEFAULT_DURATION, DismissReason, ToastController, ToastEvent, ToastOptions,
    duration_from_secs,
};
pub use session::{DismissTimer, PresentationSession, TimerId};

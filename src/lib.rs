//! alert-toast library - transient alert presentation for terminal UIs
//!
//! A [`ToastController`] turns a host-owned visibility flag plus an alert
//! descriptor into a toast that auto-dismisses, can be tapped away, and
//! reports back exactly once when it goes away.

pub mod alert;
pub mod app;
pub mod config;
pub mod error;
pub mod presentation;
pub mod render;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use alert::{AlertDescriptor, AlertVariant, Placement};
pub use app::App;
pub use config::Config;
pub use error::ToastError;
pub use presentation::{Presenting, ToastController};

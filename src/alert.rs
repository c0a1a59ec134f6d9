//! Alert descriptor module
//!
//! Immutable values describing what a toast shows and where it is placed.
//! The presentation controller only looks at the variant; everything else
//! is forwarded to the renderer.

mod alert_descriptor;

pub use alert_descriptor::{AlertDescriptor, AlertStyle, AlertVariant, BannerAnimation, Placement};

//! Shared layout helpers for overlay widgets

pub mod popup;

//! Toast rendering
//!
//! Draws an `AlertDescriptor` for ratatui. Rendering is a pure function of
//! the descriptor, the visibility flag and static options; all lifecycle
//! decisions live in `presentation`.

mod toast_render;

pub use toast_render::{RenderOptions, render_toast, system_icon_glyph, toast_area};

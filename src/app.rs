mod app_events;
mod app_render;
mod app_state;

// Re-export public types
pub use app_render::{placement_label, variant_label};
pub use app_state::{App, DEMO_ALERT_COUNT, MAX_EVENT_LOG, demo_alert, loading_alert, next_placement};

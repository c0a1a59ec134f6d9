//! Shared test utilities for alert-toast
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::presentation::ManualClock;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    /// Demo app on a virtual clock with default config, plus the clock handle
    pub fn test_app() -> (App<ManualClock>, ManualClock) {
        test_app_with_config(&Config::default())
    }

    pub fn test_app_with_config(config: &Config) -> (App<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let app = App::with_clock(config, clock.clone());
        (app, clock)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}

use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::app_state::{App, DEMO_ALERT_COUNT, demo_alert, loading_alert, next_placement};
use crate::presentation::Clock;
use crate::render::toast_area;

/// Upper bound on how long input polling blocks, so countdowns keep moving
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl<C: Clock> App<C> {
    /// Wait for at most one input event and apply it
    ///
    /// The wait never outlasts the pending dismiss timer, so `tick` runs on
    /// time. Input is applied before the caller ticks, which makes a tap win
    /// over a timer expiring in the same iteration.
    pub fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self
            .toast
            .time_until_dismiss()
            .map_or(EVENT_POLL_TIMEOUT, |left| left.min(EVENT_POLL_TIMEOUT));

        if event::poll(timeout)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    self.handle_mouse_event(mouse_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('s') => {
                self.presenting.toggle();
                self.toast.sync();
            }
            KeyCode::Char('c') => {
                // Replacing the alert also flips the flag
                self.alert_index = (self.alert_index + 1) % DEMO_ALERT_COUNT;
                *self.alert.borrow_mut() = demo_alert(self.alert_index, self.placement);
                self.presenting.toggle();
                self.toast.sync();
            }
            KeyCode::Char('l') => self.present(loading_alert(self.placement)),
            KeyCode::Char('d') => {
                self.toast.dismiss();
            }
            KeyCode::Char('p') => {
                self.placement = next_placement(self.placement);
                let alert = if self.alert.borrow().is_loading() {
                    loading_alert(self.placement)
                } else {
                    demo_alert(self.alert_index, self.placement)
                };
                self.set_alert(alert);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toast.tap();
            }
            _ => return,
        }
        self.mark_dirty();
    }

    /// Left click inside the visible toast counts as a tap
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !self.toast.is_visible() {
            return;
        }
        let Some(alert) = self.toast.alert() else {
            return;
        };

        let area = toast_area(self.frame_area, alert, &self.render_options);
        let inside = mouse.column >= area.x
            && mouse.column < area.right()
            && mouse.row >= area.y
            && mouse.row < area.bottom();
        if inside {
            self.toast.tap();
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

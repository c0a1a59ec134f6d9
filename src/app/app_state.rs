use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use ratatui::layout::Rect;
use ratatui::style::Modifier;

use crate::alert::{AlertDescriptor, AlertStyle, AlertVariant, BannerAnimation, Placement};
use crate::config::Config;
use crate::presentation::{Callback, Clock, Presenting, SystemClock, ToastController, ToastEvent};
use crate::render::RenderOptions;
use crate::theme::palette;

#[cfg(debug_assertions)]
use log::debug;

/// Number of recent toast events kept for the status panel
pub const MAX_EVENT_LOG: usize = 6;

/// Number of entries in the `c` rotation
pub const DEMO_ALERT_COUNT: usize = 6;

/// Demo alert for a position in the rotation
pub fn demo_alert(index: usize, placement: Placement) -> AlertDescriptor {
    let alert = match index % DEMO_ALERT_COUNT {
        0 => AlertDescriptor::text("Saved").with_subtitle("Changes written to disk"),
        1 => AlertDescriptor::success("Completed!", palette::SUCCESS),
        2 => AlertDescriptor::failure("Upload failed", palette::ERROR)
            .with_subtitle("Check your connection"),
        3 => AlertDescriptor::new(AlertVariant::SystemIcon(
            "star.fill".to_string(),
            palette::WARNING,
        ))
        .with_title("Added to favorites"),
        4 => AlertDescriptor::new(AlertVariant::CustomImage("@".to_string(), palette::PINK))
            .with_title("New mention")
            .with_style(
                AlertStyle::new()
                    .background(palette::BG_SURFACE)
                    .title_color(palette::PINK),
            ),
        _ => AlertDescriptor::text("Tap anywhere on me").with_style(
            AlertStyle::new()
                .title_color(palette::PURPLE)
                .title_modifier(Modifier::ITALIC),
        ),
    };
    alert.with_placement(placement)
}

/// Loading alert shown by `l`
pub fn loading_alert(placement: Placement) -> AlertDescriptor {
    AlertDescriptor::loading()
        .with_title("Loading...")
        .with_placement(placement)
}

/// Next placement in the `p` rotation
pub fn next_placement(placement: Placement) -> Placement {
    match placement {
        Placement::Centered => Placement::TopBanner,
        Placement::TopBanner => Placement::BottomBanner(BannerAnimation::Slide),
        Placement::BottomBanner(BannerAnimation::Slide) => {
            Placement::BottomBanner(BannerAnimation::Pop)
        }
        Placement::BottomBanner(BannerAnimation::Pop) => Placement::Centered,
    }
}

/// Demo application state
///
/// Owns the visibility flag and the descriptor the toast controller is bound
/// to, the way any host screen would.
pub struct App<C: Clock = SystemClock> {
    pub toast: ToastController<C>,
    pub presenting: Presenting,
    pub alert: Rc<RefCell<AlertDescriptor>>,
    pub placement: Placement,
    pub alert_index: usize,
    pub render_options: RenderOptions,
    pub events: Rc<RefCell<VecDeque<String>>>,
    pub taps: Rc<Cell<u32>>,
    pub completions: Rc<Cell<u32>>,
    /// Frame area from the last render, for hit-testing clicks
    pub frame_area: Rect,
    pub should_quit: bool,
    pub needs_render: bool,
    toast_changed: Rc<Cell<bool>>,
}

impl App<SystemClock> {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> App<C> {
    /// Create the app with an explicit clock (tests pass a `ManualClock`)
    pub fn with_clock(config: &Config, clock: C) -> Self {
        let placement = config.toast.placement();
        let options = config.toast.options();
        let presenting = Presenting::new(false);
        let alert = Rc::new(RefCell::new(demo_alert(0, placement)));
        let events = Rc::new(RefCell::new(VecDeque::with_capacity(MAX_EVENT_LOG)));
        let taps = Rc::new(Cell::new(0));
        let completions = Rc::new(Cell::new(0));
        let toast_changed = Rc::new(Cell::new(false));

        let on_tap: Callback = {
            let taps = taps.clone();
            let events = events.clone();
            Box::new(move || {
                taps.set(taps.get() + 1);
                push_event(&events, "tap".to_string());
            })
        };
        let on_dismiss: Callback = {
            let completions = completions.clone();
            let events = events.clone();
            Box::new(move || {
                completions.set(completions.get() + 1);
                push_event(&events, "completion".to_string());
            })
        };

        let mut toast = ToastController::new(clock);
        toast.configure(
            options.duration,
            options.tap_to_dismiss,
            Some(on_tap),
            Some(on_dismiss),
        );
        toast.subscribe({
            let events = events.clone();
            let toast_changed = toast_changed.clone();
            move |event: &ToastEvent| {
                toast_changed.set(true);
                push_event(&events, describe_event(event));
            }
        });

        let provider = alert.clone();
        toast.bind(presenting.clone(), move || provider.borrow().clone());

        #[cfg(debug_assertions)]
        debug!(
            "Demo app created: placement {:?}, options {:?}",
            placement, options
        );

        Self {
            toast,
            presenting,
            alert,
            placement,
            alert_index: 0,
            render_options: RenderOptions {
                offset_y: config.toast.offset_y,
            },
            events,
            taps,
            completions,
            frame_area: Rect::default(),
            should_quit: false,
            needs_render: true,
            toast_changed,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
        self.toast_changed.set(false);
    }

    /// Redraw when input changed something, the toast changed, or a countdown
    /// is running
    pub fn should_render(&self) -> bool {
        self.needs_render || self.toast_changed.get() || self.toast.pending_timer().is_some()
    }

    /// Replace the bound descriptor; a visible toast picks it up on the next sync
    pub fn set_alert(&mut self, alert: AlertDescriptor) {
        *self.alert.borrow_mut() = alert;
        self.toast.sync();
    }

    /// Show `alert`, ending whatever toast is currently up
    pub fn present(&mut self, alert: AlertDescriptor) {
        self.toast.dismiss();
        *self.alert.borrow_mut() = alert;
        self.presenting.set(true);
        self.toast.sync();
    }

    /// Surface a startup warning (e.g. an invalid config file)
    pub fn show_warning(&mut self, message: &str) {
        self.present(
            AlertDescriptor::new(AlertVariant::SystemIcon(
                "warning".to_string(),
                palette::WARNING,
            ))
            .with_title("Warning")
            .with_subtitle(message)
            .with_placement(Placement::TopBanner),
        );
    }

    /// Advance the toast timer; call after input has been handled
    pub fn tick(&mut self) {
        self.toast.tick();
    }

    pub fn recent_events(&self) -> Vec<String> {
        self.events.borrow().iter().cloned().collect()
    }
}

fn push_event(events: &Rc<RefCell<VecDeque<String>>>, entry: String) {
    let mut events = events.borrow_mut();
    if events.len() == MAX_EVENT_LOG {
        events.pop_front();
    }
    events.push_back(entry);
}

fn describe_event(event: &ToastEvent) -> String {
    match event {
        ToastEvent::Shown(alert) => format!("shown: {}", alert.title().unwrap_or("(untitled)")),
        ToastEvent::AlertReplaced(alert) => {
            format!("replaced: {}", alert.title().unwrap_or("(untitled)"))
        }
        ToastEvent::Dismissed(reason) => format!("dismissed: {:?}", reason).to_lowercase(),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::alert::{AlertDescriptor, AlertVariant, Placement};
use crate::presentation::Clock;
use crate::render::render_toast;
use crate::theme;

const HELP_HINTS: &[(&str, &str)] = &[
    ("s", "Show/Hide"),
    ("c", "Change Alert"),
    ("l", "Loading"),
    ("d", "Dismiss"),
    ("p", "Placement"),
    ("Enter", "Tap"),
    ("q", "Quit"),
];

pub fn variant_label(variant: &AlertVariant) -> &'static str {
    match variant {
        AlertVariant::Success(_) => "success",
        AlertVariant::Failure(_) => "failure",
        AlertVariant::SystemIcon(_, _) => "system icon",
        AlertVariant::CustomImage(_, _) => "custom image",
        AlertVariant::Loading => "loading",
        AlertVariant::PlainText => "plain text",
    }
}

pub fn placement_label(placement: Placement) -> &'static str {
    match placement {
        Placement::Centered => "centered",
        Placement::TopBanner => "top banner",
        Placement::BottomBanner(_) => "bottom banner",
    }
}

impl<C: Clock> App<C> {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_area = frame.area();

        let layout = Layout::vertical([
            Constraint::Length(3), // Heading
            Constraint::Min(6),    // Status panel
            Constraint::Length(1), // Help line
        ])
        .split(frame.area());

        self.render_heading(frame, layout[0]);
        self.render_status(frame, layout[1]);
        self.render_help_line(frame, layout[2]);

        // Toast goes last so it overlays everything else
        if let Some(alert) = self.toast.alert() {
            render_toast(frame, alert, self.toast.is_visible(), &self.render_options);
        }
    }

    fn render_heading(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme::demo::BORDER));
        let heading = Paragraph::new(Line::from(Span::styled(
            " alert-toast demo",
            theme::demo::HEADING,
        )))
        .block(block);
        frame.render_widget(heading, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let alert: AlertDescriptor = self.alert.borrow().clone();

        let (visibility, visibility_color) = if self.toast.is_visible() {
            ("visible", theme::demo::VISIBLE)
        } else {
            ("hidden", theme::demo::HIDDEN)
        };

        let countdown = match (self.toast.is_visible(), self.toast.time_until_dismiss()) {
            (false, _) => "-".to_string(),
            (true, Some(left)) => format!("{:.1}s", left.as_secs_f64()),
            (true, None) => "until dismissed".to_string(),
        };

        let mut lines = vec![
            status_line("Toast", visibility.to_string(), visibility_color),
            status_line(
                "Alert",
                format!(
                    "{} ({})",
                    alert.title().unwrap_or("(untitled)"),
                    variant_label(alert.variant())
                ),
                theme::demo::VALUE,
            ),
            status_line(
                "Placement",
                placement_label(self.placement).to_string(),
                theme::demo::VALUE,
            ),
            status_line("Auto-dismiss", countdown, theme::demo::VALUE),
            status_line(
                "Taps / completions",
                format!("{} / {}", self.taps.get(), self.completions.get()),
                theme::demo::VALUE,
            ),
            Line::default(),
            Line::from(Span::styled(
                " Recent events",
                Style::default().fg(theme::demo::LABEL),
            )),
        ];
        lines.extend(self.recent_events().into_iter().rev().map(|entry| {
            Line::from(Span::styled(
                format!("   {}", entry),
                Style::default().fg(theme::demo::EVENT),
            ))
        }));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let help = Paragraph::new(theme::border_hints::build_hints(
            HELP_HINTS,
            theme::help_line::KEY,
        ));
        frame.render_widget(help, area);
    }
}

fn status_line(label: &'static str, value: String, color: ratatui::style::Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<20}", label),
            Style::default().fg(theme::demo::LABEL),
        ),
        Span::styled(value, Style::default().fg(color)),
    ])
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

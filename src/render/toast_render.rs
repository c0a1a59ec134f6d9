//! Toast overlay rendering
//!
//! Lays out the three placements:
//! - `Centered`: icon row above the text, boxed in the middle of the screen
//! - `TopBanner`: icon and title on one row, dropped from the top edge
//! - `BottomBanner`: like the top banner but left-aligned at the bottom

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Padding, Paragraph},
};

use crate::alert::{AlertDescriptor, AlertVariant, Placement};
use crate::theme;
use crate::widgets::popup;

/// Icon variants get at least this width when centered
const FRAMED_MIN_WIDTH: u16 = 24;
const BANNER_MAX_WIDTH: u16 = 50;
const EDGE_MARGIN: u16 = 1;
/// Borders (2) + horizontal padding (2)
const HORIZONTAL_CHROME: u16 = 4;
const VERTICAL_CHROME: u16 = 2;

const SUCCESS_GLYPH: &str = "✔";
const FAILURE_GLYPH: &str = "✖";
const LOADING_GLYPH: &str = "◌";

/// Static render settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Rows to shift the toast by; negative moves it up
    pub offset_y: i16,
}

/// Glyph for a named system icon; unknown names fall back to a dot
pub fn system_icon_glyph(name: &str) -> &'static str {
    match name {
        "checkmark" => SUCCESS_GLYPH,
        "xmark" => FAILURE_GLYPH,
        "info" | "info.circle" => "ℹ",
        "warning" | "exclamationmark.triangle" => "⚠",
        "star" | "star.fill" => "★",
        "heart" | "heart.fill" => "♥",
        "arrow.up" => "↑",
        "arrow.down" => "↓",
        _ => "●",
    }
}

/// Screen area the toast occupies for the given frame
///
/// Hosts use this to hit-test taps.
pub fn toast_area(frame_area: Rect, alert: &AlertDescriptor, options: &RenderOptions) -> Rect {
    let lines = content_lines(alert);
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(HORIZONTAL_CHROME);
    let height = u16::try_from(lines.len().max(1))
        .unwrap_or(u16::MAX)
        .saturating_add(VERTICAL_CHROME);

    let area = match alert.placement() {
        Placement::Centered => {
            let width = if is_framed(alert.variant()) {
                width.max(FRAMED_MIN_WIDTH)
            } else {
                width
            };
            popup::centered_popup(frame_area, width, height)
        }
        Placement::TopBanner => popup::top_banner(frame_area, width, height, EDGE_MARGIN),
        Placement::BottomBanner(_) => popup::bottom_banner(
            frame_area,
            width.min(BANNER_MAX_WIDTH),
            height,
            EDGE_MARGIN,
        ),
    };

    popup::offset_vertically(area, options.offset_y, frame_area)
}

/// Render the toast on top of whatever is already in the frame
///
/// Call after the main UI so the overlay is drawn last. Draws nothing when
/// `visible` is false or the frame is too small.
pub fn render_toast(
    frame: &mut Frame,
    alert: &AlertDescriptor,
    visible: bool,
    options: &RenderOptions,
) {
    if !visible {
        return;
    }

    let area = toast_area(frame.area(), alert, options);
    if area.width < 3 || area.height < 3 {
        return;
    }

    let background = alert
        .style()
        .and_then(|s| s.background)
        .unwrap_or(theme::toast::BG);

    let border_type = match alert.placement() {
        Placement::Centered => BorderType::Plain,
        Placement::TopBanner | Placement::BottomBanner(_) => BorderType::Rounded,
    };
    let alignment = match alert.placement() {
        Placement::BottomBanner(_) => Alignment::Left,
        Placement::Centered | Placement::TopBanner => Alignment::Center,
    };

    let block = Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(theme::toast::BORDER).bg(background))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(background));

    let paragraph = Paragraph::new(content_lines(alert))
        .alignment(alignment)
        .block(block);

    popup::clear_area(frame, area);
    frame.render_widget(paragraph, area);
}

// Matches the fixed-size frame icon alerts get in the centered layout.
fn is_framed(variant: &AlertVariant) -> bool {
    !matches!(variant, AlertVariant::PlainText | AlertVariant::Loading)
}

fn icon_span(variant: &AlertVariant) -> Option<Span<'static>> {
    let (glyph, color) = match variant {
        AlertVariant::Success(tint) => (SUCCESS_GLYPH.to_string(), *tint),
        AlertVariant::Failure(tint) => (FAILURE_GLYPH.to_string(), *tint),
        AlertVariant::SystemIcon(name, tint) => (system_icon_glyph(name).to_string(), *tint),
        AlertVariant::CustomImage(id, tint) => (id.clone(), *tint),
        AlertVariant::Loading => (LOADING_GLYPH.to_string(), theme::toast::SPINNER),
        AlertVariant::PlainText => return None,
    };
    Some(Span::styled(glyph, Style::default().fg(color)))
}

fn title_span(alert: &AlertDescriptor) -> Option<Span<'static>> {
    let title = alert.title()?;
    let style = alert.style();
    let color: Color = style
        .and_then(|s| s.title_color)
        .unwrap_or(theme::toast::TITLE);
    let modifier = style
        .and_then(|s| s.title_modifier)
        .unwrap_or(theme::toast::TITLE_MODIFIER);
    Some(Span::styled(
        title.to_string(),
        Style::default().fg(color).add_modifier(modifier),
    ))
}

fn subtitle_line(alert: &AlertDescriptor) -> Option<Line<'static>> {
    let subtitle = alert.subtitle()?;
    let style = alert.style();
    let color = style
        .and_then(|s| s.subtitle_color)
        .unwrap_or(theme::toast::SUBTITLE);
    let modifier = style
        .and_then(|s| s.subtitle_modifier)
        .unwrap_or(theme::toast::SUBTITLE_MODIFIER);
    Some(Line::from(Span::styled(
        subtitle.to_string(),
        Style::default().fg(color).add_modifier(modifier),
    )))
}

fn content_lines(alert: &AlertDescriptor) -> Vec<Line<'static>> {
    let icon = icon_span(alert.variant());
    let title = title_span(alert);
    let mut lines = Vec::with_capacity(3);

    match alert.placement() {
        Placement::Centered => {
            if let Some(icon) = icon {
                lines.push(Line::from(icon));
            }
            if let Some(title) = title {
                lines.push(Line::from(title));
            }
        }
        Placement::TopBanner | Placement::BottomBanner(_) => {
            let mut spans = Vec::with_capacity(3);
            if let Some(icon) = icon {
                spans.push(icon);
            }
            if let Some(title) = title {
                if !spans.is_empty() {
                    spans.push(Span::raw(" "));
                }
                spans.push(title);
            }
            if !spans.is_empty() {
                lines.push(Line::from(spans));
            }
        }
    }

    if let Some(subtitle) = subtitle_line(alert) {
        lines.push(subtitle);
    }
    lines
}

#[cfg(test)]
#[path = "toast_render_tests.rs"]
mod toast_render_tests;

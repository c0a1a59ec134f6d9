//! Tests for toast_render

use super::*;
use crate::alert::{AlertStyle, BannerAnimation};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_to_terminal(
    alert: &AlertDescriptor,
    visible: bool,
    options: RenderOptions,
) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal(40, 12);
    terminal
        .draw(|f| render_toast(f, alert, visible, &options))
        .unwrap();
    terminal
}

fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

fn all_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let height = terminal.backend().buffer().area.height;
    (0..height).map(|y| row(terminal, y)).collect()
}

// === Visibility ===

#[test]
fn test_hidden_toast_draws_nothing() {
    let terminal = render_to_terminal(
        &AlertDescriptor::text("Saved"),
        false,
        RenderOptions::default(),
    );
    assert!(all_rows(&terminal).iter().all(|r| r.trim().is_empty()));
}

#[test]
fn test_tiny_frame_draws_nothing() {
    let mut terminal = create_test_terminal(2, 2);
    terminal
        .draw(|f| {
            render_toast(
                f,
                &AlertDescriptor::text("Saved"),
                true,
                &RenderOptions::default(),
            )
        })
        .unwrap();
    assert!(all_rows(&terminal).iter().all(|r| r.trim().is_empty()));
}

// === Placement ===

#[test]
fn test_centered_text_layout() {
    let alert = AlertDescriptor::text("Saved");
    assert_eq!(
        toast_area(Rect::new(0, 0, 40, 12), &alert, &RenderOptions::default()),
        Rect::new(15, 4, 9, 3)
    );

    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    assert_eq!(row(&terminal, 4).trim(), "┌───────┐");
    assert_eq!(row(&terminal, 5).trim(), "│ Saved │");
    assert_eq!(row(&terminal, 6).trim(), "└───────┘");
}

#[test]
fn test_centered_icon_alert_is_framed() {
    let alert = AlertDescriptor::success("Done", Color::Green);
    let area = toast_area(Rect::new(0, 0, 40, 12), &alert, &RenderOptions::default());
    assert_eq!(area, Rect::new(8, 4, 24, 4));

    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    assert!(row(&terminal, 5).contains('✔'));
    assert!(row(&terminal, 6).contains("Done"));
}

#[test]
fn test_centered_loading_is_compact() {
    let alert = AlertDescriptor::loading();
    let area = toast_area(Rect::new(0, 0, 40, 12), &alert, &RenderOptions::default());
    assert_eq!(area.width, 5);
    assert_eq!(area.height, 3);

    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    assert!(row(&terminal, area.y + 1).contains('◌'));
}

#[test]
fn test_top_banner_layout() {
    let alert =
        AlertDescriptor::success("Copied", Color::Green).with_placement(Placement::TopBanner);
    assert_eq!(
        toast_area(Rect::new(0, 0, 40, 12), &alert, &RenderOptions::default()),
        Rect::new(14, 1, 12, 3)
    );

    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    assert_eq!(row(&terminal, 1).trim(), "╭──────────╮");
    assert_eq!(row(&terminal, 2).trim(), "│ ✔ Copied │");
}

#[test]
fn test_bottom_banner_layout() {
    let alert = AlertDescriptor::text("Synced")
        .with_subtitle("2 files")
        .with_placement(Placement::BottomBanner(BannerAnimation::Pop));
    assert_eq!(
        toast_area(Rect::new(0, 0, 40, 12), &alert, &RenderOptions::default()),
        Rect::new(1, 7, 11, 4)
    );

    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    assert_eq!(row(&terminal, 8).trim(), "│ Synced  │");
    assert_eq!(row(&terminal, 9).trim(), "│ 2 files │");
}

#[test]
fn test_bottom_banner_width_is_capped() {
    let long = "x".repeat(80);
    let alert = AlertDescriptor::text(&long)
        .with_placement(Placement::BottomBanner(BannerAnimation::Slide));
    let area = toast_area(Rect::new(0, 0, 100, 20), &alert, &RenderOptions::default());
    assert_eq!(area.width, BANNER_MAX_WIDTH);
}

#[test]
fn test_offset_moves_toast() {
    let alert = AlertDescriptor::text("Saved");
    let options = RenderOptions { offset_y: -2 };
    assert_eq!(
        toast_area(Rect::new(0, 0, 40, 12), &alert, &options).y,
        2
    );

    let terminal = render_to_terminal(&alert, true, options);
    assert_eq!(row(&terminal, 3).trim(), "│ Saved │");
}

// === Styling ===

#[test]
fn test_style_overrides_apply() {
    let alert = AlertDescriptor::text("Saved").with_style(
        AlertStyle::new()
            .background(Color::Blue)
            .title_color(Color::Yellow),
    );
    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    let buffer = terminal.backend().buffer();

    // Padding cell and first title glyph inside the box at (15, 4, 9, 3)
    assert_eq!(buffer[(16, 5)].bg, Color::Blue);
    assert_eq!(buffer[(17, 5)].symbol(), "S");
    assert_eq!(buffer[(17, 5)].fg, Color::Yellow);
}

#[test]
fn test_default_theme_colors() {
    let alert = AlertDescriptor::text("Saved");
    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    let buffer = terminal.backend().buffer();

    assert_eq!(buffer[(17, 5)].fg, theme::toast::TITLE);
    assert_eq!(buffer[(17, 5)].bg, theme::toast::BG);
}

#[test]
fn test_icon_uses_variant_tint() {
    let alert = AlertDescriptor::failure("Nope", Color::Red).with_placement(Placement::TopBanner);
    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    let buffer = terminal.backend().buffer();
    let area = toast_area(Rect::new(0, 0, 40, 12), &alert, &RenderOptions::default());

    let icon = &buffer[(area.x + 2, area.y + 1)];
    assert_eq!(icon.symbol(), "✖");
    assert_eq!(icon.fg, Color::Red);
}

#[test]
fn test_custom_image_drawn_literally() {
    let alert = AlertDescriptor::new(AlertVariant::CustomImage("@".into(), Color::Cyan))
        .with_title("Mention")
        .with_placement(Placement::TopBanner);
    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    assert!(all_rows(&terminal).iter().any(|r| r.contains("@ Mention")));
}

#[test]
fn test_system_icon_glyphs() {
    assert_eq!(system_icon_glyph("checkmark"), "✔");
    assert_eq!(system_icon_glyph("star.fill"), "★");
    assert_eq!(system_icon_glyph("info"), "ℹ");
    assert_eq!(system_icon_glyph("no.such.icon"), "●");
}

#[test]
fn test_oversized_title_is_clamped_to_frame() {
    let frame_area = Rect::new(0, 0, 80, 24);
    for len in [65_533, usize::from(u16::MAX) + 10] {
        let alert = AlertDescriptor::text(&"x".repeat(len));
        let area = toast_area(frame_area, &alert, &RenderOptions::default());
        assert_eq!(area.width, frame_area.width);
        assert!(area.bottom() <= frame_area.bottom());
    }
}

#[test]
fn test_oversized_bottom_banner_is_clamped() {
    let frame_area = Rect::new(0, 0, 80, 24);
    let alert = AlertDescriptor::text(&"x".repeat(70_000))
        .with_placement(Placement::BottomBanner(BannerAnimation::Slide));
    let area = toast_area(frame_area, &alert, &RenderOptions::default());
    assert_eq!(area.width, BANNER_MAX_WIDTH);
    assert!(area.right() <= frame_area.right());
}

#[test]
fn test_oversized_title_renders_without_panic() {
    let alert = AlertDescriptor::text(&"x".repeat(65_534)).with_placement(Placement::TopBanner);
    let terminal = render_to_terminal(&alert, true, RenderOptions::default());
    assert!(row(&terminal, 2).contains('x'));
}

use ratatui::{Frame, layout::Rect, widgets::Clear};

pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    let popup_x = frame_area.x + (frame_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = frame_area.y + (frame_area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: popup_x,
        y: popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Horizontally centered, `margin` rows below the top edge
pub fn top_banner(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let banner_width = width.min(frame_area.width);
    let banner_height = height.min(frame_area.height.saturating_sub(margin));

    Rect {
        x: frame_area.x + (frame_area.width.saturating_sub(banner_width)) / 2,
        y: frame_area.y + margin.min(frame_area.height),
        width: banner_width,
        height: banner_height,
    }
}

/// Left-aligned, `margin` columns/rows away from the bottom-left corner
pub fn bottom_banner(frame_area: Rect, width: u16, height: u16, margin: u16) -> Rect {
    let banner_width = width.min(frame_area.width.saturating_sub(margin * 2));
    let banner_height = height.min(frame_area.height.saturating_sub(margin));

    Rect {
        x: frame_area.x + margin.min(frame_area.width),
        y: frame_area.y
            + frame_area
                .height
                .saturating_sub(banner_height + margin),
        width: banner_width,
        height: banner_height,
    }
}

/// Shift `rect` by `offset` rows, keeping it inside `bounds`
pub fn offset_vertically(rect: Rect, offset: i16, bounds: Rect) -> Rect {
    if offset == 0 {
        return rect;
    }
    let min_y = bounds.y as i32;
    let max_y = (bounds.bottom().saturating_sub(rect.height) as i32).max(min_y);
    let y = (rect.y as i32 + offset as i32).clamp(min_y, max_y);

    Rect { y: y as u16, ..rect }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn test_centered_popup_basic() {
        let popup = centered_popup(area(100, 50), 40, 20);

        assert_eq!(popup.x, 30);
        assert_eq!(popup.y, 15);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 20);
    }

    #[test]
    fn test_centered_popup_respects_origin() {
        let frame = Rect {
            x: 10,
            y: 5,
            width: 20,
            height: 10,
        };
        let popup = centered_popup(frame, 10, 4);

        assert_eq!(popup.x, 15);
        assert_eq!(popup.y, 8);
    }

    #[test]
    fn test_centered_popup_too_large_is_clamped() {
        let popup = centered_popup(area(100, 50), 200, 100);

        assert_eq!(popup.width, 100);
        assert_eq!(popup.height, 50);
        assert_eq!(popup.x, 0);
        assert_eq!(popup.y, 0);
    }

    #[test]
    fn test_top_banner_basic() {
        let banner = top_banner(area(40, 12), 12, 3, 1);

        assert_eq!(banner, Rect::new(14, 1, 12, 3));
    }

    #[test]
    fn test_bottom_banner_basic() {
        let banner = bottom_banner(area(40, 12), 20, 4, 1);

        assert_eq!(banner, Rect::new(1, 7, 20, 4));
    }

    #[test]
    fn test_bottom_banner_clamps_width() {
        let banner = bottom_banner(area(10, 12), 30, 3, 1);

        assert_eq!(banner.width, 8);
        assert_eq!(banner.x, 1);
    }

    #[test]
    fn test_offset_vertically() {
        let bounds = area(40, 12);
        let rect = Rect::new(5, 4, 10, 3);

        assert_eq!(offset_vertically(rect, 0, bounds), rect);
        assert_eq!(offset_vertically(rect, 2, bounds).y, 6);
        assert_eq!(offset_vertically(rect, -2, bounds).y, 2);
    }

    #[test]
    fn test_offset_vertically_saturates_at_edges() {
        let bounds = area(40, 12);
        let rect = Rect::new(5, 4, 10, 3);

        assert_eq!(offset_vertically(rect, -20, bounds).y, 0);
        assert_eq!(offset_vertically(rect, 20, bounds).y, 9);
    }
}

use ratatui::layout::Rect;
use serde::Deserialize;

/// Horizontal alignment of a floating panel against its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    #[default]
    End,
}

/// Gap between the trigger and the panel, in rows.
pub const SIDE_OFFSET: u16 = 1;

/// Terminals at least this wide get the fixed desktop height cap.
pub const DESKTOP_MIN_WIDTH: u16 = 100;
pub const DESKTOP_MAX_HEIGHT: u16 = 30;

/// Tallest a panel may grow inside `bounds`.
pub fn max_height(bounds: Rect) -> u16 {
    let mobile = (u32::from(bounds.height) * 85 / 100) as u16;
    if bounds.width >= DESKTOP_MIN_WIDTH {
        mobile.min(DESKTOP_MAX_HEIGHT)
    } else {
        mobile
    }
}

/// Place a `width` x `height` panel next to `trigger`, inside `bounds`.
///
/// The panel opens below the trigger unless there is more room above.
/// Height is clipped to [`max_height`] and to the space on the chosen side.
pub fn anchor(trigger: Rect, bounds: Rect, width: u16, height: u16, align: Align) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(max_height(bounds));

    let below = bounds
        .bottom()
        .saturating_sub(trigger.bottom().saturating_add(SIDE_OFFSET));
    let above = trigger
        .y
        .saturating_sub(SIDE_OFFSET)
        .saturating_sub(bounds.y);

    let (y, height) = if height <= below || below >= above {
        (trigger.bottom() + SIDE_OFFSET, height.min(below))
    } else {
        let height = height.min(above);
        (trigger.y - SIDE_OFFSET - height, height)
    };

    let x = match align {
        Align::Start => i32::from(trigger.x),
        Align::Center => {
            i32::from(trigger.x) + i32::from(trigger.width) / 2 - i32::from(width) / 2
        }
        Align::End => i32::from(trigger.right()) - i32::from(width),
    };
    let min_x = i32::from(bounds.x);
    let max_x = i32::from(bounds.right()) - i32::from(width);
    let x = x.clamp(min_x, max_x.max(min_x)) as u16;

    Rect::new(x, y, width, height)
}

/// Scroll offset that keeps `row` inside a `viewport`-tall window.
pub fn scroll_to_show(scroll: u16, row: u16, viewport: u16, content: u16) -> u16 {
    if viewport == 0 {
        return 0;
    }
    let scroll = if row < scroll {
        row
    } else if row >= scroll + viewport {
        row + 1 - viewport
    } else {
        scroll
    };
    scroll.min(content.saturating_sub(viewport))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 40,
    };

    fn trigger() -> Rect {
        Rect::new(40, 2, 10, 1)
    }

    #[test]
    fn alignment_controls_horizontal_edge() {
        let start = anchor(trigger(), SCREEN, 20, 10, Align::Start);
        assert_eq!(start.x, 40);

        let center = anchor(trigger(), SCREEN, 20, 10, Align::Center);
        assert_eq!(center.x, 35);

        let end = anchor(trigger(), SCREEN, 20, 10, Align::End);
        assert_eq!(end.right(), trigger().right());
    }

    #[test]
    fn opens_below_with_offset() {
        let area = anchor(trigger(), SCREEN, 20, 10, Align::End);
        assert_eq!(area.y, trigger().bottom() + SIDE_OFFSET);
        assert_eq!(area.height, 10);
    }

    #[test]
    fn flips_above_when_below_is_cramped() {
        let low = Rect::new(40, 35, 10, 1);
        let area = anchor(low, SCREEN, 20, 10, Align::End);
        assert_eq!(area.bottom() + SIDE_OFFSET, low.y);
        assert_eq!(area.height, 10);
    }

    #[test]
    fn stays_on_screen_horizontally() {
        let edge = Rect::new(2, 2, 4, 1);
        let area = anchor(edge, SCREEN, 20, 10, Align::End);
        assert_eq!(area.x, 0);

        let far = Rect::new(75, 2, 4, 1);
        let area = anchor(far, SCREEN, 20, 10, Align::Start);
        assert_eq!(area.right(), SCREEN.right());
    }

    #[test]
    fn height_cap_depends_on_width() {
        assert_eq!(max_height(Rect::new(0, 0, 60, 20)), 17);
        assert_eq!(max_height(Rect::new(0, 0, 120, 60)), DESKTOP_MAX_HEIGHT);
        assert_eq!(max_height(Rect::new(0, 0, 120, 20)), 17);

        let area = anchor(trigger(), Rect::new(0, 0, 60, 20), 20, 40, Align::End);
        assert!(area.height <= 17);
    }

    #[test]
    fn scroll_follows_row() {
        assert_eq!(scroll_to_show(0, 3, 10, 20), 0);
        assert_eq!(scroll_to_show(0, 14, 10, 20), 5);
        assert_eq!(scroll_to_show(8, 2, 10, 20), 2);
        assert_eq!(scroll_to_show(15, 19, 10, 20), 10);
        assert_eq!(scroll_to_show(3, 3, 0, 20), 0);
    }
}

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme;

pub struct StatusBar;

impl StatusBar {
    /// Mode label on the left, key hints on the right; hints are dropped
    /// first when the terminal is narrow.
    pub fn render(frame: &mut Frame, area: Rect, mode: &str, hints: &str) {
        let w = area.width as usize;
        let left = format!(" {} ", mode);
        let hints = if left.chars().count() + hints.chars().count() <= w {
            hints
        } else {
            ""
        };

        let padding = " ".repeat(w.saturating_sub(left.chars().count() + hints.chars().count()));
        let status = theme::current().status;

        let line = Line::from(vec![
            Span::styled(left, status),
            Span::styled(padding, status),
            Span::styled(hints.to_string(), status),
        ]);

        frame.render_widget(Paragraph::new(line).style(status), area);
    }
}

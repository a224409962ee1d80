use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::notify::{ToastKind, Toasts};
use crate::theme;

pub struct ToastView;

impl ToastView {
    /// Stack toasts upwards from the bottom-right corner of `area`.
    pub fn render(frame: &mut Frame, area: Rect, toasts: &Toasts) {
        if toasts.is_empty() {
            return;
        }
        let mut y = area.bottom();
        for toast in toasts.iter().collect::<Vec<_>>().into_iter().rev() {
            if y <= area.y {
                break;
            }
            y -= 1;

            let (icon, style) = match toast.kind {
                ToastKind::Success => ("\u{2713}", theme::current().success),
                ToastKind::Error => ("\u{2717}", theme::current().error),
            };
            let text = format!(" {} {} ", icon, toast.message);
            let w = (text.chars().count() as u16).min(area.width);
            let rect = Rect::new(area.right() - w, y, w, 1);

            frame.render_widget(Clear, rect);
            frame.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), rect);
        }
    }
}

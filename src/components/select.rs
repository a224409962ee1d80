use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use super::popover::{self, Align};
use crate::datetime::TimeField;
use crate::theme;

/// Width of a closed select, e.g. `[ 09 ▾]`.
pub const SELECT_WIDTH: u16 = 7;

/// Visible option rows of an open dropdown before it scrolls.
pub const DROPDOWN_MAX_ROWS: u16 = 8;

/// An open option list for one of the time selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown {
    pub field: TimeField,
    pub highlighted: usize,
}

impl Dropdown {
    /// Open with the current value highlighted, or the first option.
    pub fn open(field: TimeField, options: &[String], current: &str) -> Self {
        let highlighted = options.iter().position(|o| o == current).unwrap_or(0);
        Self { field, highlighted }
    }

    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.highlighted = 0;
            return;
        }
        let last = len as isize - 1;
        self.highlighted = (self.highlighted as isize + delta).clamp(0, last) as usize;
    }

    pub fn first(&mut self) {
        self.highlighted = 0;
    }

    pub fn last(&mut self, len: usize) {
        self.highlighted = len.saturating_sub(1);
    }
}

/// The closed select as it sits in the time row.
pub fn trigger_span(value: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        theme::current().focus
    } else {
        theme::current().border
    };
    Span::styled(format!("[ {:<2} \u{25be}]", value), style)
}

/// Draw the open option list under `trigger`.
pub fn render_dropdown(
    frame: &mut Frame,
    trigger: Rect,
    dropdown: &Dropdown,
    options: &[String],
    current: &str,
) {
    let rows = (options.len() as u16).min(DROPDOWN_MAX_ROWS);
    let area = popover::anchor(trigger, frame.area(), SELECT_WIDTH, rows + 2, Align::Start);
    if area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::from(dropdown.field.label()))
        .title_style(theme::current().dim)
        .borders(Borders::ALL)
        .border_style(theme::current().border);

    let items: Vec<ListItem> = options
        .iter()
        .map(|o| {
            let style = if o == current {
                theme::current().selected
            } else {
                Default::default()
            };
            ListItem::new(Span::styled(format!(" {} ", o), style))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::current().focus)
        .highlight_symbol("");

    let mut state = ListState::default().with_selected(Some(dropdown.highlighted));
    frame.render_stateful_widget(list, area, &mut state);
}

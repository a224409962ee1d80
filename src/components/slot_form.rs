use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::picker::{DateTimePicker, TRIGGER_LABEL};
use crate::datetime::parse_slot_datetime;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Value,
    Trigger,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Value => FormField::Trigger,
            FormField::Trigger => FormField::Value,
        }
    }
}

/// The admin form hosting the picker: a slot value and its trigger.
pub struct SlotForm;

impl SlotForm {
    /// Draw the form and return where the picker trigger sits.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        value: &str,
        active: FormField,
        picker: &DateTimePicker,
        today: NaiveDate,
    ) -> Rect {
        let t = theme::current();
        let block = Block::default()
            .title(" Appointment slot ")
            .title_style(t.header)
            .borders(Borders::ALL)
            .border_style(t.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1), // value + trigger
            Constraint::Length(1), // parsed preview
            Constraint::Length(1), // today
            Constraint::Min(0),
        ])
        .split(inner);

        let trigger_w = TRIGGER_LABEL.chars().count() as u16;
        let value_row = Layout::horizontal([Constraint::Min(10), Constraint::Length(trigger_w)])
            .spacing(1)
            .split(rows[0]);

        render_field(frame, value_row[0], "Value:", value, active == FormField::Value);
        picker.render_trigger(frame, value_row[1], active == FormField::Trigger);

        let preview = match parse_slot_datetime(value) {
            Ok(dt) => Span::raw(dt.format("%a %b %-d, %Y  %I:%M %p").to_string()),
            Err(e) => Span::styled(format!("{} (picker uses now)", e), t.dim),
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::styled(format!("{:<8}", "Slot:"), t.dim), preview])),
            rows[1],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(format!("{:<8}", "Today:"), t.dim),
                Span::styled(today.format("%Y-%m-%d").to_string(), t.dim),
            ])),
            rows[2],
        );

        value_row[1]
    }
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, active: bool) {
    let cursor = if active { "_" } else { "" };

    let style = if active {
        Style::default()
            .fg(ratatui::style::Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let spans = vec![
        Span::styled(format!("{:<8}", label), theme::current().dim),
        Span::styled(format!("{}{}", value, cursor), style),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

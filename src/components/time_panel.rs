use chrono::NaiveDateTime;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use super::picker::PickerFocus;
use super::select::{self, SELECT_WIDTH};
use crate::datetime::{display_hour, display_minute, display_period, TimeField};
use crate::theme;

/// Row of the three selects, counted from the top of the time panel.
pub const SELECTS_ROW: u16 = 2;
pub const CONFIRM_ROW: u16 = 4;
pub const HEIGHT: u16 = 5;

const LEFT_PAD: u16 = 1;

/// Column of a select inside the panel's inner area.
pub fn select_column(field: TimeField) -> u16 {
    LEFT_PAD
        + match field {
            TimeField::Hour => 0,
            TimeField::Minute => SELECT_WIDTH + 3,
            TimeField::Period => 2 * SELECT_WIDTH + 4,
        }
}

/// The current display value of one select.
pub fn display(field: TimeField, dt: &NaiveDateTime) -> String {
    match field {
        TimeField::Hour => display_hour(dt),
        TimeField::Minute => display_minute(dt),
        TimeField::Period => display_period(dt),
    }
}

pub fn lines(dt: &NaiveDateTime, focus: PickerFocus, width: u16) -> Vec<Line<'static>> {
    let t = theme::current();
    let pad = " ".repeat(LEFT_PAD as usize);
    let focused = |field| focus == PickerFocus::Time(field);

    let rule = Line::from(Span::styled(
        "\u{2500}".repeat(width as usize),
        t.border,
    ));
    let label = Line::from(vec![
        Span::raw(pad.clone()),
        Span::styled("Time", t.header.add_modifier(Modifier::UNDERLINED)),
    ]);

    let selects = Line::from(vec![
        Span::raw(pad.clone()),
        select::trigger_span(&display(TimeField::Hour, dt), focused(TimeField::Hour)),
        Span::styled(" : ", t.header),
        select::trigger_span(&display(TimeField::Minute, dt), focused(TimeField::Minute)),
        Span::raw(" "),
        select::trigger_span(&display(TimeField::Period, dt), focused(TimeField::Period)),
    ]);

    let button_w = (width as usize).saturating_sub(2 * LEFT_PAD as usize);
    let button_style = if focus == PickerFocus::Confirm {
        t.focus.add_modifier(Modifier::REVERSED)
    } else {
        t.button
    };
    let confirm = Line::from(vec![
        Span::raw(pad),
        Span::styled(
            format!("{:^w$}", "\u{2713} Confirm Time", w = button_w),
            button_style,
        ),
    ]);

    vec![rule, label, selects, Line::default(), confirm]
}

//! Calendar and time-of-day picker shown in a popover under its trigger.
//!
//! The picker never owns the date-time it edits. Every handler takes the
//! host's current value as a string, re-parses it, and reports a new
//! date-time through `on_change`. Failures are logged and turned into an
//! error toast; `on_change` is not called in that case.

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::popover::{self, Align};
use super::select::{self, Dropdown, DROPDOWN_MAX_ROWS, SELECT_WIDTH};
use super::{calendar_panel, time_panel};
use crate::datetime::{
    apply_field_change, parse_or_now, time_picker_values, DateTimeError, FieldChange,
    TimeField, TimePickerValues,
};
use crate::notify::Notifier;
use crate::theme;

/// Inner width of the panel; fits the time row and the month grid.
pub const INNER_WIDTH: u16 = 28;
pub const PANEL_WIDTH: u16 = INNER_WIDTH + 2;

pub const TRIGGER_LABEL: &str = "[ \u{25a6} Pick ]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerFocus {
    Calendar,
    Time(TimeField),
    Confirm,
}

impl PickerFocus {
    pub fn next(self) -> Self {
        match self {
            PickerFocus::Calendar => PickerFocus::Time(TimeField::Hour),
            PickerFocus::Time(TimeField::Hour) => PickerFocus::Time(TimeField::Minute),
            PickerFocus::Time(TimeField::Minute) => PickerFocus::Time(TimeField::Period),
            PickerFocus::Time(TimeField::Period) => PickerFocus::Confirm,
            PickerFocus::Confirm => PickerFocus::Calendar,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            PickerFocus::Calendar => PickerFocus::Confirm,
            PickerFocus::Time(TimeField::Hour) => PickerFocus::Calendar,
            PickerFocus::Time(TimeField::Minute) => PickerFocus::Time(TimeField::Hour),
            PickerFocus::Time(TimeField::Period) => PickerFocus::Time(TimeField::Minute),
            PickerFocus::Confirm => PickerFocus::Time(TimeField::Period),
        }
    }
}

#[derive(Debug)]
pub struct DateTimePicker {
    open: bool,
    align: Align,
    focus: PickerFocus,
    /// Calendar keyboard cursor; `None` follows the selected day.
    cursor: Option<NaiveDate>,
    dropdown: Option<Dropdown>,
    scroll: u16,
    options: TimePickerValues,
}

impl Default for DateTimePicker {
    fn default() -> Self {
        Self::new(Align::default())
    }
}

impl DateTimePicker {
    pub fn new(align: Align) -> Self {
        Self {
            open: false,
            align,
            focus: PickerFocus::Calendar,
            cursor: None,
            dropdown: None,
            scroll: 0,
            options: time_picker_values(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focus(&self) -> PickerFocus {
        self.focus
    }

    pub fn dropdown(&self) -> Option<&Dropdown> {
        self.dropdown.as_ref()
    }

    pub fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.focus = PickerFocus::Calendar;
            self.cursor = None;
            self.scroll = 0;
        }
        if !open {
            self.dropdown = None;
        }
        self.open = open;
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    /// Pick a calendar day, keeping the current hour and minute.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        value: &str,
        on_change: &mut dyn FnMut(NaiveDateTime),
        notifier: &mut dyn Notifier,
    ) {
        self.cursor = Some(date);
        commit(
            value,
            Ok(FieldChange::Date(date)),
            "Error selecting date",
            on_change,
            notifier,
        );
    }

    /// Commit one option of the hour, minute or period select.
    pub fn select_option(
        &mut self,
        field: TimeField,
        option: &str,
        value: &str,
        on_change: &mut dyn FnMut(NaiveDateTime),
        notifier: &mut dyn Notifier,
    ) {
        let failure = match field {
            TimeField::Hour => "Error setting hour",
            TimeField::Minute => "Error setting minute",
            TimeField::Period => "Error setting AM/PM",
        };
        commit(
            value,
            FieldChange::from_option(field, option),
            failure,
            on_change,
            notifier,
        );
    }

    /// Close the panel; the value is left as it is.
    pub fn confirm(&mut self, notifier: &mut dyn Notifier) {
        self.set_open(false);
        notifier.success("Time confirmed");
    }

    /// Handle a key while open. Returns whether the key was used.
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        value: &str,
        on_change: &mut dyn FnMut(NaiveDateTime),
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !self.open {
            return false;
        }

        if let Some(dropdown) = self.dropdown {
            self.handle_dropdown_key(dropdown, key.code, value, on_change, notifier);
            return true;
        }

        match key.code {
            KeyCode::Esc => self.set_open(false),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            code => match self.focus {
                PickerFocus::Calendar => self.handle_calendar_key(code, value, on_change, notifier),
                PickerFocus::Time(field) => {
                    if matches!(
                        code,
                        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('j')
                    ) {
                        let current = time_panel::display(field, &parse_or_now(value));
                        self.dropdown =
                            Some(Dropdown::open(field, self.options_for(field), &current));
                    }
                }
                PickerFocus::Confirm => {
                    if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                        self.confirm(notifier);
                    }
                }
            },
        }
        true
    }

    fn handle_calendar_key(
        &mut self,
        code: KeyCode,
        value: &str,
        on_change: &mut dyn FnMut(NaiveDateTime),
        notifier: &mut dyn Notifier,
    ) {
        let cursor = self
            .cursor
            .unwrap_or_else(|| parse_or_now(value).date());
        let moved = match code {
            KeyCode::Left | KeyCode::Char('h') => calendar_panel::move_days(cursor, -1),
            KeyCode::Right | KeyCode::Char('l') => calendar_panel::move_days(cursor, 1),
            KeyCode::Up | KeyCode::Char('k') => calendar_panel::move_days(cursor, -7),
            KeyCode::Down | KeyCode::Char('j') => calendar_panel::move_days(cursor, 7),
            KeyCode::Char('[') | KeyCode::PageUp => calendar_panel::shift_month(cursor, -1),
            KeyCode::Char(']') | KeyCode::PageDown => calendar_panel::shift_month(cursor, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_date(cursor, value, on_change, notifier);
                return;
            }
            _ => return,
        };
        self.cursor = Some(moved);
    }

    fn handle_dropdown_key(
        &mut self,
        mut dropdown: Dropdown,
        code: KeyCode,
        value: &str,
        on_change: &mut dyn FnMut(NaiveDateTime),
        notifier: &mut dyn Notifier,
    ) {
        let len = self.options_for(dropdown.field).len();
        let page = DROPDOWN_MAX_ROWS as isize;
        match code {
            KeyCode::Esc => {
                self.dropdown = None;
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dropdown = None;
                let option = self
                    .options_for(dropdown.field)
                    .get(dropdown.highlighted)
                    .cloned();
                if let Some(option) = option {
                    self.select_option(dropdown.field, &option, value, on_change, notifier);
                }
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => dropdown.move_by(-1, len),
            KeyCode::Down | KeyCode::Char('j') => dropdown.move_by(1, len),
            KeyCode::PageUp => dropdown.move_by(-page, len),
            KeyCode::PageDown => dropdown.move_by(page, len),
            KeyCode::Home => dropdown.first(),
            KeyCode::End => dropdown.last(len),
            _ => {}
        }
        self.dropdown = Some(dropdown);
    }

    fn options_for(&self, field: TimeField) -> &[String] {
        match field {
            TimeField::Hour => &self.options.hours,
            TimeField::Minute => &self.options.minutes,
            TimeField::Period => &self.options.periods,
        }
    }

    pub fn render_trigger(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme::current();
        let style = if self.open {
            t.selected
        } else if focused {
            t.focus
        } else {
            t.button
        };
        frame.render_widget(Paragraph::new(Span::styled(TRIGGER_LABEL, style)), area);
    }

    /// Draw the popover anchored to `trigger`, if open.
    pub fn render(&mut self, frame: &mut Frame, trigger: Rect, value: &str, today: NaiveDate) {
        if !self.open {
            return;
        }

        let selected = parse_or_now(value);
        let cursor = self.cursor.unwrap_or(selected.date());

        let mut lines = calendar_panel::lines(
            cursor,
            selected.date(),
            today,
            self.focus == PickerFocus::Calendar,
            INNER_WIDTH,
        );
        lines.extend(time_panel::lines(&selected, self.focus, INNER_WIDTH));
        let time_top = calendar_panel::HEIGHT;
        let content_h = time_top + time_panel::HEIGHT;

        let area = popover::anchor(
            trigger,
            frame.area(),
            PANEL_WIDTH,
            content_h + 2,
            self.align,
        );
        if area.height < 3 {
            return;
        }

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::current().border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let focus_row = match self.focus {
            PickerFocus::Calendar => calendar_panel::row_of(cursor),
            PickerFocus::Time(_) => time_top + time_panel::SELECTS_ROW,
            PickerFocus::Confirm => time_top + time_panel::CONFIRM_ROW,
        };
        self.scroll = popover::scroll_to_show(self.scroll, focus_row, inner.height, content_h);

        frame.render_widget(
            Paragraph::new(lines).scroll((self.scroll, 0)),
            inner,
        );

        if let Some(dropdown) = self.dropdown {
            let row = time_top + time_panel::SELECTS_ROW;
            if row < self.scroll || row - self.scroll >= inner.height {
                return;
            }
            let select_area = Rect::new(
                inner.x + time_panel::select_column(dropdown.field),
                inner.y + row - self.scroll,
                SELECT_WIDTH,
                1,
            );
            let current = time_panel::display(dropdown.field, &selected);
            select::render_dropdown(
                frame,
                select_area,
                &dropdown,
                self.options_for(dropdown.field),
                &current,
            );
        }
    }

    /// Key hints for the status bar.
    pub fn hints(&self) -> &'static str {
        if self.dropdown().is_some() {
            return " jk:Move Enter:Choose Esc:Back";
        }
        match self.focus() {
            PickerFocus::Calendar => " hjkl:Day [/]:Month Enter:Pick Tab:Next Esc:Close",
            PickerFocus::Time(_) => " Enter:Open Tab:Next S-Tab:Prev Esc:Close",
            PickerFocus::Confirm => " Enter:Confirm Tab:Next Esc:Close",
        }
    }
}

fn commit(
    value: &str,
    change: Result<FieldChange, DateTimeError>,
    failure: &str,
    on_change: &mut dyn FnMut(NaiveDateTime),
    notifier: &mut dyn Notifier,
) {
    let current = parse_or_now(value);
    match change.and_then(|change| apply_field_change(current, change)) {
        Ok(next) => {
            tracing::debug!("picker emitting {}", next);
            on_change(next);
        }
        Err(e) => {
            tracing::error!("{}: {}", failure, e);
            notifier.error(failure);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Timelike};
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    #[derive(Default)]
    struct Recorder {
        successes: Vec<String>,
        errors: Vec<String>,
    }

    impl Notifier for Recorder {
        fn success(&mut self, message: &str) {
            self.successes.push(message.to_string());
        }

        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn open_picker() -> DateTimePicker {
        let mut picker = DateTimePicker::default();
        picker.toggle();
        picker
    }

    /// Run `f` against a fresh recorder and collect what it emitted.
    fn run(
        f: impl FnOnce(&mut dyn FnMut(NaiveDateTime), &mut Recorder),
    ) -> (Vec<NaiveDateTime>, Recorder) {
        let mut emitted = Vec::new();
        let mut recorder = Recorder::default();
        f(&mut |dt: NaiveDateTime| emitted.push(dt), &mut recorder);
        (emitted, recorder)
    }

    #[test]
    fn hour_selection_keeps_date_and_minute() {
        let mut picker = open_picker();
        let (emitted, rec) = run(|cb, n| {
            picker.select_option(TimeField::Hour, "11", "2024-03-15T09:05:00", cb, n)
        });
        assert_eq!(emitted, vec![at(2024, 3, 15, 11, 5)]);
        assert!(rec.errors.is_empty());
    }

    #[test]
    fn period_selection_moves_to_evening() {
        let mut picker = open_picker();
        let (emitted, _) = run(|cb, n| {
            picker.select_option(TimeField::Period, "PM", "2024-03-15T09:05:00", cb, n)
        });
        assert_eq!(emitted, vec![at(2024, 3, 15, 21, 5)]);
    }

    #[test]
    fn matching_period_emits_unchanged_value() {
        let mut picker = open_picker();
        let (emitted, _) = run(|cb, n| {
            picker.select_option(TimeField::Period, "AM", "2024-03-15T09:05:00", cb, n)
        });
        assert_eq!(emitted, vec![at(2024, 3, 15, 9, 5)]);
    }

    #[test]
    fn minute_selection_keeps_hour() {
        let mut picker = open_picker();
        let (emitted, _) = run(|cb, n| {
            picker.select_option(TimeField::Minute, "59", "2024-03-15T21:05:00", cb, n)
        });
        assert_eq!(emitted, vec![at(2024, 3, 15, 21, 59)]);
    }

    #[test]
    fn date_pick_keeps_time_of_day() {
        let mut picker = open_picker();
        let day = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let (emitted, rec) =
            run(|cb, n| picker.select_date(day, "2024-03-15T14:30:00", cb, n));
        assert_eq!(emitted, vec![at(2024, 3, 20, 14, 30)]);
        assert!(rec.errors.is_empty());
        assert!(picker.is_open());
    }

    #[test]
    fn bad_option_reports_error_without_callback() {
        let mut picker = open_picker();
        let (emitted, rec) = run(|cb, n| {
            picker.select_option(TimeField::Hour, "13", "2024-03-15T09:05:00", cb, n)
        });
        assert!(emitted.is_empty());
        assert_eq!(rec.errors, vec!["Error setting hour"]);
        assert!(picker.is_open());

        let (emitted, rec) = run(|cb, n| {
            picker.select_option(TimeField::Period, "noon", "2024-03-15T09:05:00", cb, n)
        });
        assert!(emitted.is_empty());
        assert_eq!(rec.errors, vec!["Error setting AM/PM"]);
    }

    #[test]
    fn bad_minute_reports_error_without_callback() {
        let mut picker = open_picker();
        for option in ["60", "x"] {
            let (emitted, rec) = run(|cb, n| {
                picker.select_option(TimeField::Minute, option, "2024-03-15T09:05:00", cb, n)
            });
            assert!(emitted.is_empty(), "option {option:?}");
            assert_eq!(rec.errors, vec!["Error setting minute"]);
            assert!(rec.successes.is_empty());
            assert!(picker.is_open());
        }
    }

    #[test]
    fn malformed_value_falls_back_silently() {
        let mut picker = open_picker();
        let (emitted, rec) = run(|cb, n| {
            picker.select_option(TimeField::Minute, "30", "garbage", cb, n)
        });
        assert_eq!(emitted.len(), 1);
        assert_eq!(emitted[0].minute(), 30);
        assert_eq!(emitted[0].date(), Local::now().date_naive());
        assert!(rec.errors.is_empty());
        assert!(rec.successes.is_empty());
    }

    #[test]
    fn confirm_closes_and_notifies() {
        let mut picker = open_picker();
        let (emitted, rec) = run(|cb, n| {
            picker.handle_key(key(KeyCode::BackTab), "2024-03-15T09:05:00", cb, n);
            assert_eq!(picker.focus(), PickerFocus::Confirm);
            picker.handle_key(key(KeyCode::Enter), "2024-03-15T09:05:00", cb, n);
        });
        assert!(!picker.is_open());
        assert!(emitted.is_empty());
        assert_eq!(rec.successes, vec!["Time confirmed"]);
    }

    #[test]
    fn keyboard_hour_selection() {
        let mut picker = open_picker();
        let value = "2024-03-15T09:05:00";
        let (emitted, _) = run(|cb, n| {
            picker.handle_key(key(KeyCode::Tab), value, cb, n);
            picker.handle_key(key(KeyCode::Enter), value, cb, n);
            assert_eq!(picker.dropdown().map(|d| d.highlighted), Some(8));
            picker.handle_key(key(KeyCode::Down), value, cb, n);
            picker.handle_key(key(KeyCode::Down), value, cb, n);
            picker.handle_key(key(KeyCode::Enter), value, cb, n);
        });
        assert_eq!(emitted, vec![at(2024, 3, 15, 11, 5)]);
        assert!(picker.dropdown().is_none());
        assert!(picker.is_open());
    }

    #[test]
    fn keyboard_day_pick_moves_cursor_from_selected_day() {
        let mut picker = open_picker();
        let value = "2024-03-15T14:30:00";
        let (emitted, _) = run(|cb, n| {
            picker.handle_key(key(KeyCode::Right), value, cb, n);
            picker.handle_key(key(KeyCode::Down), value, cb, n);
            picker.handle_key(key(KeyCode::Enter), value, cb, n);
        });
        assert_eq!(emitted, vec![at(2024, 3, 23, 14, 30)]);
    }

    #[test]
    fn escape_closes_dropdown_then_panel() {
        let mut picker = open_picker();
        let value = "2024-03-15T09:05:00";
        let (emitted, _) = run(|cb, n| {
            picker.handle_key(key(KeyCode::Tab), value, cb, n);
            picker.handle_key(key(KeyCode::Enter), value, cb, n);
            picker.handle_key(key(KeyCode::Esc), value, cb, n);
            assert!(picker.dropdown().is_none());
            assert!(picker.is_open());
            picker.handle_key(key(KeyCode::Esc), value, cb, n);
        });
        assert!(emitted.is_empty());
        assert!(!picker.is_open());
    }

    #[test]
    fn closed_picker_ignores_keys() {
        let mut picker = DateTimePicker::default();
        let (emitted, _) = run(|cb, n| {
            assert!(!picker.handle_key(key(KeyCode::Enter), "2024-03-15T09:05:00", cb, n));
        });
        assert!(emitted.is_empty());
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn renders_panel_under_trigger() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut picker = open_picker();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        terminal
            .draw(|frame| {
                picker.render(frame, Rect::new(60, 1, 12, 1), "2024-03-15T21:05:00", today)
            })
            .unwrap();
        let text = screen(&terminal);
        assert!(text.contains("March 2024"));
        assert!(text.contains("Confirm Time"));
        assert!(text.contains("PM"));
    }

    #[test]
    fn short_terminal_scrolls_to_focus() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let mut picker = open_picker();
        picker.focus = PickerFocus::Confirm;
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        terminal
            .draw(|frame| {
                picker.render(frame, Rect::new(40, 0, 12, 1), "2024-03-15T21:05:00", today)
            })
            .unwrap();
        assert!(picker.scroll > 0);
        assert!(screen(&terminal).contains("Confirm Time"));
    }
}

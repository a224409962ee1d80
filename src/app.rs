use std::time::Instant;

use chrono::{Local, NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::components::slot_form::FormField;
use crate::components::DateTimePicker;
use crate::config::Config;
use crate::datetime::{encode_slot_datetime, parse_or_now};
use crate::notify::Toasts;

/// The admin form: owns the slot value and hosts the picker.
pub struct App {
    pub running: bool,
    pub value: String,
    pub active_field: FormField,
    pub today: NaiveDate,
    pub picker: DateTimePicker,
    pub toasts: Toasts,
    /// Values received from the picker since start.
    pub changes: usize,
}

impl App {
    pub fn new(config: &Config, initial: Option<String>) -> Self {
        let value = initial.unwrap_or_else(|| encode_slot_datetime(&parse_or_now("")));
        tracing::info!("editing slot {:?}", value);

        Self {
            running: true,
            value,
            active_field: FormField::Trigger,
            today: Local::now().date_naive(),
            picker: DateTimePicker::new(config.align),
            toasts: Toasts::new(config.toast_ttl()),
            changes: 0,
        }
    }

    /// Periodic housekeeping between key events.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.expire(now);
        self.today = Local::now().date_naive();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.picker.is_open() {
            let Self {
                picker,
                value,
                toasts,
                changes,
                ..
            } = self;
            let current = value.clone();
            let mut on_change = |dt: NaiveDateTime| {
                *value = encode_slot_datetime(&dt);
                *changes += 1;
                tracing::info!("slot set to {}", value);
            };
            picker.handle_key(key, &current, &mut on_change, toasts);
            return;
        }

        match self.active_field {
            FormField::Value => self.handle_value_key(key.code),
            FormField::Trigger => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.picker.toggle(),
                KeyCode::Tab | KeyCode::BackTab => self.active_field = self.active_field.next(),
                KeyCode::Char('q') => self.running = false,
                _ => {}
            },
        }
    }

    fn handle_value_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Enter | KeyCode::Esc => {
                self.active_field = self.active_field.next();
            }
            KeyCode::Backspace => {
                self.value.pop();
            }
            KeyCode::Char(c) => self.value.push(c),
            _ => {}
        }
    }

    pub fn mode_label(&self) -> &'static str {
        if self.picker.is_open() {
            "[Picker]"
        } else {
            match self.active_field {
                FormField::Value => "[Edit value]",
                FormField::Trigger => "[Form]",
            }
        }
    }

    pub fn hints(&self) -> &'static str {
        if self.picker.is_open() {
            return self.picker.hints();
        }
        match self.active_field {
            FormField::Value => " Type to edit Tab/Enter:Done",
            FormField::Trigger => " Enter:Open picker Tab:Edit value q:Quit",
        }
    }
}

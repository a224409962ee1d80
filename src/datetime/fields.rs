use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::DateTimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub const ALL: [Period; 2] = [Period::Am, Period::Pm];

    pub fn of(dt: &NaiveDateTime) -> Self {
        if dt.hour() >= 12 {
            Period::Pm
        } else {
            Period::Am
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Am => f.write_str("AM"),
            Period::Pm => f.write_str("PM"),
        }
    }
}

impl FromStr for Period {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "AM" | "am" => Ok(Period::Am),
            "PM" | "pm" => Ok(Period::Pm),
            other => Err(DateTimeError::InvalidOption {
                field: "period",
                value: other.to_string(),
            }),
        }
    }
}

/// An hour on the 12-hour clock face, always in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hour12(u32);

impl Hour12 {
    pub fn new(hour: u32) -> Option<Self> {
        (1..=12).contains(&hour).then_some(Self(hour))
    }

    /// The 24-hour value this clock hour has in the given half of the day.
    pub fn to_24h(self, period: Period) -> u32 {
        match (period, self.0) {
            (Period::Am, 12) => 0,
            (Period::Am, h) => h,
            (Period::Pm, 12) => 12,
            (Period::Pm, h) => h + 12,
        }
    }
}

impl FromStr for Hour12 {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DateTimeError::InvalidOption {
            field: "hour",
            value: s.to_string(),
        };
        let hour: u32 = s.trim().parse().map_err(|_| invalid())?;
        Hour12::new(hour).ok_or_else(invalid)
    }
}

/// Which select of the time panel an option belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
    Period,
}

impl TimeField {
    pub fn label(self) -> &'static str {
        match self {
            TimeField::Hour => "Hour",
            TimeField::Minute => "Min",
            TimeField::Period => "AM/PM",
        }
    }
}

/// A user edit of exactly one component of the picked date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldChange {
    Date(NaiveDate),
    Hour(Hour12),
    Minute(u32),
    Period(Period),
}

impl FieldChange {
    /// Read a select option into a change for `field`.
    pub fn from_option(field: TimeField, option: &str) -> Result<Self, DateTimeError> {
        match field {
            TimeField::Hour => option.parse().map(FieldChange::Hour),
            TimeField::Minute => option
                .trim()
                .parse()
                .map(FieldChange::Minute)
                .map_err(|_| DateTimeError::InvalidOption {
                    field: "minute",
                    value: option.to_string(),
                }),
            TimeField::Period => option.parse().map(FieldChange::Period),
        }
    }
}

/// Apply one field change to `current`, leaving the other fields alone.
///
/// A date change keeps hour and minute but resets seconds, since the
/// calendar hands back a bare day.
pub fn apply_field_change(
    current: NaiveDateTime,
    change: FieldChange,
) -> Result<NaiveDateTime, DateTimeError> {
    match change {
        FieldChange::Date(date) => date
            .and_hms_opt(current.hour(), current.minute(), 0)
            .ok_or(DateTimeError::OutOfRange {
                field: "hour",
                value: current.hour(),
            }),
        FieldChange::Hour(hour) => {
            let hour = hour.to_24h(Period::of(&current));
            current
                .with_hour(hour)
                .ok_or(DateTimeError::OutOfRange { field: "hour", value: hour })
        }
        FieldChange::Minute(minute) => current
            .with_minute(minute)
            .ok_or(DateTimeError::OutOfRange {
                field: "minute",
                value: minute,
            }),
        FieldChange::Period(period) => {
            let hour = current.hour();
            let hour = match (period, Period::of(&current)) {
                (Period::Pm, Period::Am) => hour + 12,
                (Period::Am, Period::Pm) => hour - 12,
                _ => hour,
            };
            current
                .with_hour(hour)
                .ok_or(DateTimeError::OutOfRange { field: "hour", value: hour })
        }
    }
}

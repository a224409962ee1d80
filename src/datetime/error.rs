use thiserror::Error;

/// Failures of the date-time helpers behind the picker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    #[error("empty date-time value")]
    Empty,

    #[error("unrecognised date-time value {0:?}")]
    Unparseable(String),

    #[error("invalid {field} option {value:?}")]
    InvalidOption { field: &'static str, value: String },

    #[error("{field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: u32 },
}

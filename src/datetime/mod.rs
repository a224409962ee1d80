pub mod error;
pub mod fields;
pub mod format;
pub mod options;
pub mod parse;

pub use error::DateTimeError;
pub use fields::{apply_field_change, FieldChange, Period, TimeField};
pub use format::{display_hour, display_minute, display_period};
pub use options::{time_picker_values, TimePickerValues};
pub use parse::{encode_slot_datetime, parse_or_now, parse_slot_datetime};

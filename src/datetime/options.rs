use super::Period;

/// Option lists for the three time selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimePickerValues {
    pub hours: Vec<String>,
    pub minutes: Vec<String>,
    pub periods: Vec<String>,
}

pub fn time_picker_values() -> TimePickerValues {
    TimePickerValues {
        hours: (1..=12).map(|h| format!("{:02}", h)).collect(),
        minutes: (0..60).map(|m| format!("{:02}", m)).collect(),
        periods: Period::ALL.iter().map(|p| p.to_string()).collect(),
    }
}

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Timelike};

use super::DateTimeError;

/// Format used when handing a picked value back to the host form.
pub const SLOT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a slot value as stored by the host form.
///
/// RFC 3339 values carrying an offset are converted to local time first;
/// everything else is read as a naive local date-time. A bare date means
/// midnight.
pub fn parse_slot_datetime(value: &str) -> Result<NaiveDateTime, DateTimeError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateTimeError::Empty);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| DateTimeError::Unparseable(value.to_string()))
}

/// Collapse a parse result into a usable date-time.
pub fn with_fallback(
    parsed: Result<NaiveDateTime, DateTimeError>,
    default: NaiveDateTime,
) -> NaiveDateTime {
    parsed.unwrap_or(default)
}

/// The Parsed Date: the slot value, or the current local time when the
/// value can't be read.
pub fn parse_or_now(value: &str) -> NaiveDateTime {
    let parsed = parse_slot_datetime(value);
    if let Err(ref e) = parsed {
        tracing::debug!("falling back to now: {}", e);
    }
    with_fallback(parsed, now())
}

pub fn encode_slot_datetime(dt: &NaiveDateTime) -> String {
    dt.format(SLOT_FORMAT).to_string()
}

fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};

    fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parses_supported_layouts() {
        let expected = ymd_hm(2024, 3, 15, 9, 5);
        assert_eq!(parse_slot_datetime("2024-03-15T09:05:00"), Ok(expected));
        assert_eq!(parse_slot_datetime("2024-03-15T09:05"), Ok(expected));
        assert_eq!(parse_slot_datetime("2024-03-15 09:05"), Ok(expected));
        assert_eq!(parse_slot_datetime("2024-03-15 09:05:00.000"), Ok(expected));
        assert_eq!(parse_slot_datetime("  2024-03-15T09:05:00  "), Ok(expected));
        assert_eq!(
            parse_slot_datetime("2024-03-15"),
            Ok(ymd_hm(2024, 3, 15, 0, 0))
        );
    }

    #[test]
    fn rfc3339_is_converted_to_local_time() {
        let input = "2024-03-15T09:05:00+00:00";
        let expected = chrono::Utc
            .with_ymd_and_hms(2024, 3, 15, 9, 5, 0)
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(parse_slot_datetime(input), Ok(expected));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_slot_datetime(""), Err(DateTimeError::Empty));
        assert_eq!(parse_slot_datetime("   "), Err(DateTimeError::Empty));
        assert!(matches!(
            parse_slot_datetime("next tuesday"),
            Err(DateTimeError::Unparseable(_))
        ));
        assert!(parse_slot_datetime("2024-13-40T25:61").is_err());
        assert!(parse_slot_datetime("2023-02-29").is_err());
    }

    #[test]
    fn fallback_only_used_on_error() {
        let default = ymd_hm(2000, 1, 1, 0, 0);
        let good = ymd_hm(2024, 3, 15, 9, 5);
        assert_eq!(with_fallback(Ok(good), default), good);
        assert_eq!(with_fallback(Err(DateTimeError::Empty), default), default);
    }

    #[test]
    fn malformed_value_falls_back_to_now() {
        let before = Local::now().naive_local().with_nanosecond(0).unwrap();
        let parsed = parse_or_now("not a date");
        let after = Local::now().naive_local();
        assert!(parsed >= before && parsed <= after);
        assert_eq!(parsed.nanosecond(), 0);
    }

    #[test]
    fn encoded_value_round_trips() {
        let dt = ymd_hm(2024, 12, 31, 23, 59);
        let encoded = encode_slot_datetime(&dt);
        assert_eq!(encoded, "2024-12-31T23:59:00");
        let back = parse_slot_datetime(&encoded).unwrap();
        assert_eq!(back, dt);
        assert_eq!(back.day(), 31);
    }
}

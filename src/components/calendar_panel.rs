use chrono::{Datelike, Duration, Months, NaiveDate};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::theme;

const DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Rows above the first week: title and weekday header.
pub const GRID_TOP: u16 = 2;

/// Weeks always drawn, so the panel height doesn't jump between months.
pub const WEEK_ROWS: u16 = 6;

pub const HEIGHT: u16 = GRID_TOP + WEEK_ROWS;

/// Month grid around `cursor`, with `selected` and `today` marked.
pub fn lines(
    cursor: NaiveDate,
    selected: NaiveDate,
    today: NaiveDate,
    focused: bool,
    width: u16,
) -> Vec<Line<'static>> {
    let t = theme::current();
    let year = cursor.year();
    let month = cursor.month();

    let title = format!("\u{2039} {} {} \u{203a}", month_name(month), year);
    let mut out = vec![centered(Line::from(Span::styled(title, t.header)), width)];

    let header: Vec<Span> = DAY_NAMES
        .iter()
        .map(|d| Span::styled(format!("{:>2} ", d), t.dim))
        .collect();
    out.push(centered(Line::from(header), width));

    let first = first_of_month(cursor);
    let lead = first.weekday().num_days_from_sunday() as i64;
    let mut day = first - Duration::days(lead);

    for _ in 0..WEEK_ROWS {
        let mut cells: Vec<Span> = Vec::with_capacity(7);
        for _ in 0..7 {
            let mut style = if day == selected {
                t.selected
            } else if day == today {
                t.today
            } else if day.month() != month {
                t.dim
            } else {
                Style::default()
            };
            if focused && day == cursor {
                style = if day == selected {
                    style.add_modifier(Modifier::UNDERLINED)
                } else {
                    t.focus
                };
            }
            cells.push(Span::styled(format!("{:>2}", day.day()), style));
            cells.push(Span::raw(" "));
            day += Duration::days(1);
        }
        out.push(centered(Line::from(cells), width));
    }

    out
}

/// Grid row (counted from the panel top) holding `cursor`.
pub fn row_of(cursor: NaiveDate) -> u16 {
    let lead = first_of_month(cursor).weekday().num_days_from_sunday();
    GRID_TOP + ((lead + cursor.day() - 1) / 7) as u16
}

pub fn move_days(cursor: NaiveDate, days: i64) -> NaiveDate {
    cursor
        .checked_add_signed(Duration::days(days))
        .unwrap_or(cursor)
}

/// Same day in the neighbouring month, clamped to that month's length.
pub fn shift_month(cursor: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        cursor.checked_add_months(Months::new(months as u32))
    } else {
        cursor.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(cursor)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn centered(line: Line<'static>, width: u16) -> Line<'static> {
    let pad = (width as usize).saturating_sub(line.width()) / 2;
    let mut spans = vec![Span::raw(" ".repeat(pad))];
    spans.extend(line.spans);
    Line::from(spans)
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

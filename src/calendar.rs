use crate::models::CalendarCursor;
use chrono::{Datelike, Local, NaiveDate};

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn current_cursor() -> CalendarCursor {
    let today = Local::now().date_naive();
    CalendarCursor {
        year: today.year(),
        month0: today.month0(),
    }
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 % 12 {
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Weekday of day 1, 0=Sunday..6=Saturday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    // The Gregorian weekday pattern repeats every 400 years; folding the year
    // keeps any cursor the shift arithmetic can produce inside chrono's range.
    let folded = year.rem_euclid(400) + 2000;
    NaiveDate::from_ymd_opt(folded, month0 % 12 + 1, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Cells for the month view: leading blanks, then the numbered days.
/// Recomputed from the arguments on every call.
pub fn build_grid(year: i32, month0: u32) -> impl Iterator<Item = Option<u32>> {
    let blanks = first_weekday_of_month(year, month0);
    let days = days_in_month(year, month0);
    (0..blanks).map(|_| None).chain((1..=days).map(Some))
}

/// Steps the cursor by `delta` months, carrying into the year in either
/// direction. Any delta magnitude is supported.
pub fn shift(cursor: CalendarCursor, delta: i32) -> CalendarCursor {
    let total = i64::from(cursor.year) * 12 + i64::from(cursor.month0) + i64::from(delta);
    let year = total
        .div_euclid(12)
        .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    CalendarCursor {
        year,
        month0: total.rem_euclid(12) as u32,
    }
}

pub fn month_label(cursor: CalendarCursor) -> String {
    format!(
        "{} {}",
        MONTH_NAMES[cursor.month0 as usize % 12], cursor.year
    )
}

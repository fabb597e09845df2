//! Calendar arithmetic and date labels.
//!
//! Months are 0-indexed throughout this module (`month0`, as returned by
//! [`chrono::Datelike::month0`]) and only become 1-indexed inside date keys.
//! Weeks start on Monday.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Short weekday headers, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = ["Lun", "Mar", "Mié", "Jue", "Vie", "Sáb", "Dom"];

/// First day of the given month.
///
/// # Panics
/// Panics if `month0` is not in `0..12`.
pub fn first_of_month(year: i32, month0: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).expect("month0 must be in 0..12")
}

/// Number of days in the given month, leap years included.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let first = first_of_month(year, month0);
    let first_of_next = shift_month(first, 1);
    first_of_next
        .pred_opt()
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Weekday of the 1st of the month, 0 = Monday .. 6 = Sunday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    let native = first_of_month(year, month0).weekday().num_days_from_sunday();
    (native + 6) % 7
}

/// The seven dates, Monday through Sunday, of the week containing `date`.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let monday_offset = match date.weekday() {
        Weekday::Sun => 6,
        other => other.num_days_from_sunday() as i64 - 1,
    };
    let monday = date - Duration::days(monday_offset);

    let mut week = [monday; 7];
    for (offset, day) in week.iter_mut().enumerate() {
        *day = monday + Duration::days(offset as i64);
    }
    week
}

/// First day of the month `delta_months` away from the month of `date`.
pub fn shift_month(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = date.year() * 12 + date.month0() as i32 + delta_months;
    let year = total_months.div_euclid(12);
    let month0 = total_months.rem_euclid(12) as u32;
    first_of_month(year, month0)
}

/// Canonical `YYYY-MM-DD` key for a day.
pub fn format_date_key(year: i32, month0: u32, day: u32) -> String {
    format!("{}-{:02}-{:02}", year, month0 + 1, day)
}

pub fn date_key(date: NaiveDate) -> String {
    format_date_key(date.year(), date.month0(), date.day())
}

/// Parse a `YYYY-MM-DD` key back into a date.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").ok()
}

/// # Panics
/// Panics if `month0` is not in `0..12`.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize]
}

/// Three-letter month abbreviation used in week-view headers.
pub fn short_month_name(month0: u32) -> String {
    month_name(month0).chars().take(3).collect()
}

/// Header of the month view, e.g. `"Enero 2025"`.
pub fn month_label(year: i32, month0: u32) -> String {
    format!("{} {}", month_name(month0), year)
}

/// Header of the week view.
///
/// The label collapses the shared parts of the range:
/// `"6-12 Enero 2025"`, `"27 Enero - 2 Febrero 2025"` or
/// `"29 Diciembre 2025 - 4 Enero 2026"`.
pub fn week_range_label(date: NaiveDate) -> String {
    let week = week_dates(date);
    let (start, end) = (week[0], week[6]);

    if start.month0() == end.month0() {
        format!(
            "{}-{} {} {}",
            start.day(),
            end.day(),
            month_name(start.month0()),
            start.year()
        )
    } else if start.year() == end.year() {
        format!(
            "{} {} - {} {} {}",
            start.day(),
            month_name(start.month0()),
            end.day(),
            month_name(end.month0()),
            start.year()
        )
    } else {
        format!(
            "{} {} {} - {} {} {}",
            start.day(),
            month_name(start.month0()),
            start.year(),
            end.day(),
            month_name(end.month0()),
            end.year()
        )
    }
}

// Test fixtures - reusable test data
// Provides consistent dates and calendars across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use shift_calendar::models::settings::ShiftSettings;
use shift_calendar::models::ui::ViewMode;
use shift_calendar::services::calendar::CalendarController;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Thursday Jan 30, 2025; its week spans into February
    pub fn jan_30_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 30).unwrap()
    }

    /// Wednesday Dec 31, 2025; its week spans into 2026
    pub fn new_years_eve_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Controller with default shift times anchored on `anchor`
pub fn calendar(anchor: NaiveDate, view_mode: ViewMode) -> CalendarController {
    CalendarController::new(anchor, view_mode, ShiftSettings::default())
}

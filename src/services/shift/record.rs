//! Building shift records from either explicit times or a chosen category.

use chrono::NaiveDate;

use crate::models::settings::ShiftSettings;
use crate::models::shift::{ShiftCategory, ShiftRecord, ShiftTimes};
use crate::services::classifier::classify_times;

impl ShiftRecord {
    /// Record with explicit times; the category is derived from them.
    pub fn from_custom_times(date: NaiveDate, times: ShiftTimes, notes: Option<String>) -> Self {
        Self {
            date,
            start_time: Some(times.start),
            end_time: Some(times.end),
            notes: clean_notes(notes),
            category: classify_times(times.start, times.end),
        }
    }

    /// Record for a chosen category using its configured times.
    /// Free days carry no times.
    pub fn from_category(
        date: NaiveDate,
        category: ShiftCategory,
        settings: &ShiftSettings,
        notes: Option<String>,
    ) -> Self {
        let times = settings.get(category);
        Self {
            date,
            start_time: times.map(|t| t.start),
            end_time: times.map(|t| t.end),
            notes: clean_notes(notes),
            category,
        }
    }
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes.filter(|n| !n.trim().is_empty())
}

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::settings::ShiftSettings;
use crate::models::shift::{ShiftCategory, ShiftRecord, ShiftTimes};
use crate::services::classifier::classify_times;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShiftFormError {
    #[error("a custom shift needs a start time")]
    MissingStartTime,
    #[error("a custom shift needs an end time")]
    MissingEndTime,
}

/// Editing state for the shift of a single day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftForm {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub notes: String,
    pub category: ShiftCategory,
    /// Record explicit times instead of the category's configured ones
    pub use_custom_time: bool,
    editing: bool,
}

impl ShiftForm {
    /// Blank form for a day without a shift.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: None,
            end_time: None,
            notes: String::new(),
            category: ShiftCategory::Morning,
            use_custom_time: false,
            editing: false,
        }
    }

    /// Form pre-filled from an existing shift.
    ///
    /// Custom time starts switched off, so saving without touching it
    /// re-applies the configured times of the record's category.
    pub fn from_record(record: &ShiftRecord) -> Self {
        Self {
            date: record.date,
            start_time: record.start_time,
            end_time: record.end_time,
            notes: record.notes.clone().unwrap_or_default(),
            category: record.category,
            use_custom_time: false,
            editing: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn set_custom_times(&mut self, start: NaiveTime, end: NaiveTime) {
        self.use_custom_time = true;
        self.start_time = Some(start);
        self.end_time = Some(end);
    }

    pub fn select_category(&mut self, category: ShiftCategory) {
        self.use_custom_time = false;
        self.category = category;
    }

    /// Category the custom times would be saved as, once both are filled in.
    pub fn detected_category(&self) -> Option<ShiftCategory> {
        if !self.use_custom_time {
            return None;
        }
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(classify_times(start, end)),
            _ => None,
        }
    }

    pub fn build_record(&self, settings: &ShiftSettings) -> Result<ShiftRecord, ShiftFormError> {
        let notes = Some(self.notes.clone());

        if self.use_custom_time {
            let start = self.start_time.ok_or(ShiftFormError::MissingStartTime)?;
            let end = self.end_time.ok_or(ShiftFormError::MissingEndTime)?;
            Ok(ShiftRecord::from_custom_times(
                self.date,
                ShiftTimes::new(start, end),
                notes,
            ))
        } else {
            Ok(ShiftRecord::from_category(
                self.date,
                self.category,
                settings,
                notes,
            ))
        }
    }
}

//! Default start/end times per shift category.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::shift::{ShiftCategory, ShiftTimes};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("free days have no configurable times")]
    NoTimesForFree,
}

/// Configured times for every category that has them.
///
/// Each non-free category always holds exactly one pair; pairs are only ever
/// overwritten. Missing fields deserialize to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftSettings {
    pub morning: ShiftTimes,
    pub afternoon: ShiftTimes,
    pub night: ShiftTimes,
    pub split: ShiftTimes,
}

impl Default for ShiftSettings {
    fn default() -> Self {
        Self {
            morning: ShiftTimes::hours(6, 14),
            afternoon: ShiftTimes::hours(14, 22),
            night: ShiftTimes::hours(22, 6),
            split: ShiftTimes::hours(6, 22),
        }
    }
}

impl ShiftSettings {
    /// Categories shown in the settings editor.
    pub const EDITABLE: [ShiftCategory; 3] = [
        ShiftCategory::Morning,
        ShiftCategory::Afternoon,
        ShiftCategory::Night,
    ];

    /// Configured pair for `category`, `None` for free days.
    pub fn get(&self, category: ShiftCategory) -> Option<ShiftTimes> {
        match category {
            ShiftCategory::Morning => Some(self.morning),
            ShiftCategory::Afternoon => Some(self.afternoon),
            ShiftCategory::Night => Some(self.night),
            ShiftCategory::Split => Some(self.split),
            ShiftCategory::Free => None,
        }
    }

    /// Overwrite the pair for `category`. Start is not required to precede end.
    pub fn set(&mut self, category: ShiftCategory, times: ShiftTimes) -> Result<(), SettingsError> {
        let slot = match category {
            ShiftCategory::Morning => &mut self.morning,
            ShiftCategory::Afternoon => &mut self.afternoon,
            ShiftCategory::Night => &mut self.night,
            ShiftCategory::Split => &mut self.split,
            ShiftCategory::Free => return Err(SettingsError::NoTimesForFree),
        };
        *slot = times;
        Ok(())
    }
}

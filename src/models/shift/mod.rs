//! Shift model: categories, time pairs and the per-day shift record.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::date_key;

const TIME_FORMAT: &str = "%H:%M";

/// Kind of work period recorded for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftCategory {
    Morning,
    Afternoon,
    Night,
    Split,
    Free,
}

impl ShiftCategory {
    pub const ALL: [ShiftCategory; 5] = [
        ShiftCategory::Morning,
        ShiftCategory::Afternoon,
        ShiftCategory::Night,
        ShiftCategory::Split,
        ShiftCategory::Free,
    ];

    /// Categories offered as presets when recording a shift.
    pub const PRESETS: [ShiftCategory; 4] = [
        ShiftCategory::Morning,
        ShiftCategory::Afternoon,
        ShiftCategory::Night,
        ShiftCategory::Free,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Mañana",
            Self::Afternoon => "Tarde",
            Self::Night => "Noche",
            Self::Split => "Partido",
            Self::Free => "Libre",
        }
    }

    /// One-letter marker used where a full label does not fit.
    pub fn marker(self) -> char {
        self.label().chars().next().unwrap_or('?')
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Night => "night",
            Self::Split => "split",
            Self::Free => "free",
        }
    }

    /// Whether this category carries start/end times.
    pub fn has_times(self) -> bool {
        self != Self::Free
    }
}

impl fmt::Display for ShiftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shift category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ShiftCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time '{0}', expected HH:MM")]
pub struct TimeParseError(pub String);

/// Parse a 24h `HH:MM` time of day.
pub fn parse_time(value: &str) -> Result<NaiveTime, TimeParseError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map_err(|_| TimeParseError(value.to_string()))
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Start/end pair of a shift. Start may be later than end (overnight shifts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTimes {
    #[serde(with = "hhmm")]
    pub start: NaiveTime,
    #[serde(with = "hhmm")]
    pub end: NaiveTime,
}

impl ShiftTimes {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Build from two `HH:MM` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeParseError> {
        Ok(Self::new(parse_time(start)?, parse_time(end)?))
    }

    /// Shorthand for whole-hour pairs.
    ///
    /// # Panics
    /// Panics if either hour is above 23.
    pub fn hours(start: u32, end: u32) -> Self {
        let at = |hour| NaiveTime::from_hms_opt(hour, 0, 0).expect("hour must be in 0..24");
        Self::new(at(start), at(end))
    }
}

impl fmt::Display for ShiftTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", format_time(self.start), format_time(self.end))
    }
}

/// The shift recorded for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Day this shift belongs to, serialized as its `YYYY-MM-DD` key
    pub date: NaiveDate,
    #[serde(with = "hhmm::option", default)]
    pub start_time: Option<NaiveTime>,
    #[serde(with = "hhmm::option", default)]
    pub end_time: Option<NaiveTime>,
    pub notes: Option<String>,
    pub category: ShiftCategory,
}

impl ShiftRecord {
    /// Canonical `YYYY-MM-DD` key of the owning day.
    pub fn date_key(&self) -> String {
        date_key(self.date)
    }

    pub fn times(&self) -> Option<ShiftTimes> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(ShiftTimes::new(start, end)),
            _ => None,
        }
    }

    /// Time range as shown next to the category, empty for free days.
    pub fn time_range(&self) -> String {
        self.times().map(|t| t.to_string()).unwrap_or_default()
    }
}

/// Serde adapter storing times as `HH:MM`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(de::Error::custom)
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{de, Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(time) => serializer.serialize_some(&super::super::format_time(*time)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::super::parse_time(&raw).map_err(de::Error::custom))
                .transpose()
        }
    }
}

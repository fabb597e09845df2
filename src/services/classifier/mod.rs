//! Classification of a worked time range into a shift category.
//!
//! Rules are checked in order and the first match wins. The order matters:
//! a range like 22:00-06:00 already satisfies the morning rule, and the
//! split rule is only reached by ranges that start before 14:00 and end
//! between 17:00 and 22:00.

use chrono::{NaiveTime, Timelike};

use crate::models::shift::ShiftCategory;

struct Rule {
    matches: fn(u32, u32) -> bool,
    category: ShiftCategory,
}

const RULES: [Rule; 4] = [
    Rule {
        matches: is_morning,
        category: ShiftCategory::Morning,
    },
    Rule {
        matches: is_afternoon,
        category: ShiftCategory::Afternoon,
    },
    Rule {
        matches: is_night,
        category: ShiftCategory::Night,
    },
    Rule {
        matches: is_split,
        category: ShiftCategory::Split,
    },
];

const FALLBACK: ShiftCategory = ShiftCategory::Morning;

fn is_morning(start: u32, end: u32) -> bool {
    start >= 6 && end <= 14
}

fn is_afternoon(start: u32, end: u32) -> bool {
    start >= 14 && end <= 22
}

fn is_night(start: u32, end: u32) -> bool {
    start >= 22 || end <= 6
}

fn is_split(start: u32, end: u32) -> bool {
    (6..14).contains(&start) && end > 16 && end <= 22
}

/// Category for a range given by its start and end hours (0-23).
/// Never returns [`ShiftCategory::Free`].
pub fn classify(start_hour: u32, end_hour: u32) -> ShiftCategory {
    RULES
        .iter()
        .find(|rule| (rule.matches)(start_hour, end_hour))
        .map(|rule| rule.category)
        .unwrap_or(FALLBACK)
}

/// Same as [`classify`], truncating both times to their hour.
pub fn classify_times(start: NaiveTime, end: NaiveTime) -> ShiftCategory {
    classify(start.hour(), end.hour())
}

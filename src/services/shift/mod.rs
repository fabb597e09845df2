//! In-memory store of recorded shifts, one per day.

pub mod form;
mod record;

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::shift::ShiftRecord;
use crate::utils::date::parse_date_key;

pub use form::{ShiftForm, ShiftFormError};

/// Shifts keyed by day, iterated in date order.
#[derive(Debug, Clone, Default)]
pub struct ShiftRegistry {
    shifts: BTreeMap<NaiveDate, ShiftRecord>,
}

impl ShiftRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the shift for `date`, returning the replaced one.
    pub fn upsert(&mut self, date: NaiveDate, record: ShiftRecord) -> Option<ShiftRecord> {
        log::debug!("Storing {} shift for {}", record.category.as_str(), date);
        self.shifts.insert(date, record)
    }

    /// Remove the shift for `date`. Removing an absent day does nothing.
    pub fn remove(&mut self, date: NaiveDate) -> Option<ShiftRecord> {
        let removed = self.shifts.remove(&date);
        if removed.is_some() {
            log::debug!("Removed shift for {}", date);
        }
        removed
    }

    pub fn get(&self, date: NaiveDate) -> Option<&ShiftRecord> {
        self.shifts.get(&date)
    }

    /// Lookup by `YYYY-MM-DD` key; a malformed key is simply absent.
    pub fn get_key(&self, key: &str) -> Option<&ShiftRecord> {
        parse_date_key(key).and_then(|date| self.get(date))
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shifts between `first` and `last`, both inclusive, in date order.
    pub fn in_range(&self, first: NaiveDate, last: NaiveDate) -> Vec<&ShiftRecord> {
        if first > last {
            return Vec::new();
        }
        self.shifts.range(first..=last).map(|(_, record)| record).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::{ShiftCategory, ShiftTimes};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(date: NaiveDate, start: u32, end: u32) -> ShiftRecord {
        ShiftRecord::from_custom_times(date, ShiftTimes::hours(start, end), None)
    }

    #[test]
    fn test_upsert_then_get() {
        let mut registry = ShiftRegistry::new();
        let day = date(2025, 1, 5);
        let shift = record(day, 6, 14);

        assert!(registry.upsert(day, shift.clone()).is_none());
        assert_eq!(registry.get(day), Some(&shift));
        assert_eq!(registry.get_key("2025-01-05"), Some(&shift));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_upsert_replaces_existing() {
        let mut registry = ShiftRegistry::new();
        let day = date(2025, 1, 5);
        let first = record(day, 6, 14);
        let second = record(day, 14, 22);

        registry.upsert(day, first.clone());
        let replaced = registry.upsert(day, second.clone());

        assert_eq!(replaced, Some(first));
        assert_eq!(registry.get(day), Some(&second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_then_get_is_absent() {
        let mut registry = ShiftRegistry::new();
        let day = date(2025, 1, 5);
        registry.upsert(day, record(day, 6, 14));

        assert!(registry.remove(day).is_some());
        assert_eq!(registry.get(day), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = ShiftRegistry::new();
        let day = date(2025, 1, 5);
        registry.upsert(day, record(day, 6, 14));

        assert_eq!(registry.remove(date(2025, 2, 1)), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_key_malformed_is_absent() {
        let mut registry = ShiftRegistry::new();
        let day = date(2025, 1, 5);
        registry.upsert(day, record(day, 0, 5));

        assert_eq!(registry.get_key("2025-1-5x"), None);
        assert_eq!(
            registry.get_key("2025-01-05").map(|r| r.category),
            Some(ShiftCategory::Night)
        );
    }

    #[test]
    fn test_in_range_is_inclusive_and_ordered() {
        let mut registry = ShiftRegistry::new();
        for day in [date(2025, 2, 3), date(2025, 1, 26), date(2025, 1, 27), date(2025, 2, 2)] {
            registry.upsert(day, record(day, 14, 22));
        }

        let first = date(2025, 1, 27);
        let last = date(2025, 2, 2);
        let keys: Vec<String> = registry
            .in_range(first, last)
            .iter()
            .map(|r| r.date_key())
            .collect();

        assert_eq!(keys, vec!["2025-01-27", "2025-02-02"]);
        assert!(registry.in_range(last, first).is_empty());
    }

    #[test]
    fn test_in_range_across_five_digit_year() {
        let mut registry = ShiftRegistry::new();
        let new_years_eve = date(9999, 12, 31);
        let after = date(10000, 1, 2);
        registry.upsert(new_years_eve, record(new_years_eve, 6, 14));
        registry.upsert(after, record(after, 6, 14));

        let found = registry.in_range(date(9999, 12, 29), date(10000, 1, 4));
        let days: Vec<NaiveDate> = found.iter().map(|r| r.date).collect();
        assert_eq!(days, vec![new_years_eve, after]);
    }
}

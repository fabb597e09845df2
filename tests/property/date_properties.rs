// Property-based tests for calendar arithmetic and shift classification

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use proptest::prelude::*;
use shift_calendar::models::shift::ShiftCategory;
use shift_calendar::services::classifier::classify;
use shift_calendar::utils::date::{
    date_key, days_in_month, first_weekday_of_month, format_date_key, parse_date_key,
    week_dates,
};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 plus up to ~80 years
    (0i64..29_220).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    /// Property: the week always runs Monday..Sunday, consecutively, around the date
    #[test]
    fn prop_week_dates_contain_date(date in any_date()) {
        let week = week_dates(date);

        prop_assert_eq!(week[0].weekday(), Weekday::Mon);
        prop_assert_eq!(week[6].weekday(), Weekday::Sun);
        for pair in week.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        prop_assert!(week.contains(&date));
    }

    /// Property: day count agrees with the last valid day of the month
    #[test]
    fn prop_days_in_month_is_last_valid_day(year in 1900..2200i32, month0 in 0..12u32) {
        let days = days_in_month(year, month0);

        prop_assert!((28..=31).contains(&days));
        prop_assert!(NaiveDate::from_ymd_opt(year, month0 + 1, days).is_some());
        prop_assert!(NaiveDate::from_ymd_opt(year, month0 + 1, days + 1).is_none());
    }

    /// Property: first weekday is Monday-based and matches chrono
    #[test]
    fn prop_first_weekday_is_monday_based(year in 1900..2200i32, month0 in 0..12u32) {
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap();
        let weekday = first_weekday_of_month(year, month0);

        prop_assert!(weekday <= 6);
        prop_assert_eq!(weekday, first.weekday().num_days_from_monday());
    }

    /// Property: date keys are zero-padded and parse back to the same day
    #[test]
    fn prop_date_key_is_canonical(date in any_date()) {
        let key = date_key(date);

        prop_assert_eq!(key.len(), 10);
        prop_assert_eq!(&key, &format_date_key(date.year(), date.month0(), date.day()));
        prop_assert_eq!(parse_date_key(&key), Some(date));
    }

    /// Property: classification is total and never yields a free day
    #[test]
    fn prop_classify_never_free(start in 0..24u32, end in 0..24u32) {
        prop_assert_ne!(classify(start, end), ShiftCategory::Free);
    }

    /// Property: ranges inside 06-14 are always morning
    #[test]
    fn prop_within_morning_window(start in 6..=14u32, end in 0..=14u32) {
        prop_assert_eq!(classify(start, end), ShiftCategory::Morning);
    }
}

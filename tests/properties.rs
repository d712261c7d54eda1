//! Property tests for holiday lookup, workday classification and date ranges.

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;

use workday_calendar::calendar::{
    absence_color, date_range, is_holiday, is_workday, range_length,
};
use workday_calendar::config::HolidayTable;
use workday_calendar::models::{HolidayRecord, Region, WorkingDaysConfig};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..3650).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn any_datetime() -> impl Strategy<Value = NaiveDateTime> {
    (any_date(), 0i64..86_400_000).prop_map(|(date, millis)| {
        date.and_hms_opt(0, 0, 0).unwrap() + TimeDelta::milliseconds(millis)
    })
}

fn any_region() -> impl Strategy<Value = Region> {
    (0usize..Region::ALL.len()).prop_map(|i| Region::ALL[i])
}

fn any_flag() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::json!("1")),
        Just(serde_json::json!("0")),
        Just(serde_json::json!(1)),
        Just(serde_json::json!(true)),
        Just(serde_json::json!("01")),
    ]
}

fn any_config() -> impl Strategy<Value = WorkingDaysConfig> {
    proptest::collection::vec(proptest::option::of(any::<bool>()), 7).prop_map(|flags| {
        WorkingDaysConfig {
            monday: flags[0],
            tuesday: flags[1],
            wednesday: flags[2],
            thursday: flags[3],
            friday: flags[4],
            saturday: flags[5],
            sunday: flags[6],
        }
    })
}

proptest! {
    #[test]
    fn holiday_iff_exact_day_flag_is_string_one(
        date in any_date(),
        region in any_region(),
        flag in any_flag(),
        offset in 0u64..3,
    ) {
        let record_date = date.checked_add_days(Days::new(offset)).unwrap();
        let mut record = HolidayRecord::new(record_date, "Test", &[]);
        record.regions.insert(region.code().to_string(), flag.clone());
        let table = HolidayTable::new(vec![record]);

        let expected = offset == 0 && flag == serde_json::json!("1");
        prop_assert_eq!(is_holiday(date, region.name(), &table), expected);
    }

    #[test]
    fn unmapped_region_is_never_a_holiday(date in any_date(), name in "[a-z ]{0,12}") {
        let mut record = HolidayRecord::new(date, "Test", &["by", "be", "unknown"]);
        record.regions.insert(name.clone(), serde_json::json!("1"));
        let table = HolidayTable::new(vec![record]);

        prop_assert!(!is_holiday(date, &name, &table));
    }

    #[test]
    fn holidays_are_never_workdays(
        date in any_date(),
        region in any_region(),
        config in any_config(),
    ) {
        let table = HolidayTable::new(vec![HolidayRecord::new(date, "Test", &[region.code()])]);
        prop_assert!(is_holiday(date, region.name(), &table));
        prop_assert!(!is_workday(&config, date, region.name(), &table));
    }

    #[test]
    fn range_has_ceiling_length_and_consecutive_days(
        from in any_datetime(),
        span_millis in 0i64..(90 * 86_400_000),
    ) {
        let to = from + TimeDelta::milliseconds(span_millis);
        let days = date_range(from, to);

        let expected = (span_millis as f64 / 86_400_000f64).ceil() as usize;
        prop_assert_eq!(days.len(), expected);
        prop_assert_eq!(range_length(from, to) as usize, expected);

        if let Some(first) = days.first() {
            prop_assert_eq!(*first, from.date());
        }
        for pair in days.windows(2) {
            prop_assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
    }

    #[test]
    fn range_from_itself_is_empty(from in any_datetime()) {
        prop_assert!(date_range(from, from).is_empty());
    }

    #[test]
    fn absence_color_is_pure(label in ".{0,20}") {
        prop_assert_eq!(absence_color(&label), absence_color(&label));
    }
}

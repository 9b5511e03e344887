#![cfg(feature = "serde")]

use chrono::{NaiveDate, Weekday};
use rat_datelimit::{
    DateLimits, DatePeriod, DayHighlights, DurationLimits, FieldSteps, RecurringDate, RoundMinute,
};

#[test]
fn test_serde_limits() {
    let limits = DateLimits {
        black_days: Some(vec![Weekday::Sat, Weekday::Sun]),
        black_dates_rec: Some(vec![RecurringDate::new(None, Some(12), Some(25))]),
        black_dates_period: Some(DatePeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            7,
        )),
        min_year: Some(2020),
        not_today: true,
        ..Default::default()
    };

    let s = serde_json::to_string_pretty(&limits).unwrap();
    println!("{}", s);
    let v: DateLimits = serde_json::from_str(&s).unwrap();
    assert_eq!(limits, v);
}

#[test]
fn test_serde_highlights() {
    let high = DayHighlights {
        today: true,
        high_dates: Some(vec![NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()]),
        high_days: Some(vec![Weekday::Fri]),
        ..Default::default()
    };

    let s = serde_json::to_string_pretty(&high).unwrap();
    println!("{}", s);
    let v: DayHighlights = serde_json::from_str(&s).unwrap();
    assert_eq!(high, v);
}

#[test]
fn test_serde_duration() {
    let limits = DurationLimits {
        min: Some(60),
        max: Some(3600),
        ..Default::default()
    };
    let s = serde_json::to_string_pretty(&limits).unwrap();
    println!("{}", s);
    let v: DurationLimits = serde_json::from_str(&s).unwrap();
    assert_eq!(limits, v);

    let steps = FieldSteps {
        minutes: 15,
        ..Default::default()
    };
    let s = serde_json::to_string_pretty(&steps).unwrap();
    println!("{}", s);
    let v: FieldSteps = serde_json::from_str(&s).unwrap();
    assert_eq!(steps, v);

    let s = serde_json::to_string(&RoundMinute::Nearest).unwrap();
    let v: RoundMinute = serde_json::from_str(&s).unwrap();
    assert_eq!(RoundMinute::Nearest, v);
}

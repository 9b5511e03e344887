use chrono::{NaiveDate, Weekday};
use rat_datelimit::{DatePeriod, DayHighlights, Highlight, RecurringDate};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_selected() {
    let high = DayHighlights {
        pick: true,
        ..Default::default()
    };
    assert!(high.is_selected(day(2024, 6, 15), Some(day(2024, 6, 15))));
    assert!(!high.is_selected(day(2024, 6, 15), Some(day(2024, 6, 16))));
    assert!(!high.is_selected(day(2024, 6, 15), None));

    // switched off: never highlights, selected or not.
    let high = DayHighlights::default();
    assert!(!high.is_selected(day(2024, 6, 15), Some(day(2024, 6, 15))));
}

#[test]
fn test_today() {
    let high = DayHighlights {
        today: true,
        ..Default::default()
    };
    assert!(high.is_today(day(2024, 6, 15), day(2024, 6, 15)));
    assert!(!high.is_today(day(2024, 6, 16), day(2024, 6, 15)));

    let high = DayHighlights::default();
    assert!(!high.is_today(day(2024, 6, 15), day(2024, 6, 15)));
}

#[test]
fn test_high_dates() {
    let high = DayHighlights {
        high_dates: Some(vec![day(2024, 7, 4)]),
        high_dates_alt: Some(vec![day(2024, 7, 14)]),
        ..Default::default()
    };
    assert!(high.is_high_date(day(2024, 7, 4)));
    assert!(!high.is_high_date(day(2024, 7, 14)));
    assert!(high.is_high_date_alt(day(2024, 7, 14)));
    assert!(!high.is_high_date_alt(day(2024, 7, 4)));
}

#[test]
fn test_high_dates_rec() {
    let high = DayHighlights {
        high_dates_rec: Some(vec![RecurringDate::new(None, None, Some(1))]),
        ..Default::default()
    };
    // first of every month.
    assert!(high.is_high_date_rec(day(2024, 1, 1)));
    assert!(high.is_high_date_rec(day(2031, 9, 1)));
    assert!(!high.is_high_date_rec(day(2024, 1, 2)));
}

#[test]
fn test_high_dates_period() {
    let high = DayHighlights {
        high_dates_period: Some(DatePeriod::new(day(2024, 1, 1), 14)),
        ..Default::default()
    };
    assert!(high.is_high_date_period(day(2024, 1, 15)));
    assert!(high.is_high_date_period(day(2023, 12, 18)));
    assert!(!high.is_high_date_period(day(2024, 1, 8)));
}

#[test]
fn test_high_days() {
    let high = DayHighlights {
        high_days: Some(vec![Weekday::Sun]),
        ..Default::default()
    };
    assert!(high.is_high_day(day(2024, 6, 16)));
    assert!(!high.is_high_day(day(2024, 6, 15)));
}

#[test]
fn test_matches_dispatch() {
    let high = DayHighlights {
        today: true,
        high_days: Some(vec![Weekday::Sat]),
        ..Default::default()
    };
    let today = day(2024, 6, 15);
    assert!(high.matches(Highlight::Today, today, today, None));
    assert!(high.matches(Highlight::HighDays, today, today, None));
    assert!(!high.matches(Highlight::Selected, today, today, None));
    assert!(!high.matches(Highlight::HighDates, today, today, None));
}

#[test]
fn test_classify_precedence() {
    let high = DayHighlights {
        pick: true,
        today: true,
        high_dates: Some(vec![day(2024, 6, 15), day(2024, 6, 20)]),
        high_days: Some(vec![Weekday::Sat]),
        ..Default::default()
    };
    let today = day(2024, 6, 15);

    // selected beats everything.
    assert_eq!(
        high.classify(today, today, Some(today)),
        Some(Highlight::Selected)
    );
    // today beats the date list.
    assert_eq!(high.classify(today, today, None), Some(Highlight::Today));
    // date list beats the weekday. 2024-06-20 is a thursday though,
    // so only the date list matches anyway.
    assert_eq!(
        high.classify(day(2024, 6, 20), today, None),
        Some(Highlight::HighDates)
    );
    // weekday only.
    assert_eq!(
        high.classify(day(2024, 6, 22), today, None),
        Some(Highlight::HighDays)
    );
    // nothing.
    assert_eq!(high.classify(day(2024, 6, 19), today, None), None);
}

#[test]
fn test_highlight_names() {
    assert_eq!(Highlight::HighDatesAlt.as_str(), "highDatesAlt");
    assert_eq!(Highlight::Selected.to_string(), "selected");
}

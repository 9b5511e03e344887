//!
//! Highlights for calendar days.
//!
//! Parallel to the limit rules, but nothing here disqualifies a
//! date. Each predicate can be queried on its own; the usual
//! consumer builds a per-day style map for the calendar widget
//! and wants one highlight class per day, which is what
//! [classify](DayHighlights::classify) gives.
//!

use crate::_private::NonExhaustive;
use crate::limits::{DatePeriod, RecurringDate};
use chrono::{Datelike, NaiveDate, Weekday};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Highlight classes a day can get, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    /// The currently selected date.
    Selected,
    /// Today.
    Today,
    /// Member of the primary highlight list.
    HighDates,
    /// Member of the alternate highlight list.
    HighDatesAlt,
    /// Matches a recurring highlight date.
    HighDatesRec,
    /// Falls on a periodic highlight cadence.
    HighDatesPeriod,
    /// Highlighted weekday.
    HighDays,
}

impl Highlight {
    /// The option name as the widget configuration spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Highlight::Selected => "selected",
            Highlight::Today => "today",
            Highlight::HighDates => "highDates",
            Highlight::HighDatesAlt => "highDatesAlt",
            Highlight::HighDatesRec => "highDatesRec",
            Highlight::HighDatesPeriod => "highDatesPeriod",
            Highlight::HighDays => "highDays",
        }
    }
}

impl Display for Highlight {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Precedence when a day matches more than one highlight.
const PRECEDENCE: [Highlight; 7] = [
    Highlight::Selected,
    Highlight::Today,
    Highlight::HighDates,
    Highlight::HighDatesAlt,
    Highlight::HighDatesRec,
    Highlight::HighDatesPeriod,
    Highlight::HighDays,
];

/// All the highlight options for one calendar.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayHighlights {
    /// Highlight the currently selected date.
    pub pick: bool,
    /// Highlight today.
    pub today: bool,
    /// Highlighted dates.
    pub high_dates: Option<Vec<NaiveDate>>,
    /// Highlighted dates, alternate style.
    pub high_dates_alt: Option<Vec<NaiveDate>>,
    /// Recurring highlighted dates.
    pub high_dates_rec: Option<Vec<RecurringDate>>,
    /// Periodic highlighted dates.
    pub high_dates_period: Option<DatePeriod>,
    /// Highlighted weekdays.
    pub high_days: Option<Vec<Weekday>>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for DayHighlights {
    fn default() -> Self {
        Self {
            pick: false,
            today: false,
            high_dates: None,
            high_dates_alt: None,
            high_dates_rec: None,
            high_dates_period: None,
            high_days: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl DayHighlights {
    /// Day is the selected date. `selected` is the date the picker
    /// currently holds, if any.
    pub fn is_selected(&self, day: NaiveDate, selected: Option<NaiveDate>) -> bool {
        self.pick && selected == Some(day)
    }

    /// Day is today.
    pub fn is_today(&self, day: NaiveDate, today: NaiveDate) -> bool {
        self.today && day == today
    }

    /// Day is in the primary highlight list.
    pub fn is_high_date(&self, day: NaiveDate) -> bool {
        self.high_dates.as_ref().is_some_and(|v| v.contains(&day))
    }

    /// Day is in the alternate highlight list.
    pub fn is_high_date_alt(&self, day: NaiveDate) -> bool {
        self.high_dates_alt
            .as_ref()
            .is_some_and(|v| v.contains(&day))
    }

    /// Day matches a recurring highlight date.
    pub fn is_high_date_rec(&self, day: NaiveDate) -> bool {
        self.high_dates_rec
            .as_ref()
            .is_some_and(|v| v.iter().any(|r| r.matches(day)))
    }

    /// Day falls on the periodic highlight cadence.
    pub fn is_high_date_period(&self, day: NaiveDate) -> bool {
        self.high_dates_period
            .as_ref()
            .is_some_and(|p| p.matches(day))
    }

    /// Day is a highlighted weekday.
    pub fn is_high_day(&self, day: NaiveDate) -> bool {
        self.high_days
            .as_ref()
            .is_some_and(|v| v.contains(&day.weekday()))
    }

    /// Query one highlight class.
    pub fn matches(
        &self,
        highlight: Highlight,
        day: NaiveDate,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> bool {
        match highlight {
            Highlight::Selected => self.is_selected(day, selected),
            Highlight::Today => self.is_today(day, today),
            Highlight::HighDates => self.is_high_date(day),
            Highlight::HighDatesAlt => self.is_high_date_alt(day),
            Highlight::HighDatesRec => self.is_high_date_rec(day),
            Highlight::HighDatesPeriod => self.is_high_date_period(day),
            Highlight::HighDays => self.is_high_day(day),
        }
    }

    /// The first matching highlight in precedence order, if any.
    pub fn classify(
        &self,
        day: NaiveDate,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Option<Highlight> {
        PRECEDENCE
            .into_iter()
            .find(|h| self.matches(*h, day, today, selected))
    }
}

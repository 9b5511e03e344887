//!
//! Limit options for a date-picker.
//!
//! [DateLimits] collects all the limit rules. Every rule is optional,
//! `None` switches it off. The actual checking lives in
//! [evaluate](DateLimits::evaluate).
//!

use crate::_private::NonExhaustive;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors when building/validating limit options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// Not a "YYYY-MM-DD" date.
    InvalidDate(String),
    /// Not a "HH:MM" time.
    InvalidTime(String),
    /// Hour out of 0..=23.
    InvalidHour(u32),
    /// Month out of 1..=12.
    InvalidMonth(u32),
    /// Day out of 1..=31.
    InvalidDay(u32),
    /// Period interval must be > 0.
    InvalidInterval(i64),
    /// min/max pair is reversed.
    InvalidRange,
}

impl Display for LimitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for LimitError {}

/// Parse a "YYYY-MM-DD" date the way the widget options spell them.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, LimitError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| LimitError::InvalidDate(s.into()))
}

/// Parse a "HH:MM" time the way the widget options spell them.
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, LimitError> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| LimitError::InvalidTime(s.into()))
}

/// A recurring date pattern. `None` is a wildcard and matches
/// every value of that field.
///
/// `RecurringDate::new(None, Some(12), Some(25))` matches
/// December 25 of every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecurringDate {
    pub year: Option<i32>,
    /// 1..=12
    pub month: Option<u32>,
    /// 1..=31
    pub day: Option<u32>,
}

impl RecurringDate {
    pub fn new(year: Option<i32>, month: Option<u32>, day: Option<u32>) -> Self {
        Self { year, month, day }
    }

    /// From the `[year, month, day]` encoding with `-1` as the
    /// wildcard, as datebox-style option data uses it. The month in
    /// that encoding is 0-based and converted here.
    pub fn from_triple(triple: [i32; 3]) -> Result<Self, LimitError> {
        let year = (triple[0] != -1).then_some(triple[0]);
        let month = match triple[1] {
            -1 => None,
            m @ 0..=11 => Some(m as u32 + 1),
            // report in 1-based numbering, like the error docs say.
            m => return Err(LimitError::InvalidMonth((m + 1).max(0) as u32)),
        };
        let day = match triple[2] {
            -1 => None,
            d @ 1..=31 => Some(d as u32),
            d => return Err(LimitError::InvalidDay(d.max(0) as u32)),
        };
        Ok(Self { year, month, day })
    }

    /// Does the date match the pattern.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.year.map_or(true, |y| y == date.year())
            && self.month.map_or(true, |m| m == date.month())
            && self.day.map_or(true, |d| d == date.day())
    }
}

/// A repeating cadence of dates: every `interval` days counted
/// from `anchor`, in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DatePeriod {
    pub anchor: NaiveDate,
    /// Days between two matching dates. Must be > 0,
    /// see [DateLimits::validate].
    pub interval: i64,
}

impl DatePeriod {
    pub fn new(anchor: NaiveDate, interval: i64) -> Self {
        Self { anchor, interval }
    }

    /// Does the date fall on the cadence.
    pub fn matches(&self, date: NaiveDate) -> bool {
        if self.interval == 0 {
            return false;
        }
        (date - self.anchor).num_days() % self.interval == 0
    }
}

/// All the limit options for one date-picker.
///
/// `None`/`false` switches a rule off. The field names keep the
/// option names datebox users know, even where those read like a
/// double negative; the rule docs in [CheckRule](crate::CheckRule)
/// state the actual effect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateLimits {
    /// Allow-list of the only selectable dates. When set, no other
    /// rule runs at all.
    pub enable_dates: Option<Vec<NaiveDate>>,
    /// Allow-list of the only selectable hours. When set, no other
    /// rule runs at all. Checked only if `enable_dates` is off.
    pub valid_hours: Option<Vec<u32>>,
    /// Dates that are selectable no matter what the rules below say.
    pub white_dates: Option<Vec<NaiveDate>>,

    /// Blacked-out weekdays.
    pub black_days: Option<Vec<Weekday>>,
    /// Blacked-out dates.
    pub black_dates: Option<Vec<NaiveDate>>,
    /// Recurring blacked-out dates.
    pub black_dates_rec: Option<Vec<RecurringDate>>,
    /// Periodic blacked-out dates.
    pub black_dates_period: Option<DatePeriod>,

    /// Today is not selectable.
    pub not_today: bool,
    /// Years after this are not selectable.
    pub max_year: Option<i32>,
    /// Years before this are not selectable.
    pub min_year: Option<i32>,
    /// Only today and later is selectable.
    pub after_today: bool,
    /// Only today and earlier is selectable.
    pub before_today: bool,
    /// Last selectable date. The date itself is still selectable.
    pub max_date: Option<NaiveDate>,
    /// First selectable date. The date itself is selectable.
    pub min_date: Option<NaiveDate>,
    /// How many days before today are selectable.
    pub min_days: Option<i64>,
    /// How many days after today are selectable.
    pub max_days: Option<i64>,

    /// First selectable hour.
    pub min_hour: Option<u32>,
    /// Last selectable hour.
    pub max_hour: Option<u32>,
    /// First selectable time of day. Seconds are ignored.
    pub min_time: Option<NaiveTime>,
    /// Last selectable time of day. Seconds are ignored.
    pub max_time: Option<NaiveTime>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for DateLimits {
    fn default() -> Self {
        Self {
            enable_dates: None,
            valid_hours: None,
            white_dates: None,
            black_days: None,
            black_dates: None,
            black_dates_rec: None,
            black_dates_period: None,
            not_today: false,
            max_year: None,
            min_year: None,
            after_today: false,
            before_today: false,
            max_date: None,
            min_date: None,
            min_days: None,
            max_days: None,
            min_hour: None,
            max_hour: None,
            min_time: None,
            max_time: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl DateLimits {
    /// Validate the configured values.
    ///
    /// The check functions are total and never fail, so anything
    /// out of range must be caught here before the options are
    /// put to use.
    pub fn validate(&self) -> Result<(), LimitError> {
        fn hour_ok(h: u32) -> Result<(), LimitError> {
            if h > 23 {
                Err(LimitError::InvalidHour(h))
            } else {
                Ok(())
            }
        }

        if let Some(hours) = &self.valid_hours {
            for &h in hours {
                hour_ok(h)?;
            }
        }
        if let Some(h) = self.min_hour {
            hour_ok(h)?;
        }
        if let Some(h) = self.max_hour {
            hour_ok(h)?;
        }

        if let Some(rec) = &self.black_dates_rec {
            for r in rec {
                if let Some(m) = r.month {
                    if !(1..=12).contains(&m) {
                        return Err(LimitError::InvalidMonth(m));
                    }
                }
                if let Some(d) = r.day {
                    if !(1..=31).contains(&d) {
                        return Err(LimitError::InvalidDay(d));
                    }
                }
            }
        }
        if let Some(period) = &self.black_dates_period {
            if period.interval <= 0 {
                return Err(LimitError::InvalidInterval(period.interval));
            }
        }

        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(LimitError::InvalidRange);
            }
        }
        if let (Some(min), Some(max)) = (self.min_year, self.max_year) {
            if min > max {
                return Err(LimitError::InvalidRange);
            }
        }
        if let (Some(min), Some(max)) = (self.min_hour, self.max_hour) {
            if min > max {
                return Err(LimitError::InvalidRange);
            }
        }
        if let (Some(min), Some(max)) = (self.min_time, self.max_time) {
            if min > max {
                return Err(LimitError::InvalidRange);
            }
        }

        Ok(())
    }
}

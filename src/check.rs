//!
//! The date checker.
//!
//! Runs the limit rules of a [DateLimits] against one candidate
//! date. Rules run in a fixed priority order and the first rule
//! that disqualifies the date wins. The allow-list rules run
//! before everything else and suppress the rest entirely.
//!

use crate::limits::DateLimits;
use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, Timelike};
use log::debug;
use std::fmt;
use std::fmt::{Display, Formatter};

/// All rules the checker knows.
///
/// [as_str](CheckRule::as_str) gives the option name as the widget
/// configuration spells it, for tooltips and the like. Two of those
/// names read backwards: `afterToday` *allows* only today and later,
/// so it triggers on dates before today. `beforeToday` mirrors that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckRule {
    /// Date is not in the `enable_dates` allow-list.
    EnableDates,
    /// Hour is not in the `valid_hours` allow-list.
    ValidHours,
    /// Date is in `white_dates`. Only ever a pass-rule.
    WhiteDates,
    /// Weekday is blacked out.
    BlackDays,
    /// Date is blacked out.
    BlackDates,
    /// Date matches a recurring blackout.
    BlackDatesRec,
    /// Date falls on a periodic blackout.
    BlackDatesPeriod,
    /// Date is today.
    NotToday,
    /// Year is past `max_year`.
    MaxYear,
    /// Year is before `min_year`.
    MinYear,
    /// Date is before today.
    AfterToday,
    /// Date is after today.
    BeforeToday,
    /// Date is past `max_date`.
    MaxDate,
    /// Date is before `min_date`.
    MinDate,
    /// Date is outside the `min_days`/`max_days` window around today.
    MinMaxDays,
    /// Hour is before `min_hour`.
    MinHour,
    /// Hour is past `max_hour`.
    MaxHour,
    /// Time is before `min_time`.
    MinTime,
    /// Time is past `max_time`.
    MaxTime,
}

impl CheckRule {
    /// The option name as the widget configuration spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckRule::EnableDates => "enableDates",
            CheckRule::ValidHours => "validHours",
            CheckRule::WhiteDates => "whiteDates",
            CheckRule::BlackDays => "blackDays",
            CheckRule::BlackDates => "blackDates",
            CheckRule::BlackDatesRec => "blackDatesRec",
            CheckRule::BlackDatesPeriod => "blackDatesPeriod",
            CheckRule::NotToday => "notToday",
            CheckRule::MaxYear => "maxYear",
            CheckRule::MinYear => "minYear",
            CheckRule::AfterToday => "afterToday",
            CheckRule::BeforeToday => "beforeToday",
            CheckRule::MaxDate => "maxDate",
            CheckRule::MinDate => "minDate",
            CheckRule::MinMaxDays => "minmaxDays",
            CheckRule::MinHour => "minHour",
            CheckRule::MaxHour => "maxHour",
            CheckRule::MinTime => "minTime",
            CheckRule::MaxTime => "maxTime",
        }
    }
}

impl Display for CheckRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority order of the disqualification rules. The first rule
/// that triggers decides the verdict.
const BAD_CHECKS: [CheckRule; 16] = [
    CheckRule::BlackDays,
    CheckRule::BlackDates,
    CheckRule::BlackDatesRec,
    CheckRule::BlackDatesPeriod,
    CheckRule::NotToday,
    CheckRule::MaxYear,
    CheckRule::MinYear,
    CheckRule::AfterToday,
    CheckRule::BeforeToday,
    CheckRule::MaxDate,
    CheckRule::MinDate,
    CheckRule::MinMaxDays,
    CheckRule::MinHour,
    CheckRule::MaxHour,
    CheckRule::MinTime,
    CheckRule::MaxTime,
];

/// Verdict for one checked date.
///
/// `fail_rule` is set iff the date is bad. `pass_rule` is only set
/// when an allow-list rule explicitly qualified the date; a date can
/// be good with neither rule set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    /// The checked date.
    pub date: NaiveDateTime,
    /// The rule that disqualified the date.
    pub fail_rule: Option<CheckRule>,
    /// The allow-list rule that explicitly qualified the date.
    pub pass_rule: Option<CheckRule>,
}

impl Verdict {
    fn ok(date: NaiveDateTime) -> Self {
        Self {
            date,
            fail_rule: None,
            pass_rule: None,
        }
    }

    fn pass(rule: CheckRule, date: NaiveDateTime) -> Self {
        Self {
            date,
            fail_rule: None,
            pass_rule: Some(rule),
        }
    }

    fn fail(rule: CheckRule, date: NaiveDateTime) -> Self {
        Self {
            date,
            fail_rule: Some(rule),
            pass_rule: None,
        }
    }

    /// Date is selectable.
    pub fn good(&self) -> bool {
        self.fail_rule.is_none()
    }

    /// Date is not selectable.
    pub fn bad(&self) -> bool {
        self.fail_rule.is_some()
    }
}

// Time-of-day with the seconds cut off. The min/max time rules
// compare hour+minute only.
fn hhmm(dt: NaiveDateTime) -> NaiveTime {
    NaiveTime::from_hms_opt(dt.hour(), dt.minute(), 0).expect("time")
}

impl DateLimits {
    /// Check one date against the current wall-clock.
    ///
    /// Samples `Local::now()` once and uses it for every rule,
    /// so a check running across midnight stays consistent.
    pub fn check(&self, candidate: NaiveDateTime) -> Verdict {
        self.evaluate(candidate, Local::now().naive_local())
    }

    /// Check one date, boolean only.
    pub fn is_ok(&self, candidate: NaiveDateTime) -> bool {
        self.check(candidate).good()
    }

    /// Check one date against the given `today`.
    ///
    /// Pure: the same candidate, limits and today always give the
    /// same verdict.
    pub fn evaluate(&self, candidate: NaiveDateTime, today: NaiveDateTime) -> Verdict {
        // enable_dates in use: no other checks run.
        if let Some(enable) = &self.enable_dates {
            return if enable.contains(&candidate.date()) {
                Verdict::pass(CheckRule::EnableDates, candidate)
            } else {
                Verdict::fail(CheckRule::EnableDates, candidate)
            };
        }

        // valid_hours in use: no other checks run.
        if let Some(hours) = &self.valid_hours {
            return if hours.contains(&candidate.hour()) {
                Verdict::pass(CheckRule::ValidHours, candidate)
            } else {
                Verdict::fail(CheckRule::ValidHours, candidate)
            };
        }

        // white_dates skips all the disqualification rules.
        if let Some(white) = &self.white_dates {
            if white.contains(&candidate.date()) {
                return Verdict::pass(CheckRule::WhiteDates, candidate);
            }
        }

        for rule in BAD_CHECKS {
            if self.triggers(rule, candidate, today) {
                debug!("{} disqualifies {}", rule, candidate);
                return Verdict::fail(rule, candidate);
            }
        }

        Verdict::ok(candidate)
    }

    /// Does one disqualification rule trigger for the candidate.
    /// A rule that is not configured never triggers.
    fn triggers(&self, rule: CheckRule, candidate: NaiveDateTime, today: NaiveDateTime) -> bool {
        match rule {
            CheckRule::BlackDays => self
                .black_days
                .as_ref()
                .is_some_and(|v| v.contains(&candidate.weekday())),
            CheckRule::BlackDates => self
                .black_dates
                .as_ref()
                .is_some_and(|v| v.contains(&candidate.date())),
            CheckRule::BlackDatesRec => self
                .black_dates_rec
                .as_ref()
                .is_some_and(|v| v.iter().any(|r| r.matches(candidate.date()))),
            CheckRule::BlackDatesPeriod => self
                .black_dates_period
                .as_ref()
                .is_some_and(|p| p.matches(candidate.date())),
            CheckRule::NotToday => self.not_today && candidate.date() == today.date(),
            CheckRule::MaxYear => self.max_year.is_some_and(|y| candidate.year() > y),
            CheckRule::MinYear => self.min_year.is_some_and(|y| candidate.year() < y),
            // after_today allows today and later, so it triggers
            // on anything before today.
            CheckRule::AfterToday => self.after_today && candidate < today,
            // before_today allows today and earlier.
            CheckRule::BeforeToday => self.before_today && candidate > today,
            // The max date itself stays selectable.
            CheckRule::MaxDate => self.max_date.is_some_and(|d| candidate.date() > d),
            CheckRule::MinDate => self.min_date.is_some_and(|d| candidate.date() < d),
            CheckRule::MinMaxDays => {
                let off = (candidate.date() - today.date()).num_days();
                self.min_days.is_some_and(|min| off < -min)
                    || self.max_days.is_some_and(|max| off > max)
            }
            CheckRule::MinHour => self.min_hour.is_some_and(|h| candidate.hour() < h),
            CheckRule::MaxHour => self.max_hour.is_some_and(|h| candidate.hour() > h),
            CheckRule::MinTime => self.min_time.is_some_and(|t| hhmm(candidate) < t),
            CheckRule::MaxTime => self.max_time.is_some_and(|t| hhmm(candidate) > t),
            // Allow-lists are handled up front in evaluate().
            CheckRule::EnableDates | CheckRule::ValidHours | CheckRule::WhiteDates => false,
        }
    }
}

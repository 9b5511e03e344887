//!
//! Stepper support: minute rounding and per-field step sizes
//! for duration inputs.
//!

use crate::_private::NonExhaustive;
use chrono::{Duration, NaiveDateTime, Timelike};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Rounding mode for the minute stepper.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundMinute {
    /// Round down to the previous step.
    Down,
    /// Round up to the next step.
    Up,
    /// Round to the closer step. Halfway rounds up.
    #[default]
    Nearest,
}

/// Round a raw minute to a multiple of `step`.
///
/// Applies only for `step > 1`; smaller steps and minutes already
/// on a step come back unchanged. Rounding up can give 60, use
/// [fix_minute_step] to carry that into the hour.
pub fn round_minute(minute: u32, step: u32, round: RoundMinute) -> u32 {
    if step <= 1 {
        return minute;
    }
    let rem = minute % step;
    if rem == 0 {
        return minute;
    }
    match round {
        RoundMinute::Down => minute - rem,
        RoundMinute::Up => minute + (step - rem),
        RoundMinute::Nearest => {
            if rem * 2 < step {
                minute - rem
            } else {
                minute + (step - rem)
            }
        }
    }
}

/// Round the minute of a date to a multiple of `step`.
/// Rounding up past :59 carries into the hour.
pub fn fix_minute_step(dt: NaiveDateTime, step: u32, round: RoundMinute) -> NaiveDateTime {
    let minute = dt.minute();
    let rounded = round_minute(minute, step, round);
    if rounded == minute {
        dt
    } else {
        dt + Duration::minutes(rounded as i64 - minute as i64)
    }
}

/// Duration input fields, coarse to fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DurationField {
    Days,
    Hours,
    Minutes,
    Seconds,
}

/// Step size per duration field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldSteps {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,

    pub non_exhaustive: NonExhaustive,
}

impl Default for FieldSteps {
    fn default() -> Self {
        Self {
            days: 1,
            hours: 1,
            minutes: 1,
            seconds: 1,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl FieldSteps {
    /// Distribute the configured step over the displayed fields.
    ///
    /// Stepping a coarse field while finer ones are shown in the
    /// same control gives rather unexpected input behaviour, so
    /// the most precise field in `order` gets `step` and every
    /// coarser displayed field is forced back to 1. Fields not
    /// displayed keep their step.
    pub fn apply_order(&mut self, order: &[DurationField], step: u32) {
        let mut finest = None;
        for field in [
            DurationField::Days,
            DurationField::Hours,
            DurationField::Minutes,
            DurationField::Seconds,
        ] {
            if order.contains(&field) {
                self.set(field, 1);
                finest = Some(field);
            }
        }
        if let Some(field) = finest {
            self.set(field, step);
        }
    }

    fn set(&mut self, field: DurationField, v: u32) {
        match field {
            DurationField::Days => self.days = v,
            DurationField::Hours => self.hours = v,
            DurationField::Minutes => self.minutes = v,
            DurationField::Seconds => self.seconds = v,
        }
    }
}

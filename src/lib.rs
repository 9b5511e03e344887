#![doc = include_str!("../readme.md")]
//
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod check;
mod duration;
mod highlight;
mod limits;
mod step;

pub use check::{CheckRule, Verdict};
pub use duration::{DurationLimits, DurationParts, DurationState};
pub use highlight::{DayHighlights, Highlight};
pub use limits::{parse_hhmm, parse_iso_date, DateLimits, DatePeriod, LimitError, RecurringDate};
pub use step::{fix_minute_step, round_minute, DurationField, FieldSteps, RoundMinute};

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(
        feature = "serde",
        derive(serde_derive::Serialize, serde_derive::Deserialize)
    )]
    pub struct NonExhaustive;
}

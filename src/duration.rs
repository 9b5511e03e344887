//!
//! Duration clamping for duration-mode pickers.
//!
//! The picker holds a base date and the user moves a second date
//! around it. [DurationState::clamp] keeps the elapsed time inside
//! the configured bounds and remembers the last result for
//! redisplay.
//!

use crate::_private::NonExhaustive;
use chrono::{Duration, NaiveDateTime};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Elapsed time split into display fields.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DurationParts {
    pub days: i64,
    /// 0..24
    pub hours: i64,
    /// 0..60
    pub minutes: i64,
    /// 0..60
    pub seconds: i64,
}

impl DurationParts {
    /// Split a second count into fields. Negative counts
    /// count as zero.
    pub fn from_seconds(seconds: i64) -> Self {
        let seconds = seconds.max(0);
        Self {
            days: seconds / 86400,
            hours: seconds % 86400 / 3600,
            minutes: seconds % 3600 / 60,
            seconds: seconds % 60,
        }
    }

    /// As `[days, hours, minutes, seconds]`.
    pub fn as_array(&self) -> [i64; 4] {
        [self.days, self.hours, self.minutes, self.seconds]
    }
}

/// Duration bounds in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DurationLimits {
    /// Minimum duration.
    pub min: Option<i64>,
    /// Maximum duration.
    pub max: Option<i64>,

    pub non_exhaustive: NonExhaustive,
}

impl Default for DurationLimits {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

/// Duration state of one picker.
///
/// Owns the base date and the last clamped duration. The last
/// duration is what the picker redisplays when it needs the value
/// again without recomputing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationState {
    /// Base date.
    init: NaiveDateTime,
    /// Last clamped duration in seconds.
    last_seconds: i64,
    /// Last clamped duration, split into fields.
    last_parts: DurationParts,
}

impl DurationState {
    pub fn new(init: NaiveDateTime) -> Self {
        Self {
            init,
            last_seconds: 0,
            last_parts: DurationParts::default(),
        }
    }

    /// The base date.
    pub fn init(&self) -> NaiveDateTime {
        self.init
    }

    /// Set a new base date. Resets the last duration.
    pub fn set_init(&mut self, init: NaiveDateTime) {
        self.init = init;
        self.last_seconds = 0;
        self.last_parts = DurationParts::default();
    }

    /// Last clamped duration in seconds.
    pub fn last_seconds(&self) -> i64 {
        self.last_seconds
    }

    /// Last clamped duration, split into fields.
    pub fn last_parts(&self) -> DurationParts {
        self.last_parts
    }

    /// Clamp the duration between the base date and `current`.
    ///
    /// A current before the base snaps back to the base. When a
    /// bound applies, the returned date is the base plus that
    /// bound; otherwise `current` comes back unchanged. The last
    /// duration is overwritten either way.
    pub fn clamp(&mut self, limits: &DurationLimits, current: NaiveDateTime) -> NaiveDateTime {
        let mut current = current;
        let mut elapsed = (current - self.init).num_seconds();

        if elapsed < 0 {
            elapsed = 0;
            current = self.init;
        }
        if let Some(min) = limits.min {
            if elapsed < min {
                elapsed = min;
                current = self.init + Duration::seconds(min);
            }
        }
        if let Some(max) = limits.max {
            if elapsed > max {
                elapsed = max;
                current = self.init + Duration::seconds(max);
            }
        }

        self.last_seconds = elapsed;
        self.last_parts = DurationParts::from_seconds(elapsed);

        current
    }
}

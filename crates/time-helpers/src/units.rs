//! Unit kinds and their display labels.
//!
//! [`TimeUnits`] is an immutable label set consumed by
//! [`to_human_readable_expanded_with`](crate::humanize::to_human_readable_expanded_with).
//! Build one with [`TimeUnits::builder`], or deserialize it from configuration:
//! any label left out keeps its plain English default.

use serde::{Deserialize, Serialize};

/// A unit of elapsed time, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

impl TimeUnit {
    /// All units, smallest first.
    pub const ALL: [TimeUnit; 8] = [
        TimeUnit::Milliseconds,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ];

    /// The plain English name, used as the default label.
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }
}

/// Display labels for each [`TimeUnit`].
///
/// There are no setters: a label set is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeUnits {
    milliseconds: String,
    seconds: String,
    minutes: String,
    hours: String,
    days: String,
    weeks: String,
    months: String,
    years: String,
}

impl Default for TimeUnits {
    fn default() -> Self {
        Self {
            milliseconds: TimeUnit::Milliseconds.name().to_string(),
            seconds: TimeUnit::Seconds.name().to_string(),
            minutes: TimeUnit::Minutes.name().to_string(),
            hours: TimeUnit::Hours.name().to_string(),
            days: TimeUnit::Days.name().to_string(),
            weeks: TimeUnit::Weeks.name().to_string(),
            months: TimeUnit::Months.name().to_string(),
            years: TimeUnit::Years.name().to_string(),
        }
    }
}

impl TimeUnits {
    /// Start from the default labels.
    pub fn builder() -> TimeUnitsBuilder {
        TimeUnitsBuilder {
            units: TimeUnits::default(),
        }
    }

    /// The label for `unit`.
    pub fn label(&self, unit: TimeUnit) -> &str {
        match unit {
            TimeUnit::Milliseconds => &self.milliseconds,
            TimeUnit::Seconds => &self.seconds,
            TimeUnit::Minutes => &self.minutes,
            TimeUnit::Hours => &self.hours,
            TimeUnit::Days => &self.days,
            TimeUnit::Weeks => &self.weeks,
            TimeUnit::Months => &self.months,
            TimeUnit::Years => &self.years,
        }
    }

    fn slot_mut(&mut self, unit: TimeUnit) -> &mut String {
        match unit {
            TimeUnit::Milliseconds => &mut self.milliseconds,
            TimeUnit::Seconds => &mut self.seconds,
            TimeUnit::Minutes => &mut self.minutes,
            TimeUnit::Hours => &mut self.hours,
            TimeUnit::Days => &mut self.days,
            TimeUnit::Weeks => &mut self.weeks,
            TimeUnit::Months => &mut self.months,
            TimeUnit::Years => &mut self.years,
        }
    }
}

/// Builder for [`TimeUnits`].
///
/// ```
/// use time_helpers::{TimeUnit, TimeUnits};
///
/// let units = TimeUnits::builder()
///     .label(TimeUnit::Seconds, "s")
///     .label(TimeUnit::Milliseconds, "ms")
///     .build();
/// assert_eq!(units.label(TimeUnit::Seconds), "s");
/// assert_eq!(units.label(TimeUnit::Days), "days");
/// ```
#[derive(Debug, Clone)]
pub struct TimeUnitsBuilder {
    units: TimeUnits,
}

impl TimeUnitsBuilder {
    /// Override the label for one unit.
    pub fn label(mut self, unit: TimeUnit, label: impl Into<String>) -> Self {
        *self.units.slot_mut(unit) = label.into();
        self
    }

    pub fn build(self) -> TimeUnits {
        self.units
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

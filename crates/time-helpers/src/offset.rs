//! Fuzzy relative offsets such as `"+5D"`, `"-3h"` or `"2Y"`.
//!
//! # Offset Format
//!
//! An optional sign, a decimal integer, then exactly one case-sensitive unit
//! letter. Surrounding whitespace is ignored.
//!
//! | letter | unit    | applied as                          |
//! |--------|---------|-------------------------------------|
//! | `Y`    | years   | calendar months × 12 (day clamped)  |
//! | `M`    | months  | calendar months (day clamped)       |
//! | `D`    | days    | 24-hour days                        |
//! | `h`    | hours   |                                     |
//! | `m`    | minutes |                                     |
//! | `s`    | seconds |                                     |
//!
//! Month arithmetic clamps to the end of the target month, so Jan 31 + `1M`
//! lands on the last day of February. Only a single component is accepted;
//! `"5D3h"` fails to parse.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, TimeDelta, TimeZone};
use serde::Serialize;

use crate::error::{Result, TimeHelpersError};

/// Unit named by the trailing letter of an offset string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OffsetUnit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
    /// The trailing character is not one of `Y M D h m s`.
    Unrecognized,
}

impl OffsetUnit {
    /// Classify the trailing character of an offset string.
    pub fn from_suffix(suffix: char) -> Self {
        match suffix {
            'Y' => OffsetUnit::Years,
            'M' => OffsetUnit::Months,
            'D' => OffsetUnit::Days,
            'h' => OffsetUnit::Hours,
            'm' => OffsetUnit::Minutes,
            's' => OffsetUnit::Seconds,
            _ => OffsetUnit::Unrecognized,
        }
    }

    /// The letter this unit is written with, if any.
    pub fn suffix(self) -> Option<char> {
        match self {
            OffsetUnit::Years => Some('Y'),
            OffsetUnit::Months => Some('M'),
            OffsetUnit::Days => Some('D'),
            OffsetUnit::Hours => Some('h'),
            OffsetUnit::Minutes => Some('m'),
            OffsetUnit::Seconds => Some('s'),
            OffsetUnit::Unrecognized => None,
        }
    }
}

/// A parsed offset: a signed amount of one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FuzzyOffset {
    pub amount: i32,
    pub unit: OffsetUnit,
}

impl FuzzyOffset {
    /// Parse an offset string.
    ///
    /// Returns `Ok(None)` for an empty string or one whose trailing unit
    /// letter is not recognized.
    ///
    /// # Errors
    ///
    /// Returns [`TimeHelpersError::Parse`] if the unit is recognized but the
    /// rest of the string is not a 32-bit signed integer.
    pub fn parse(expression: &str) -> Result<Option<Self>> {
        let trimmed = expression.trim();
        let Some(suffix) = trimmed.chars().next_back() else {
            return Ok(None);
        };

        let unit = OffsetUnit::from_suffix(suffix);
        if unit == OffsetUnit::Unrecognized {
            return Ok(None);
        }

        let number = trimmed[..trimmed.len() - suffix.len_utf8()].trim();
        let amount = number
            .parse::<i32>()
            .map_err(|e| TimeHelpersError::Parse(format!("'{}': {}", expression.trim(), e)))?;

        Ok(Some(Self { amount, unit }))
    }

    /// Shift `instant` by this offset.
    ///
    /// An [`OffsetUnit::Unrecognized`] offset returns `instant` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TimeHelpersError::OutOfRange`] if the result cannot be
    /// represented, or if month arithmetic lands on a local time that does
    /// not exist in the instant's timezone.
    pub fn apply<Tz: TimeZone>(&self, instant: DateTime<Tz>) -> Result<DateTime<Tz>> {
        let amount = i64::from(self.amount);
        let shifted = match self.unit {
            OffsetUnit::Years => add_calendar_months(instant, amount * 12),
            OffsetUnit::Months => add_calendar_months(instant, amount),
            OffsetUnit::Days => {
                TimeDelta::try_days(amount).and_then(|d| instant.checked_add_signed(d))
            }
            OffsetUnit::Hours => {
                TimeDelta::try_hours(amount).and_then(|d| instant.checked_add_signed(d))
            }
            OffsetUnit::Minutes => {
                TimeDelta::try_minutes(amount).and_then(|d| instant.checked_add_signed(d))
            }
            OffsetUnit::Seconds => {
                TimeDelta::try_seconds(amount).and_then(|d| instant.checked_add_signed(d))
            }
            OffsetUnit::Unrecognized => return Ok(instant),
        };

        shifted.ok_or_else(|| TimeHelpersError::OutOfRange(format!("applying offset '{self}'")))
    }
}

/// Renders as `{amount}{letter}`, e.g. `"-30m"`, which parses back to the
/// same offset. An [`OffsetUnit::Unrecognized`] offset has no letter and
/// renders as `"{amount}?"`; that form is not accepted by [`FromStr`].
impl fmt::Display for FuzzyOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit.suffix() {
            Some(suffix) => write!(f, "{}{}", self.amount, suffix),
            None => write!(f, "{}?", self.amount),
        }
    }
}

impl FromStr for FuzzyOffset {
    type Err = TimeHelpersError;

    /// Strict parse: an unrecognized unit is an error rather than `None`.
    fn from_str(s: &str) -> Result<Self> {
        FuzzyOffset::parse(s)?
            .ok_or_else(|| TimeHelpersError::UnknownUnit(format!("'{}'", s.trim())))
    }
}

/// Add (or, for negative `months`, subtract) calendar months.
fn add_calendar_months<Tz: TimeZone>(
    instant: DateTime<Tz>,
    months: i64,
) -> Option<DateTime<Tz>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        instant.checked_add_months(magnitude)
    } else {
        instant.checked_sub_months(magnitude)
    }
}

/// Shift `instant` by a fuzzy offset string.
///
/// - `None` returns `instant` unchanged.
/// - A string whose trailing unit letter is not recognized (including the
///   empty string) returns `instant` unchanged.
/// - Otherwise the parsed offset is applied with [`FuzzyOffset::apply`].
///
/// # Errors
///
/// Returns [`TimeHelpersError::Parse`] if the numeric part cannot be parsed,
/// or [`TimeHelpersError::OutOfRange`] if the shifted instant cannot be
/// represented.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use time_helpers::offset::fuzzy_add;
///
/// let d = Utc.with_ymd_and_hms(2026, 1, 31, 9, 0, 0).unwrap();
/// let shifted = fuzzy_add(d, Some("+1M")).unwrap();
/// assert_eq!(shifted, Utc.with_ymd_and_hms(2026, 2, 28, 9, 0, 0).unwrap());
/// assert_eq!(fuzzy_add(d, None).unwrap(), d);
/// ```
pub fn fuzzy_add<Tz: TimeZone>(
    instant: DateTime<Tz>,
    expression: Option<&str>,
) -> Result<DateTime<Tz>> {
    let Some(expression) = expression else {
        return Ok(instant);
    };

    match FuzzyOffset::parse(expression)? {
        Some(offset) => {
            log::trace!("applying fuzzy offset {offset}");
            offset.apply(instant)
        }
        None => {
            log::debug!("ignoring fuzzy offset '{}': unrecognized unit", expression.trim());
            Ok(instant)
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

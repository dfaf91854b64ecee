//! Duration arithmetic and decomposition over [`chrono::TimeDelta`].
//!
//! The `add_*` helpers add a fractional amount of some unit to a duration and
//! return the new value. Weeks, months and years are day approximations:
//! a week is 7 days, a month 30 days and a year 365.25 days.
//!
//! Fractional amounts are resolved to the nearest microsecond. The sum
//! saturates at [`TimeDelta::MIN`]/[`TimeDelta::MAX`]; a NaN amount adds nothing.

use chrono::TimeDelta;

const MICROS_PER_MILLI: f64 = 1_000.0;
const MICROS_PER_SECOND: f64 = 1_000.0 * MICROS_PER_MILLI;
const MICROS_PER_MINUTE: f64 = 60.0 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: f64 = 60.0 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: f64 = 24.0 * MICROS_PER_HOUR;

const DAYS_PER_WEEK: f64 = 7.0;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.25;

// TimeDelta spans ±i64::MAX milliseconds
const MAX_MICROS: f64 = i64::MAX as f64 * MICROS_PER_MILLI;

/// `amount` units of `micros_per_unit` microseconds each.
fn approximate(amount: f64, micros_per_unit: f64) -> TimeDelta {
    let micros = (amount * micros_per_unit).round();
    if micros.is_nan() {
        return TimeDelta::zero();
    }
    if micros.abs() >= MAX_MICROS {
        return if micros > 0.0 {
            TimeDelta::MAX
        } else {
            TimeDelta::MIN
        };
    }

    let millis = (micros / MICROS_PER_MILLI).trunc();
    let remainder = micros - millis * MICROS_PER_MILLI;
    let whole = TimeDelta::try_milliseconds(millis as i64).unwrap_or(if millis > 0.0 {
        TimeDelta::MAX
    } else {
        TimeDelta::MIN
    });
    saturating_add(whole, TimeDelta::microseconds(remainder as i64))
}

fn saturating_add(duration: TimeDelta, delta: TimeDelta) -> TimeDelta {
    duration.checked_add(&delta).unwrap_or(if delta < TimeDelta::zero() {
        TimeDelta::MIN
    } else {
        TimeDelta::MAX
    })
}

// ── add_* ───────────────────────────────────────────────────────────────────

/// Add `milliseconds` milliseconds.
pub fn add_milliseconds(duration: TimeDelta, milliseconds: f64) -> TimeDelta {
    saturating_add(duration, approximate(milliseconds, MICROS_PER_MILLI))
}

/// Add `seconds` seconds.
pub fn add_seconds(duration: TimeDelta, seconds: f64) -> TimeDelta {
    saturating_add(duration, approximate(seconds, MICROS_PER_SECOND))
}

/// Add `minutes` minutes.
pub fn add_minutes(duration: TimeDelta, minutes: f64) -> TimeDelta {
    saturating_add(duration, approximate(minutes, MICROS_PER_MINUTE))
}

/// Add `hours` hours.
pub fn add_hours(duration: TimeDelta, hours: f64) -> TimeDelta {
    saturating_add(duration, approximate(hours, MICROS_PER_HOUR))
}

/// Add `days` periods of 24 hours.
pub fn add_days(duration: TimeDelta, days: f64) -> TimeDelta {
    saturating_add(duration, approximate(days, MICROS_PER_DAY))
}

/// Add `weeks` periods of 7 days.
pub fn add_weeks(duration: TimeDelta, weeks: f64) -> TimeDelta {
    add_days(duration, weeks * DAYS_PER_WEEK)
}

/// Add `months` periods of 30 days.
pub fn add_months(duration: TimeDelta, months: f64) -> TimeDelta {
    add_days(duration, months * DAYS_PER_MONTH)
}

/// Add `years` periods of 365.25 days.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use time_helpers::span::add_years;
///
/// let d = add_years(TimeDelta::zero(), 4.0);
/// assert_eq!(d, TimeDelta::days(1461));
/// ```
pub fn add_years(duration: TimeDelta, years: f64) -> TimeDelta {
    add_days(duration, years * DAYS_PER_YEAR)
}

// ── Decomposition ───────────────────────────────────────────────────────────
//
// Components truncate toward zero and carry the sign of the whole duration,
// so -1d20h is (-1, -20, 0, 0, 0) rather than (-2, 4, 0, 0, 0).

/// Whole days.
pub fn days_component(duration: &TimeDelta) -> i64 {
    duration.num_days()
}

/// Hours past the whole days (-23..=23).
pub fn hours_component(duration: &TimeDelta) -> i64 {
    duration.num_hours() % 24
}

/// Minutes past the whole hours (-59..=59).
pub fn minutes_component(duration: &TimeDelta) -> i64 {
    duration.num_minutes() % 60
}

/// Seconds past the whole minutes (-59..=59).
pub fn seconds_component(duration: &TimeDelta) -> i64 {
    duration.num_seconds() % 60
}

/// Milliseconds past the whole seconds (-999..=999).
pub fn milliseconds_component(duration: &TimeDelta) -> i64 {
    duration.num_milliseconds() % 1_000
}

/// Total elapsed seconds, including the fraction.
pub fn total_seconds(duration: &TimeDelta) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / 1e9
}

/// Total elapsed days, including the fraction.
pub fn total_days(duration: &TimeDelta) -> f64 {
    total_seconds(duration) / 86_400.0
}

/// Total elapsed years of 365.25 days.
pub fn total_years(duration: &TimeDelta) -> f64 {
    total_days(duration) / DAYS_PER_YEAR
}

// ── Tests ───────────────────────────────────────────────────────────────────

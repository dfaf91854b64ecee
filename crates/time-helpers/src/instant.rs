//! Unix-epoch conversions for chrono instants.
//!
//! Conversions *to* epoch time accept a `DateTime` in any timezone and measure
//! the elapsed time from [`UNIX_EPOCH`], truncating toward zero. Conversions
//! *from* epoch time always produce a `DateTime<Utc>`.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::error::{Result, TimeHelpersError};

/// 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Elapsed time between the epoch and `instant` (negative before the epoch).
fn since_epoch<Tz: TimeZone>(instant: &DateTime<Tz>) -> TimeDelta {
    instant
        .naive_utc()
        .signed_duration_since(UNIX_EPOCH.naive_utc())
}

/// Whole seconds elapsed since the Unix epoch, truncated toward zero.
///
/// Unlike [`DateTime::timestamp`], which floors, half a second before the
/// epoch maps to `0` here rather than `-1`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use time_helpers::instant::to_unix_seconds;
///
/// let dt = Utc.with_ymd_and_hms(2020, 8, 15, 0, 0, 0).unwrap();
/// assert_eq!(to_unix_seconds(&dt), 1_597_449_600);
/// ```
pub fn to_unix_seconds<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    since_epoch(instant).num_seconds()
}

/// Whole milliseconds elapsed since the Unix epoch, truncated toward zero.
pub fn to_unix_milliseconds<Tz: TimeZone>(instant: &DateTime<Tz>) -> i64 {
    since_epoch(instant).num_milliseconds()
}

/// The instant `seconds` seconds after the Unix epoch.
///
/// # Errors
///
/// Returns [`TimeHelpersError::OutOfRange`] if the result is not representable
/// as a `DateTime<Utc>`.
pub fn from_unix_seconds(seconds: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
        TimeHelpersError::OutOfRange(format!("unix timestamp {seconds}s"))
    })
}

/// The instant `millis` milliseconds after the Unix epoch.
///
/// # Errors
///
/// Returns [`TimeHelpersError::OutOfRange`] if the result is not representable
/// as a `DateTime<Utc>`.
pub fn from_unix_milliseconds(millis: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| TimeHelpersError::OutOfRange(format!("unix timestamp {millis}ms")))
}

// ── Tests ───────────────────────────────────────────────────────────────────

//! Human-readable rendering of durations.
//!
//! Two forms are provided:
//!
//! - [`to_human_readable_simple`]: one coarse English phrase ("a minute",
//!   "3 days", "one year")
//! - [`to_human_readable_expanded`] / [`to_human_readable_expanded_with`]:
//!   every non-zero unit from years down to milliseconds
//!   ("1 years 2 days 3 hours"), with configurable labels

use chrono::TimeDelta;

use crate::span::{
    days_component, hours_component, minutes_component, seconds_component, total_seconds,
};
use crate::units::{TimeUnit, TimeUnits};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
// 365 days, not the 365.25 used by `span::add_years`
const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;

// ── Simple form ─────────────────────────────────────────────────────────────

/// Render a duration as a single coarse phrase.
///
/// The bucket is picked from the total elapsed seconds; the number printed is
/// the matching component of the duration (e.g. the sub-minute seconds, not
/// the total seconds).
///
/// | total seconds           | output                          |
/// |-------------------------|---------------------------------|
/// | < 60                    | `one second` / `N seconds`      |
/// | < 120                   | `a minute`                      |
/// | < 2 700 (45 min)        | `N minutes`                     |
/// | < 5 400 (90 min)        | `an hour`                       |
/// | < 86 400 (1 day)        | `N hours`                       |
/// | < 172 800 (2 days)      | `a day`                         |
/// | < 2 592 000 (30 days)   | `N days`                        |
/// | < 31 104 000 (360 days) | `one month` / `N months`        |
/// | otherwise               | `one year` / `N years`          |
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use time_helpers::humanize::to_human_readable_simple;
///
/// assert_eq!(to_human_readable_simple(&TimeDelta::seconds(90)), "a minute");
/// assert_eq!(to_human_readable_simple(&TimeDelta::hours(7)), "7 hours");
/// ```
pub fn to_human_readable_simple(duration: &TimeDelta) -> String {
    let delta = total_seconds(duration);

    if delta < 60.0 {
        let seconds = seconds_component(duration);
        return if seconds == 1 {
            "one second".to_string()
        } else {
            format!("{seconds} seconds")
        };
    }

    if delta < 120.0 {
        return "a minute".to_string();
    }

    if delta < 2_700.0 {
        return format!("{} minutes", minutes_component(duration));
    }

    if delta < 5_400.0 {
        return "an hour".to_string();
    }

    if delta < 86_400.0 {
        return format!("{} hours", hours_component(duration));
    }

    if delta < 172_800.0 {
        return "a day".to_string();
    }

    let days = days_component(duration);

    if delta < 2_592_000.0 {
        return format!("{days} days");
    }

    if delta < 31_104_000.0 {
        let months = days / 30;
        return if months <= 1 {
            "one month".to_string()
        } else {
            format!("{months} months")
        };
    }

    let years = days / 365;
    if years <= 1 {
        "one year".to_string()
    } else {
        format!("{years} years")
    }
}

// ── Expanded form ───────────────────────────────────────────────────────────

/// Render every non-zero unit of a duration using the default English labels.
///
/// See [`to_human_readable_expanded_with`].
pub fn to_human_readable_expanded(duration: &TimeDelta) -> String {
    to_human_readable_expanded_with(duration, &TimeUnits::default())
}

/// Render every non-zero unit of a duration, largest first, using `units`
/// for the labels.
///
/// The total milliseconds are split greedily into years (365 days), days,
/// hours, minutes, seconds and milliseconds. Units with a zero count are
/// left out and labels are used verbatim, so one second renders as
/// `"1 seconds"`. A year is only split off once the duration is longer than
/// 365 days; exactly 365 days renders as `"365 days"`. Durations shorter
/// than a millisecond, negative ones included, render as an empty string.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use time_helpers::{humanize::to_human_readable_expanded_with, TimeUnit, TimeUnits};
///
/// let units = TimeUnits::builder().label(TimeUnit::Hours, "h").build();
/// let d = TimeDelta::hours(26) + TimeDelta::milliseconds(5);
/// assert_eq!(to_human_readable_expanded_with(&d, &units), "1 days 2 h 5 milliseconds");
/// ```
pub fn to_human_readable_expanded_with(duration: &TimeDelta, units: &TimeUnits) -> String {
    let mut remaining = duration.num_milliseconds();
    let mut parts: Vec<String> = Vec::new();

    if remaining > MS_PER_YEAR {
        let years = remaining / MS_PER_YEAR;
        remaining -= years * MS_PER_YEAR;
        parts.push(format!("{years} {}", units.label(TimeUnit::Years)));
    }

    for (unit, unit_ms) in [
        (TimeUnit::Days, MS_PER_DAY),
        (TimeUnit::Hours, MS_PER_HOUR),
        (TimeUnit::Minutes, MS_PER_MINUTE),
        (TimeUnit::Seconds, MS_PER_SECOND),
    ] {
        if remaining >= unit_ms {
            let count = remaining / unit_ms;
            remaining -= count * unit_ms;
            parts.push(format!("{count} {}", units.label(unit)));
        }
    }

    if remaining > 0 {
        parts.push(format!("{remaining} {}", units.label(TimeUnit::Milliseconds)));
    }

    parts.join(" ").trim_end().to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(seconds: i64) -> String {
        to_human_readable_simple(&TimeDelta::seconds(seconds))
    }

    // ── Simple form tests ───────────────────────────────────────────────

    #[test]
    fn test_simple_seconds() {
        assert_eq!(simple(1), "one second");
        assert_eq!(simple(7), "7 seconds");
        assert_eq!(simple(45), "45 seconds");
        assert_eq!(simple(0), "0 seconds");
    }

    #[test]
    fn test_simple_sub_second_fraction_is_truncated() {
        let d = TimeDelta::milliseconds(1_900);
        assert_eq!(to_human_readable_simple(&d), "one second");
    }

    #[test]
    fn test_simple_a_minute() {
        assert_eq!(simple(60), "a minute");
        assert_eq!(simple(90), "a minute");
        assert_eq!(simple(119), "a minute");
    }

    #[test]
    fn test_simple_minutes() {
        assert_eq!(simple(121), "2 minutes");
        assert_eq!(simple(14 * 60), "14 minutes");
        assert_eq!(simple(2_699), "44 minutes");
    }

    #[test]
    fn test_simple_hours() {
        assert_eq!(simple(2_700), "an hour");
        assert_eq!(simple(3_600), "an hour");
        assert_eq!(simple(5_399), "an hour");
        assert_eq!(simple(5_400), "1 hours");
        assert_eq!(simple(7_200), "2 hours");
    }

    #[test]
    fn test_simple_days() {
        assert_eq!(simple(86_400), "a day");
        assert_eq!(simple(172_799), "a day");
        assert_eq!(simple(172_800), "2 days");
        assert_eq!(simple(29 * 86_400), "29 days");
    }

    #[test]
    fn test_simple_months() {
        assert_eq!(simple(2_592_000), "one month");
        assert_eq!(simple(59 * 86_400), "one month");
        assert_eq!(simple(60 * 86_400), "2 months");
        assert_eq!(simple(359 * 86_400), "11 months");
    }

    #[test]
    fn test_simple_years() {
        assert_eq!(simple(31_104_000), "one year");
        assert_eq!(simple(500 * 86_400), "one year");
        assert_eq!(simple(91_194_000), "2 years");
        assert_eq!(simple(3_650 * 86_400), "10 years");
    }

    #[test]
    fn test_simple_negative_stays_in_seconds_bucket() {
        assert_eq!(simple(-5), "-5 seconds");
    }

    // ── Expanded form tests ─────────────────────────────────────────────

    #[test]
    fn test_expanded_exactly_365_days() {
        let d = TimeDelta::milliseconds(31_536_000_000);
        assert_eq!(to_human_readable_expanded(&d), "365 days");
    }

    #[test]
    fn test_expanded_just_over_a_year() {
        let d = TimeDelta::days(365) + TimeDelta::milliseconds(1);
        assert_eq!(to_human_readable_expanded(&d), "1 years 1 milliseconds");

        let d = TimeDelta::days(366);
        assert_eq!(to_human_readable_expanded(&d), "1 years 1 days");
    }

    #[test]
    fn test_expanded_tenth_of_second() {
        let d = TimeDelta::milliseconds(100);
        assert_eq!(to_human_readable_expanded(&d), "100 milliseconds");
    }

    #[test]
    fn test_expanded_one_second_has_no_singular() {
        assert_eq!(to_human_readable_expanded(&TimeDelta::seconds(1)), "1 seconds");
    }

    #[test]
    fn test_expanded_skips_zero_components() {
        let d = TimeDelta::days(2) + TimeDelta::seconds(3);
        assert_eq!(to_human_readable_expanded(&d), "2 days 3 seconds");
    }

    #[test]
    fn test_expanded_all_components() {
        let d = TimeDelta::days(365 * 2 + 3)
            + TimeDelta::hours(4)
            + TimeDelta::minutes(5)
            + TimeDelta::seconds(6)
            + TimeDelta::milliseconds(7);
        assert_eq!(
            to_human_readable_expanded(&d),
            "2 years 3 days 4 hours 5 minutes 6 seconds 7 milliseconds"
        );
    }

    #[test]
    fn test_expanded_below_one_millisecond_is_empty() {
        assert_eq!(to_human_readable_expanded(&TimeDelta::zero()), "");
        assert_eq!(to_human_readable_expanded(&TimeDelta::microseconds(999)), "");
    }

    #[test]
    fn test_expanded_negative_is_empty() {
        assert_eq!(to_human_readable_expanded(&TimeDelta::seconds(-30)), "");
    }

    #[test]
    fn test_expanded_custom_labels() {
        let units = TimeUnits::builder()
            .label(TimeUnit::Years, "y")
            .label(TimeUnit::Days, "d")
            .label(TimeUnit::Minutes, "min")
            .label(TimeUnit::Milliseconds, "ms")
            .build();
        let d = TimeDelta::days(400) + TimeDelta::minutes(2) + TimeDelta::milliseconds(50);
        assert_eq!(
            to_human_readable_expanded_with(&d, &units),
            "1 y 35 d 2 min 50 ms"
        );
    }

    #[test]
    fn test_expanded_empty_trailing_label_is_trimmed() {
        let units = TimeUnits::builder().label(TimeUnit::Milliseconds, "").build();
        let d = TimeDelta::milliseconds(1_250);
        assert_eq!(to_human_readable_expanded_with(&d, &units), "1 seconds 250");
    }
}

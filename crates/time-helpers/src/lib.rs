//! # time-helpers
//!
//! Small, pure helpers over chrono's instant and duration types.
//!
//! Every function takes explicit inputs and never reads the system clock, so
//! results are deterministic and easy to test.
//!
//! ## Modules
//!
//! - [`instant`] — Unix epoch seconds/milliseconds ↔ `DateTime`
//! - [`offset`] — Fuzzy offsets like `"+5D"` or `"-3h"` applied to a `DateTime`
//! - [`span`] — Add weeks, months, years, etc. to a `TimeDelta`; component decomposition
//! - [`humanize`] — Simple ("a minute") and expanded ("1 days 2 hours") duration phrases
//! - [`units`] — Unit kinds and configurable display labels
//! - [`error`] — Error types

pub mod error;
pub mod humanize;
pub mod instant;
pub mod offset;
pub mod span;
pub mod units;

pub use error::TimeHelpersError;
pub use humanize::{
    to_human_readable_expanded, to_human_readable_expanded_with, to_human_readable_simple,
};
pub use instant::{
    from_unix_milliseconds, from_unix_seconds, to_unix_milliseconds, to_unix_seconds, UNIX_EPOCH,
};
pub use offset::{fuzzy_add, FuzzyOffset, OffsetUnit};
pub use span::{
    add_days, add_hours, add_milliseconds, add_minutes, add_months, add_seconds, add_weeks,
    add_years,
};
pub use units::{TimeUnit, TimeUnits, TimeUnitsBuilder};

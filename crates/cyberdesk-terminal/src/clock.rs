//! Wall clock abstraction for the `date` command.

use chrono::{DateTime, FixedOffset, Local};

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Render a timestamp the way browsers print `Date` values,
/// e.g. `Tue Jan 02 2024 03:04:05 GMT+0000`.
pub fn format_timestamp(at: &DateTime<FixedOffset>) -> String {
    at.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

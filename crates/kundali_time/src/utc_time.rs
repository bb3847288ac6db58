//! UT calendar date/time with sub-second precision.
//!
//! `UtcTime` is the result of shifting a civil (zone) time to Universal
//! Time. It converts to and from Julian Dates without leap-second
//! bookkeeping: every day has 86 400 seconds on this axis.

use serde::{Deserialize, Serialize};

use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

/// UT calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Fraction of the day elapsed, in [0, 1).
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 * 3600.0 + self.minute as f64 * 60.0 + self.second) / SECONDS_PER_DAY
    }

    /// Julian Date (UT).
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64 + self.day_fraction())
    }

    /// Calendar form of a Julian Date (UT).
    ///
    /// Seconds are rounded to the millisecond so that a Julian Date built
    /// from whole seconds comes back as whole seconds.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_ms = (day_frac.fract() * SECONDS_PER_DAY * 1000.0).round() as u64;
        if total_ms >= 86_400_000 {
            // Rounded up into the next day; let the calendar carry it.
            return Self::from_jd(calendar_to_jd(year, month, day as f64 + 1.0));
        }
        let hour = (total_ms / 3_600_000) as u32;
        let minute = ((total_ms % 3_600_000) / 60_000) as u32;
        let second = (total_ms % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

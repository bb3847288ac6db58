//! Core types for Vimshottari dasha periods.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length used to convert dasha years to days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Total length of one Vimshottari cycle in years.
pub const TOTAL_YEARS: f64 = 120.0;

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00Z.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Dasha depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    /// JD UT, inclusive.
    pub start_jd: f64,
    /// JD UT, exclusive.
    pub end_jd: f64,
    /// Length actually covered, in years. Shorter than `full_years` only for
    /// the birth-anchored first mahadasha.
    pub duration_years: f64,
    /// The lord's full allotment at this level, in years.
    pub full_years: f64,
    pub level: DashaLevel,
}

impl DashaPeriod {
    /// Duration of the period in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Whether `jd` falls in `[start_jd, end_jd)`.
    pub fn contains(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd < self.end_jd
    }

    pub fn start_utc(&self) -> Option<DateTime<Utc>> {
        jd_to_utc(self.start_jd)
    }

    pub fn end_utc(&self) -> Option<DateTime<Utc>> {
        jd_to_utc(self.end_jd)
    }
}

/// JD UT to a UTC timestamp at millisecond resolution. `None` when the
/// instant lies outside chrono's representable range.
pub fn jd_to_utc(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * 86_400_000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// The nine mahadashas from birth, plus the birth balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSequence {
    pub birth_jd: f64,
    pub starting_lord: Graha,
    /// Fraction of the Moon's nakshatra already traversed at birth, [0, 1).
    pub elapsed_fraction: f64,
    /// Years of the starting lord's period still to run at birth.
    pub balance_years: f64,
    /// Index of the period running at birth. Always 0 for a fresh sequence.
    pub current_index: usize,
    pub periods: Vec<DashaPeriod>,
}

impl DashaSequence {
    /// The period running at birth.
    pub fn current(&self) -> Option<&DashaPeriod> {
        self.periods.get(self.current_index)
    }

    /// Period containing `jd`, or `None` before birth or after the last period.
    pub fn active_at(&self, jd: f64) -> Option<&DashaPeriod> {
        let idx = self.periods.partition_point(|p| p.end_jd <= jd);
        self.periods.get(idx).filter(|p| p.contains(jd))
    }

    /// Sum of the full allotments; 120 for a complete cycle.
    pub fn total_full_years(&self) -> f64 {
        self.periods.iter().map(|p| p.full_years).sum()
    }

    pub fn end_jd(&self) -> Option<f64> {
        self.periods.last().map(|p| p.end_jd)
    }
}

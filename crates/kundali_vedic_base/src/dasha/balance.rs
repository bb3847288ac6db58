//! Birth balance of the first mahadasha.
//!
//! The Moon's progress through its own nakshatra at birth decides how much
//! of the starting lord's period has already run.

use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};

/// Birth balance derived from the Moon's sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    pub nakshatra: NakshatraInfo,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Portion of `entry_period_years` still to run.
    pub balance_years: f64,
}

/// Compute the balance of a period of `entry_period_years` for a Moon at
/// `moon_sidereal_lon`.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, entry_period_years: f64) -> BirthBalance {
    let nakshatra = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = nakshatra.elapsed_fraction;
    BirthBalance {
        nakshatra,
        elapsed_fraction,
        balance_years: entry_period_years * (1.0 - elapsed_fraction),
    }
}

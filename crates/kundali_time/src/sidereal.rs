//! Greenwich Mean Sidereal Time and local sidereal time.
//!
//! All functions take UT Julian Dates and return degrees in [0, 360).
//! The chart layer only needs sidereal time to locate the ecliptic
//! horizon, so the distinction between UT1 and UTC is ignored.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, jd_to_centuries};

/// Greenwich Mean Sidereal Time in degrees at a UT Julian Date.
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd_ut - J2000_JD) + 0.000_387_933 * t2
        - t3 / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude, both in degrees.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg + longitude_east_deg).rem_euclid(360.0)
}

//! Mean lunar node and the Rahu/Ketu axis.
//!
//! The node polynomial is the Meeus (Chapter 47) mean longitude of the
//! Moon's ascending node, referred to the mean equinox of date. The chart
//! layer places Rahu half a turn from that polynomial and Ketu opposite
//! Rahu, so Ketu − Rahu is exactly 180° by construction.

/// Mean node polynomial in degrees [0, 360).
///
/// Ω = 125.1228 − 1934.136·T + 0.0020708·T² + T³/450000
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    (125.1228 - 1934.136 * t + 0.002_070_8 * t2 + t3 / 450_000.0).rem_euclid(360.0)
}

/// Tropical longitude of Rahu in degrees [0, 360): node + 180°.
pub fn rahu_tropical_deg(t: f64) -> f64 {
    (mean_node_deg(t) + 180.0).rem_euclid(360.0)
}

/// Ketu is always exactly opposite Rahu.
pub fn ketu_from_rahu_deg(rahu_deg: f64) -> f64 {
    (rahu_deg + 180.0).rem_euclid(360.0)
}

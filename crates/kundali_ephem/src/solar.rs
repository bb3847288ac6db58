//! Apparent geocentric longitude of the Sun.
//!
//! Low-precision series from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 25: geometric mean longitude plus the equation of centre,
//! corrected for aberration and nutation. Accuracy about 0.01°.

/// Sun's apparent ecliptic longitude in degrees [0, 360), equinox of date.
///
/// `t` = Julian centuries since J2000.0.
pub fn sun_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_longitude = l0 + c;
    let omega = (125.04 - 1934.136 * t).to_radians();
    (true_longitude - 0.005_69 - 0.004_78 * omega.sin()).rem_euclid(360.0)
}

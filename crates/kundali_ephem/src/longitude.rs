//! Unified tropical longitude and apparent motion for every body.

use kundali_time::jd_to_centuries;

use crate::body::Body;
use crate::elements::Orbit;
use crate::kepler::KeplerConfig;
use crate::lunar::moon_longitude_deg;
use crate::planets::geocentric_longitude_deg;
use crate::solar::sun_longitude_deg;

/// Half-width of the central difference used for apparent speed, in days.
pub const SPEED_HALF_STEP_DAYS: f64 = 0.5;

/// Geocentric tropical ecliptic longitude in degrees [0, 360), equinox of date.
pub fn tropical_longitude_deg(body: Body, jd: f64, cfg: &KeplerConfig) -> f64 {
    let t = jd_to_centuries(jd);
    match Orbit::of(body) {
        Some(orbit) => geocentric_longitude_deg(orbit, jd, cfg),
        None if body == Body::Moon => moon_longitude_deg(t),
        None => sun_longitude_deg(t),
    }
}

/// Apparent longitude speed in degrees per day (negative when retrograde).
pub fn longitude_speed_deg_per_day(body: Body, jd: f64, cfg: &KeplerConfig) -> f64 {
    let h = SPEED_HALF_STEP_DAYS;
    let before = tropical_longitude_deg(body, jd - h, cfg);
    let after = tropical_longitude_deg(body, jd + h, cfg);
    // Shortest signed arc, so a 359° → 1° step reads as +2°.
    let delta = (after - before + 540.0).rem_euclid(360.0) - 180.0;
    delta / (2.0 * h)
}

/// Apparent retrograde motion.
///
/// Always false for the Sun and Moon. For the five planets this is the sign
/// of the central-difference speed, so it inherits the accuracy limits of
/// the mean-element orbits near a station.
pub fn is_retrograde(body: Body, jd: f64, cfg: &KeplerConfig) -> bool {
    body.can_retrograde() && longitude_speed_deg_per_day(body, jd, cfg) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;

    #[test]
    fn all_longitudes_normalized() {
        let cfg = KeplerConfig::default();
        for k in 0..30 {
            let jd = 2_415_020.5 + k as f64 * 1234.5;
            for &b in &ALL_BODIES {
                let lon = tropical_longitude_deg(b, jd, &cfg);
                assert!((0.0..360.0).contains(&lon), "{b:?} at {jd}: {lon}");
            }
        }
    }

    #[test]
    fn luminaries_never_retrograde() {
        let cfg = KeplerConfig::default();
        for k in 0..100 {
            let jd = 2_448_000.5 + k as f64 * 7.3;
            assert!(!is_retrograde(Body::Sun, jd, &cfg));
            assert!(!is_retrograde(Body::Moon, jd, &cfg));
        }
    }

    #[test]
    fn mars_retrograde_near_opposition_2003() {
        // Opposition 2003-08-28; Mars retrograde 2003-07-30 .. 2003-09-29.
        let cfg = KeplerConfig::default();
        assert!(is_retrograde(Body::Mars, 2_452_879.5, &cfg));
        // Direct well before the station (2003-05-01).
        assert!(!is_retrograde(Body::Mars, 2_452_760.5, &cfg));
    }

    #[test]
    fn every_planet_retrogrades_at_some_point() {
        let cfg = KeplerConfig::default();
        for b in [Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter, Body::Saturn] {
            let found = (0..800).any(|k| is_retrograde(b, 2_451_545.0 + k as f64 * 1.0, &cfg));
            assert!(found, "{b:?} never retrograde in 800 days");
        }
    }

    #[test]
    fn speed_across_zero_aries_is_small_and_positive_for_sun() {
        let cfg = KeplerConfig::default();
        // Around the 2000 March equinox the Sun crosses 0°.
        let v = longitude_speed_deg_per_day(Body::Sun, 2_451_623.8, &cfg);
        assert!((0.9..1.1).contains(&v), "sun speed = {v}");
    }
}

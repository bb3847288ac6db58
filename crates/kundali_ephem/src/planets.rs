//! Heliocentric and geocentric positions from mean Keplerian elements.
//!
//! Each orbit is propagated with [`elements_at`], Kepler's equation is
//! solved for the eccentric anomaly and the orbital-plane position is
//! rotated onto the J2000 ecliptic. The geocentric longitude is the
//! direction from the Earth–Moon barycentre to the planet, carried to the
//! equinox of date with the general precession.

use kundali_time::ayanamsha::general_precession_arcsec;
use kundali_time::jd_to_centuries;

use crate::elements::{Orbit, elements_at};
use crate::kepler::{KeplerConfig, solve_kepler, true_anomaly};

/// Heliocentric ecliptic rectangular coordinates (au), J2000 ecliptic.
pub fn heliocentric_position(orbit: Orbit, t: f64, cfg: &KeplerConfig) -> [f64; 3] {
    let el = elements_at(orbit, t);
    let m = el.mean_anomaly_deg().to_radians();
    let ecc = solve_kepler(m, el.e, cfg);

    let xp = el.a * (ecc.cos() - el.e);
    let yp = el.a * (1.0 - el.e * el.e).sqrt() * ecc.sin();

    let (so, co) = el.arg_perihelion_deg().to_radians().sin_cos();
    let (sn, cn) = el.node.to_radians().sin_cos();
    let (si, ci) = el.i.to_radians().sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Heliocentric longitude in degrees [0, 360): `(v + ϖ) mod 360`.
///
/// This is the in-plane approximation that ignores the small inclination
/// of each orbit to the ecliptic.
pub fn heliocentric_longitude_deg(orbit: Orbit, jd: f64, cfg: &KeplerConfig) -> f64 {
    let el = elements_at(orbit, jd_to_centuries(jd));
    let ecc = solve_kepler(el.mean_anomaly_deg().to_radians(), el.e, cfg);
    let v = true_anomaly(ecc, el.e).to_degrees();
    (v + el.varpi).rem_euclid(360.0)
}

/// Geocentric tropical longitude of a planet in degrees [0, 360), equinox of date.
pub fn geocentric_longitude_deg(orbit: Orbit, jd: f64, cfg: &KeplerConfig) -> f64 {
    let t = jd_to_centuries(jd);
    let p = heliocentric_position(orbit, t, cfg);
    let e = heliocentric_position(Orbit::EarthMoon, t, cfg);
    let lon_j2000 = (p[1] - e[1]).atan2(p[0] - e[0]).to_degrees();
    (lon_j2000 + general_precession_arcsec(t) / 3600.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORBITS: [Orbit; 6] = [
        Orbit::Mercury,
        Orbit::Venus,
        Orbit::EarthMoon,
        Orbit::Mars,
        Orbit::Jupiter,
        Orbit::Saturn,
    ];

    fn norm(p: [f64; 3]) -> f64 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    #[test]
    fn radius_between_perihelion_and_aphelion() {
        let cfg = KeplerConfig::default();
        for orbit in ORBITS {
            for k in 0..8 {
                let t = -0.9 + k as f64 * 0.13;
                let el = elements_at(orbit, t);
                let r = norm(heliocentric_position(orbit, t, &cfg));
                assert!(
                    r >= el.a * (1.0 - el.e) - 1e-9 && r <= el.a * (1.0 + el.e) + 1e-9,
                    "{orbit:?} r = {r}"
                );
            }
        }
    }

    #[test]
    fn earth_opposite_the_sun() {
        // Heliocentric Earth longitude ≈ geocentric Sun + 180.
        let jd = 2_451_545.0;
        let t = jd_to_centuries(jd);
        let e = heliocentric_position(Orbit::EarthMoon, t, &KeplerConfig::default());
        let earth = e[1].atan2(e[0]).to_degrees().rem_euclid(360.0);
        let sun = crate::solar::sun_longitude_deg(t);
        let diff = (earth - sun - 180.0).rem_euclid(360.0);
        let diff = diff.min(360.0 - diff);
        assert!(diff < 0.05, "earth {earth} vs sun {sun}");
    }

    #[test]
    fn in_plane_longitude_close_to_full_rotation() {
        let cfg = KeplerConfig::default();
        let jd = 2_455_000.5;
        let t = jd_to_centuries(jd);
        for orbit in [Orbit::Venus, Orbit::Mars, Orbit::Jupiter, Orbit::Saturn] {
            let p = heliocentric_position(orbit, t, &cfg);
            let full = p[1].atan2(p[0]).to_degrees().rem_euclid(360.0);
            let approx = heliocentric_longitude_deg(orbit, jd, &cfg);
            let d = (full - approx).rem_euclid(360.0);
            let d = d.min(360.0 - d);
            // Reduction to the ecliptic is < 0.2° for inclinations under 3.4°.
            assert!(d < 0.25, "{orbit:?}: {full} vs {approx}");
        }
    }

    #[test]
    fn venus_stays_within_greatest_elongation() {
        let cfg = KeplerConfig::default();
        for k in 0..40 {
            let jd = 2_447_000.5 + k as f64 * 37.0;
            let venus = geocentric_longitude_deg(Orbit::Venus, jd, &cfg);
            let sun = crate::solar::sun_longitude_deg(jd_to_centuries(jd));
            let d = (venus - sun).rem_euclid(360.0);
            let d = d.min(360.0 - d);
            assert!(d < 48.5, "Venus elongation {d} at {jd}");
        }
    }

    #[test]
    fn mercury_stays_within_greatest_elongation() {
        let cfg = KeplerConfig::default();
        for k in 0..40 {
            let jd = 2_447_000.5 + k as f64 * 11.0;
            let merc = geocentric_longitude_deg(Orbit::Mercury, jd, &cfg);
            let sun = crate::solar::sun_longitude_deg(jd_to_centuries(jd));
            let d = (merc - sun).rem_euclid(360.0);
            let d = d.min(360.0 - d);
            assert!(d < 28.5, "Mercury elongation {d} at {jd}");
        }
    }
}

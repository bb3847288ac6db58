//! Lagna (Ascendant) and MC (Midheaven) from local sidereal time.
//!
//! Standard spherical astronomy for the ecliptic longitude of the point
//! rising on the eastern horizon and of the point culminating on the
//! meridian. Inputs and outputs are tropical degrees; the obliquity is held
//! at its J2000 value.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Montenbruck & Pfleger.

use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_281;

/// Below this the ascendant denominator is treated as zero.
pub const LAGNA_DEGENERACY_EPS: f64 = 1e-10;

/// Tropical ecliptic longitude of the Lagna in degrees [0, 360).
///
/// `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
///
/// Returns `None` where the horizon and ecliptic become indeterminate:
/// at or beyond the poles, when `cos ε + sin ε·tan φ` vanishes, or when the
/// arithmetic produces a non-finite value. Callers choose the fallback.
pub fn lagna_tropical_deg(lst_deg: f64, latitude_deg: f64) -> Option<f64> {
    if !lst_deg.is_finite() || !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
        return None;
    }
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let theta = lst_deg.to_radians();
    let tan_phi = latitude_deg.to_radians().tan();
    if !tan_phi.is_finite() || (eps.cos() + eps.sin() * tan_phi).abs() < LAGNA_DEGENERACY_EPS {
        return None;
    }

    let asc = f64::atan2(
        theta.cos(),
        -(theta.sin() * eps.cos() + tan_phi * eps.sin()),
    )
    .to_degrees();
    asc.is_finite().then(|| normalize_360(asc))
}

/// Tropical ecliptic longitude of the MC in degrees [0, 360).
///
/// `MC = atan2(sin θ, cos θ·cos ε)`
pub fn mc_tropical_deg(lst_deg: f64) -> f64 {
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let theta = lst_deg.to_radians();
    normalize_360(f64::atan2(theta.sin(), theta.cos() * eps.cos()).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    /// Equinox on the meridian at the equator: 0° Cancer is rising.
    #[test]
    fn equator_lst_zero() {
        let asc = lagna_tropical_deg(0.0, 0.0).unwrap();
        assert!((asc - 90.0).abs() < 1e-10, "asc = {asc}");
    }

    /// At LST = 6h the autumnal equinox rises at any latitude.
    #[test]
    fn lst_90_raises_libra() {
        for &lat in &[-40.0, 0.0, 28.6, 51.5] {
            let asc = lagna_tropical_deg(90.0, lat).unwrap();
            assert!(arc(asc, 180.0) < 1e-9, "lat {lat}: asc = {asc}");
        }
    }

    #[test]
    fn mc_lst_zero() {
        assert!(mc_tropical_deg(0.0).abs() < 1e-10);
        assert!((mc_tropical_deg(90.0) - 90.0).abs() < 1e-10);
    }

    /// The ascendant always lies in the half of the ecliptic east of the MC.
    #[test]
    fn ascendant_leads_mc() {
        for &lat in &[-50.0, -10.0, 0.0, 28.6, 60.0] {
            for i in 0..72 {
                let lst = i as f64 * 5.0;
                let asc = lagna_tropical_deg(lst, lat).unwrap();
                let mc = mc_tropical_deg(lst);
                let d = (asc - mc).rem_euclid(360.0);
                assert!(d > 0.0 && d < 180.0, "lat {lat} lst {lst}: asc {asc} mc {mc}");
            }
        }
    }

    #[test]
    fn full_sweep_covers_the_circle() {
        let mut seen = [false; 12];
        for i in 0..360 {
            let asc = lagna_tropical_deg(i as f64, 28.6).unwrap();
            seen[(asc / 30.0) as usize % 12] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn poles_are_degenerate() {
        assert_eq!(lagna_tropical_deg(123.0, 90.0), None);
        assert_eq!(lagna_tropical_deg(123.0, -90.0), None);
        assert_eq!(lagna_tropical_deg(123.0, f64::NAN), None);
    }

    #[test]
    fn vanishing_denominator_is_degenerate() {
        // cos ε + sin ε·tan φ = 0  ⇔  φ = −(90° − ε)
        let lat = -(90.0 - OBLIQUITY_J2000_DEG);
        assert_eq!(lagna_tropical_deg(0.0, lat), None);
    }
}

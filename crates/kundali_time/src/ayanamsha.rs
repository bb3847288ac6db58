//! Ayanamsha: the sidereal−tropical offset.
//!
//! The ayanamsha grows as the equinox precesses westward against the fixed
//! stars. Each supported system is fixed by a single number, its value at
//! J2000.0; the value at any other instant adds the IAU 2006 general
//! precession in ecliptic longitude to that reference. The result is smooth,
//! monotonic in time and deterministic, which is all the chart layer needs.

use serde::{Deserialize, Serialize};

use crate::julian::jd_to_centuries;

/// Sidereal reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0° Libra sidereal.
    #[default]
    Lahiri,
    /// B.V. Raman, "Hindu Predictive Astrology".
    Raman,
    /// Krishnamurti Paddhati.
    Krishnamurti,
    /// Fagan-Bradley synetic vernal point.
    FaganBradley,
    /// Sri Yukteshwar, "The Holy Science".
    Yukteshwar,
}

const ALL_SYSTEMS: [AyanamshaSystem; 5] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Raman,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::Raman => 22.370,
            Self::Krishnamurti => 23.850,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Raman => "Raman",
            Self::Krishnamurti => "Krishnamurti",
            Self::FaganBradley => "Fagan-Bradley",
            Self::Yukteshwar => "Yukteshwar",
        }
    }

    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// p_A = 5028.796195·T + 1.1054348·T² + 0.00007964·T³
///       − 0.000023857·T⁴ − 0.0000000383·T⁵
///
/// Source: Capitaine et al. 2003, Eq. 39.
pub fn general_precession_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// Ayanamsha in degrees for `t` Julian centuries since J2000.0 (unnormalized).
pub fn ayanamsha_at_centuries(system: AyanamshaSystem, t: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_arcsec(t) / 3600.0
}

/// Ayanamsha in degrees at a Julian Date, normalized to [0, 360).
pub fn ayanamsha_deg(system: AyanamshaSystem, jd: f64) -> f64 {
    ayanamsha_at_centuries(system, jd_to_centuries(jd)).rem_euclid(360.0)
}

//! Mean Keplerian orbital elements of the classical planets.
//!
//! Source: E.M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL), Table 1, valid 1800 AD – 2050 AD. Elements are
//! referred to the mean ecliptic and equinox of J2000.0; each is a J2000
//! value plus a linear rate per Julian century.

use crate::body::Body;

/// Heliocentric orbits known to the approximator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbit {
    Mercury,
    Venus,
    /// Earth–Moon barycentre; stands in for the Earth.
    EarthMoon,
    Mars,
    Jupiter,
    Saturn,
}

impl Orbit {
    /// Orbit of a physical body. `None` for the Sun and Moon.
    pub const fn of(body: Body) -> Option<Orbit> {
        match body {
            Body::Mercury => Some(Self::Mercury),
            Body::Venus => Some(Self::Venus),
            Body::Mars => Some(Self::Mars),
            Body::Jupiter => Some(Self::Jupiter),
            Body::Saturn => Some(Self::Saturn),
            Body::Sun | Body::Moon => None,
        }
    }

    const fn row(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoon => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
        }
    }
}

/// Osculating-style elements at one instant.
///
/// Angles in degrees, `a` in au.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination to the ecliptic.
    pub i: f64,
    /// Mean longitude.
    pub l: f64,
    /// Longitude of perihelion (ϖ = Ω + ω).
    pub varpi: f64,
    /// Longitude of the ascending node.
    pub node: f64,
}

impl OrbitalElements {
    /// Mean anomaly `M = L − ϖ`, reduced to (−180, 180].
    pub fn mean_anomaly_deg(&self) -> f64 {
        let m = (self.l - self.varpi).rem_euclid(360.0);
        if m > 180.0 { m - 360.0 } else { m }
    }

    /// Argument of perihelion `ω = ϖ − Ω`.
    pub fn arg_perihelion_deg(&self) -> f64 {
        self.varpi - self.node
    }
}

// [a, e, I, L, varpi, Omega] at J2000, then the same per century.
#[rustfmt::skip]
static ELEMENTS: [[f64; 12]; 6] = [
    // Mercury
    [ 0.387_099_27, 0.205_635_93,  7.004_979_02, 252.250_323_50,  77.457_796_28,  48.330_765_93,
      0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
    // Venus
    [ 0.723_335_66, 0.006_776_72,  3.394_676_05, 181.979_099_50, 131.602_467_18,  76.679_842_55,
      0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
    // Earth–Moon barycentre
    [ 1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93,   0.0,
      0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64,  0.0],
    // Mars
    [ 1.523_710_34, 0.093_394_10,  1.849_691_42,  -4.553_432_05, -23.943_629_59,  49.559_538_91,
      0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
    // Jupiter
    [ 5.202_887_00, 0.048_386_24,  1.304_396_95,  34.396_440_51,  14.728_479_83, 100.473_909_09,
     -0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68,  0.204_691_06],
    // Saturn
    [ 9.536_675_94, 0.053_861_79,  2.485_991_87,  49.954_244_23,  92.598_878_31, 113.662_424_48,
     -0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
];

/// Elements of `orbit` at `t` Julian centuries since J2000.0.
pub fn elements_at(orbit: Orbit, t: f64) -> OrbitalElements {
    let r = &ELEMENTS[orbit.row()];
    OrbitalElements {
        a: r[0] + r[6] * t,
        e: r[1] + r[7] * t,
        i: r[2] + r[8] * t,
        l: r[3] + r[9] * t,
        varpi: r[4] + r[10] * t,
        node: r[5] + r[11] * t,
    }
}

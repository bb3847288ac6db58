//! Chart result types.

use kundali_time::{AyanamshaSystem, JulianMoment};
use kundali_vedic_base::{
    Graha, Nakshatra, Rashi, house_from, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude,
};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::geocoder::PlaceSource;
use crate::input::BirthInput;

/// Position of one graha in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub graha: Graha,
    /// Sidereal longitude in degrees [0, 360).
    pub longitude: f64,
    /// Tropical longitude (equinox of date) in degrees [0, 360).
    pub tropical_longitude: f64,
    pub rashi: Rashi,
    /// 0-11.
    pub rashi_index: u8,
    pub nakshatra: Nakshatra,
    /// 0-26.
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    /// Degrees within the rashi [0, 30).
    pub degree_in_sign: f64,
    /// Whole-sign house counted from the ascendant, 1-12.
    pub house: u8,
    pub is_retrograde: bool,
}

impl BodyPosition {
    /// Classify a sidereal longitude against the ascendant's rashi.
    pub fn from_sidereal(
        graha: Graha,
        longitude: f64,
        ayanamsha: f64,
        ascendant_rashi_index: u8,
        is_retrograde: bool,
    ) -> Self {
        let longitude = normalize_360(longitude);
        let rashi = rashi_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            graha,
            longitude,
            tropical_longitude: normalize_360(longitude + ayanamsha),
            rashi: rashi.rashi,
            rashi_index: rashi.rashi_index,
            nakshatra: nak.nakshatra,
            nakshatra_index: nak.nakshatra_index,
            pada: nak.pada,
            degree_in_sign: rashi.degrees_in_rashi,
            house: house_from(rashi.rashi_index, ascendant_rashi_index),
            is_retrograde,
        }
    }

    /// House of this body counted from `reference`'s rashi.
    pub fn house_from(&self, reference: &BodyPosition) -> u8 {
        house_from(self.rashi_index, reference.rashi_index)
    }
}

/// The rising degree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    /// Sidereal longitude in degrees [0, 360).
    pub longitude: f64,
    pub tropical_longitude: f64,
    pub rashi: Rashi,
    pub rashi_index: u8,
    pub nakshatra: Nakshatra,
    pub nakshatra_index: u8,
    pub pada: u8,
    pub degree_in_sign: f64,
    /// True when the geometry was degenerate and 0° Mesha was substituted.
    pub fallback: bool,
}

impl Ascendant {
    pub fn from_sidereal(longitude: f64, ayanamsha: f64) -> Self {
        let longitude = normalize_360(longitude);
        let rashi = rashi_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            longitude,
            tropical_longitude: normalize_360(longitude + ayanamsha),
            rashi: rashi.rashi,
            rashi_index: rashi.rashi_index,
            nakshatra: nak.nakshatra,
            nakshatra_index: nak.nakshatra_index,
            pada: nak.pada,
            degree_in_sign: rashi.degrees_in_rashi,
            fallback: false,
        }
    }

    /// 0° Mesha, flagged as a fallback.
    pub fn fallback(ayanamsha: f64) -> Self {
        Self {
            fallback: true,
            ..Self::from_sidereal(0.0, ayanamsha)
        }
    }
}

/// One house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// 1-12.
    pub house: u8,
    /// Sidereal longitude in degrees [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    pub rashi_index: u8,
}

impl HouseCusp {
    pub fn new(house: u8, longitude: f64) -> Self {
        let info = rashi_from_longitude(longitude);
        Self {
            house,
            longitude: normalize_360(longitude),
            rashi: info.rashi,
            rashi_index: info.rashi_index,
        }
    }
}

/// A computed birth chart. Read-only once built; analyses borrow it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub input: BirthInput,
    pub place_source: PlaceSource,
    /// Birth instant on the UT axis.
    pub julian_moment: JulianMoment,
    pub ayanamsha_system: AyanamshaSystem,
    /// Degrees [0, 360).
    pub ayanamsha: f64,
    /// Local sidereal time in degrees [0, 360).
    pub local_sidereal_time: f64,
    pub ascendant: Ascendant,
    /// Sidereal longitude of the MC.
    pub midheaven: f64,
    /// Nine grahas in `ALL_GRAHAS` order.
    pub bodies: Vec<BodyPosition>,
    /// Equal-house cusps.
    pub houses: [HouseCusp; 12],
    /// Sripati quadrant cusps, when requested.
    pub sripati_cusps: Option<[HouseCusp; 12]>,
}

impl Chart {
    pub fn body(&self, graha: Graha) -> Option<&BodyPosition> {
        self.bodies.iter().find(|b| b.graha == graha)
    }

    /// Like [`Chart::body`] but a missing body is an error.
    pub fn require(&self, graha: Graha) -> Result<&BodyPosition, ChartError> {
        self.body(graha).ok_or(ChartError::MissingBody(graha))
    }

    pub fn moon(&self) -> Result<&BodyPosition, ChartError> {
        self.require(Graha::Chandra)
    }
}

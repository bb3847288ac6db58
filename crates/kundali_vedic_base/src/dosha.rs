//! Dosha (affliction) predicates.
//!
//! Pure positional rules over house numbers and sidereal longitudes. The
//! chart layer gathers the inputs and wraps the answers in a report; the
//! explanatory text for each dosha is fixed reference material.

use serde::{Deserialize, Serialize};

use crate::util::{forward_arc, strictly_within_arc};

/// The afflictions the classifier knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dosha {
    Manglik,
    KaalSarp,
    SadeSati,
}

impl Dosha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manglik => "Manglik",
            Self::KaalSarp => "Kaal Sarp",
            Self::SadeSati => "Sade Sati",
        }
    }

    /// What the rule looks at, phrased for a reader.
    pub const fn rationale(self) -> &'static str {
        match self {
            Self::Manglik => {
                "Mars occupies the 1st, 4th, 7th, 8th or 12th house counted from the \
                 ascendant or from the Moon."
            }
            Self::KaalSarp => {
                "Every planet from the Sun to Saturn is hemmed within one side of the \
                 Rahu-Ketu axis."
            }
            Self::SadeSati => {
                "Saturn transits the 12th, 1st or 2nd sign from the natal Moon, the \
                 seven-and-a-half year span."
            }
        }
    }

    /// Traditional remedial measures.
    pub const fn remedies(self) -> &'static [&'static str] {
        match self {
            Self::Manglik => &[
                "Recite the Hanuman Chalisa on Tuesdays",
                "Perform Mangal Shanti puja",
                "Kumbh Vivah before marriage",
                "Donate red lentils on Tuesdays",
            ],
            Self::KaalSarp => &[
                "Perform Kaal Sarp puja at Trimbakeshwar",
                "Chant the Maha Mrityunjaya mantra",
                "Offer milk to a Shiva lingam on Mondays",
            ],
            Self::SadeSati => &[
                "Recite the Shani mantra on Saturdays",
                "Light a sesame oil lamp under a peepal tree",
                "Donate black sesame and iron items",
                "Worship Hanuman",
            ],
        }
    }
}

/// Houses from which Mars produces Manglik dosha.
pub const MANGLIK_HOUSES: [u8; 5] = [1, 4, 7, 8, 12];

/// Whether Mars in `house` (1-12) is a Manglik placement.
pub fn is_manglik_house(house: u8) -> bool {
    MANGLIK_HOUSES.contains(&house)
}

/// Side of the nodal axis on which all planets are hemmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KaalSarpArc {
    /// Forward (zodiacal) arc from Rahu to Ketu.
    RahuToKetu,
    /// Forward arc from Ketu to Rahu.
    KetuToRahu,
}

/// Kaal Sarp test over the sidereal longitudes of the seven classical bodies.
///
/// The arc whose forward span from Rahu to Ketu is at most 180° is tried
/// first, then the complementary arc. A body exactly on Rahu or Ketu
/// belongs to neither arc. An empty `others` slice never qualifies.
pub fn kaal_sarp_arc(rahu_deg: f64, ketu_deg: f64, others: &[f64]) -> Option<KaalSarpArc> {
    if others.is_empty() {
        return None;
    }
    let arcs = if forward_arc(rahu_deg, ketu_deg) <= 180.0 {
        [KaalSarpArc::RahuToKetu, KaalSarpArc::KetuToRahu]
    } else {
        [KaalSarpArc::KetuToRahu, KaalSarpArc::RahuToKetu]
    };
    arcs.into_iter().find(|arc| {
        let (from, to) = match arc {
            KaalSarpArc::RahuToKetu => (rahu_deg, ketu_deg),
            KaalSarpArc::KetuToRahu => (ketu_deg, rahu_deg),
        };
        others.iter().all(|&lon| strictly_within_arc(lon, from, to))
    })
}

/// Phase of Sade Sati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    /// Saturn in the 12th from the Moon.
    Rising,
    /// Saturn over the natal Moon sign.
    Peak,
    /// Saturn in the 2nd from the Moon.
    Setting,
}

impl SadeSatiPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Peak => "Peak",
            Self::Setting => "Setting",
        }
    }
}

/// Sade Sati phase from Saturn's house counted from the Moon, if any.
pub const fn sade_sati_phase(saturn_house_from_moon: u8) -> Option<SadeSatiPhase> {
    match saturn_house_from_moon {
        12 => Some(SadeSatiPhase::Rising),
        1 => Some(SadeSatiPhase::Peak),
        2 => Some(SadeSatiPhase::Setting),
        _ => None,
    }
}

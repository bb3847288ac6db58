//! Dosha report over a finished chart.

use kundali_vedic_base::{
    Dosha, Graha, KaalSarpArc, SAPTA_GRAHAS, SadeSatiPhase, house_from, is_manglik_house,
    kaal_sarp_arc, sade_sati_phase,
};
use serde::{Deserialize, Serialize};

use crate::chart_types::Chart;
use crate::error::ChartError;

/// Presence of one dosha plus its fixed explanatory text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoshaResult {
    pub dosha: Dosha,
    pub present: bool,
    pub rationale: String,
    pub remedies: Vec<String>,
}

impl DoshaResult {
    fn new(dosha: Dosha, present: bool) -> Self {
        Self {
            dosha,
            present,
            rationale: dosha.rationale().to_owned(),
            remedies: dosha.remedies().iter().map(|r| (*r).to_owned()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManglikReport {
    #[serde(flatten)]
    pub result: DoshaResult,
    /// Mars's house counted from the ascendant.
    pub mars_house_from_lagna: u8,
    /// Mars's house counted from the Moon.
    pub mars_house_from_moon: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KaalSarpReport {
    #[serde(flatten)]
    pub result: DoshaResult,
    /// Side of the nodal axis holding every planet, when present.
    pub arc: Option<KaalSarpArc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SadeSatiReport {
    #[serde(flatten)]
    pub result: DoshaResult,
    /// Saturn's house counted from the Moon.
    pub saturn_house_from_moon: u8,
    pub phase: Option<SadeSatiPhase>,
}

/// All three dosha checks for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoshaReport {
    pub manglik: ManglikReport,
    pub kaal_sarp: KaalSarpReport,
    pub sade_sati: SadeSatiReport,
}

impl DoshaReport {
    /// The doshas found, in report order.
    pub fn present(&self) -> Vec<Dosha> {
        [
            &self.manglik.result,
            &self.kaal_sarp.result,
            &self.sade_sati.result,
        ]
        .into_iter()
        .filter(|r| r.present)
        .map(|r| r.dosha)
        .collect()
    }
}

/// Classify Manglik, Kaal Sarp and Sade Sati for `chart`.
///
/// Fails with [`ChartError::MissingBody`] if the chart lacks any graha the
/// rules read.
pub fn classify_doshas(chart: &Chart) -> Result<DoshaReport, ChartError> {
    let moon = chart.moon()?;
    let mars = chart.require(Graha::Mangal)?;
    let saturn = chart.require(Graha::Shani)?;
    let rahu = chart.require(Graha::Rahu)?;
    let ketu = chart.require(Graha::Ketu)?;

    let from_lagna = house_from(mars.rashi_index, chart.ascendant.rashi_index);
    let from_moon = mars.house_from(moon);
    let manglik = ManglikReport {
        result: DoshaResult::new(
            Dosha::Manglik,
            is_manglik_house(from_lagna) || is_manglik_house(from_moon),
        ),
        mars_house_from_lagna: from_lagna,
        mars_house_from_moon: from_moon,
    };

    let planets = SAPTA_GRAHAS
        .iter()
        .map(|&g| chart.require(g).map(|b| b.longitude))
        .collect::<Result<Vec<f64>, ChartError>>()?;
    let arc = kaal_sarp_arc(rahu.longitude, ketu.longitude, &planets);
    let kaal_sarp = KaalSarpReport {
        result: DoshaResult::new(Dosha::KaalSarp, arc.is_some()),
        arc,
    };

    let saturn_house = saturn.house_from(moon);
    let phase = sade_sati_phase(saturn_house);
    let sade_sati = SadeSatiReport {
        result: DoshaResult::new(Dosha::SadeSati, phase.is_some()),
        saturn_house_from_moon: saturn_house,
        phase,
    };

    Ok(DoshaReport {
        manglik,
        kaal_sarp,
        sade_sati,
    })
}

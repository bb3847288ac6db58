//! Ashtakoot matching between two charts.

use kundali_vedic_base::{
    CompatibilityBand, KutaScore, MAX_KUTA_POINTS, MoonSign, nakshatra_from_longitude,
    rashi_from_longitude, score_kutas,
};
use serde::{Deserialize, Serialize};

use crate::chart_types::Chart;
use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Varna through Nadi, in that order.
    pub kutas: [KutaScore; 8],
    pub total_points: f64,
    /// Always 36.
    pub max_points: f64,
    /// `total / 36 × 100`.
    pub percentage: f64,
    pub band: CompatibilityBand,
    pub advice: String,
}

/// Score two Moon placements.
pub fn score_moons(a: MoonSign, b: MoonSign) -> CompatibilityResult {
    let kutas = score_kutas(a, b);
    let total_points: f64 = kutas.iter().map(|k| k.points).sum();
    let percentage = total_points / MAX_KUTA_POINTS * 100.0;
    let band = CompatibilityBand::from_percentage(percentage);
    CompatibilityResult {
        kutas,
        total_points,
        max_points: MAX_KUTA_POINTS,
        percentage,
        band,
        advice: band.advice().to_owned(),
    }
}

/// Rashi and nakshatra of a chart's Moon, classified from its sidereal
/// longitude.
pub fn moon_sign(chart: &Chart) -> Result<MoonSign, ChartError> {
    let moon = chart.moon()?;
    Ok(MoonSign {
        rashi: rashi_from_longitude(moon.longitude).rashi,
        nakshatra: nakshatra_from_longitude(moon.longitude).nakshatra,
    })
}

/// Score `a` against `b`. Tara and Bhakoot count from `a` to `b`.
pub fn score_compatibility(a: &Chart, b: &Chart) -> Result<CompatibilityResult, ChartError> {
    let result = score_moons(moon_sign(a)?, moon_sign(b)?);
    log::debug!(
        "compatibility {:?} x {:?}: {}/{} ({})",
        a.input.name,
        b.input.name,
        result.total_points,
        result.max_points,
        result.band.name()
    );
    Ok(result)
}

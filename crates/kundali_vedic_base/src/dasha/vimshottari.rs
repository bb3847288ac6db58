//! Vimshottari: the 120-year nakshatra dasha.
//!
//! Nine lords run in the fixed order Ketu, Venus, Sun, Moon, Mars, Rahu,
//! Jupiter, Saturn, Mercury. The Moon's birth nakshatra picks the starting
//! lord (`nakshatra index mod 9`) and its progress through that nakshatra
//! shortens the first period. Every later period runs its full length.

use super::balance::nakshatra_birth_balance;
use super::subperiod::proportional_children;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSequence, TOTAL_YEARS};
use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

/// Lords with their full periods in years, in running order.
pub const VIMSHOTTARI_SEQUENCE: [(Graha, f64); 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Shukra, 20.0),
    (Graha::Surya, 6.0),
    (Graha::Chandra, 10.0),
    (Graha::Mangal, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Guru, 16.0),
    (Graha::Shani, 19.0),
    (Graha::Buddh, 17.0),
];

/// Position of `lord` in the running order.
pub fn sequence_position(lord: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&(g, _)| g == lord)
        .unwrap_or(0)
}

/// Full mahadasha length of `lord` in years.
pub fn full_years(lord: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE[sequence_position(lord)].1
}

/// Build the nine mahadashas from birth.
///
/// `moon_sidereal_lon` is the natal Moon's sidereal longitude in degrees.
pub fn vimshottari_sequence(
    birth_jd: f64,
    moon_sidereal_lon: f64,
) -> Result<DashaSequence, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth JD must be finite"));
    }
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::InvalidInput("moon longitude must be finite"));
    }

    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let start_pos = nak.nakshatra_index as usize % VIMSHOTTARI_SEQUENCE.len();
    let (starting_lord, first_full) = VIMSHOTTARI_SEQUENCE[start_pos];
    let balance = nakshatra_birth_balance(moon_sidereal_lon, first_full);

    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());
    let mut cursor = birth_jd;
    for step in 0..VIMSHOTTARI_SEQUENCE.len() {
        let (lord, full) = VIMSHOTTARI_SEQUENCE[(start_pos + step) % VIMSHOTTARI_SEQUENCE.len()];
        let years = if step == 0 { balance.balance_years } else { full };
        let end = cursor + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            duration_years: years,
            full_years: full,
            level: DashaLevel::Mahadasha,
        });
        cursor = end;
    }

    Ok(DashaSequence {
        birth_jd,
        starting_lord,
        elapsed_fraction: balance.elapsed_fraction,
        balance_years: balance.balance_years,
        current_index: 0,
        periods,
    })
}

/// The nine antardashas of a mahadasha, starting with its own lord.
///
/// Returns an empty list for a period that is already an antardasha.
pub fn antardashas(period: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(child_level) = period.level.child_level() else {
        return Vec::new();
    };
    let start = sequence_position(period.lord);
    let order: Vec<(Graha, f64)> = (0..VIMSHOTTARI_SEQUENCE.len())
        .map(|k| VIMSHOTTARI_SEQUENCE[(start + k) % VIMSHOTTARI_SEQUENCE.len()].0)
        .map(|lord| (lord, full_years(lord)))
        .collect();
    proportional_children(period, &order, TOTAL_YEARS, child_level)
}

//! Bhava (house) division.
//!
//! Equal houses are the chart's primary frame. Sripati (Porphyry) quadrant
//! cusps are offered as supplementary output: the four angles are fixed by
//! the Lagna and MC and each quadrant arc is trisected.

use crate::util::{forward_arc, normalize_360};

/// Equal-house cusps: cusp *h* = Lagna + (h − 1)·30°.
pub fn equal_cusps(lagna_deg: f64) -> [f64; 12] {
    std::array::from_fn(|i| normalize_360(lagna_deg + i as f64 * 30.0))
}

/// Sripati cusps from the Lagna and MC (both sidereal or both tropical).
///
/// Cusp 1 = Lagna, 4 = IC, 7 = Descendant, 10 = MC; the two cusps after
/// each angle trisect the forward arc to the next angle.
pub fn sripati_cusps(lagna_deg: f64, mc_deg: f64) -> [f64; 12] {
    let angles = [
        normalize_360(lagna_deg),
        normalize_360(mc_deg + 180.0),
        normalize_360(lagna_deg + 180.0),
        normalize_360(mc_deg),
    ];
    let mut cusps = [0.0; 12];
    for q in 0..4 {
        let from = angles[q];
        let arc = forward_arc(from, angles[(q + 1) % 4]);
        cusps[q * 3] = from;
        cusps[q * 3 + 1] = normalize_360(from + arc / 3.0);
        cusps[q * 3 + 2] = normalize_360(from + 2.0 * arc / 3.0);
    }
    cusps
}

/// Whole-sign house (1-12) of a rashi counted from a reference rashi.
///
/// `house = ((rashi − reference + 12) mod 12) + 1`
pub const fn house_from(rashi_index: u8, reference_rashi_index: u8) -> u8 {
    ((rashi_index as i16 - reference_rashi_index as i16).rem_euclid(12) + 1) as u8
}

//! Jyotish primitives shared by the chart engine.
//!
//! This crate provides:
//! - Rashi, nakshatra and graha classification of sidereal longitudes
//! - Lagna and midheaven from local sidereal time, equal and Sripati houses
//! - Dosha predicates (Manglik, Kaal Sarp, Sade Sati)
//! - Ashtakoot kuta tables
//! - Vimshottari dasha sequencing
//!
//! Everything here is pure arithmetic over angles and tables; ephemeris and
//! time conversion live in the sibling crates.

pub mod bhava;
pub mod dasha;
pub mod dosha;
pub mod error;
pub mod graha;
pub mod graha_relationships;
pub mod kuta;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use bhava::{equal_cusps, house_from, sripati_cusps};
pub use dasha::{
    DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSequence, TOTAL_YEARS, VIMSHOTTARI_SEQUENCE,
    antardashas, vimshottari_sequence,
};
pub use dosha::{
    Dosha, KaalSarpArc, MANGLIK_HOUSES, SadeSatiPhase, is_manglik_house, kaal_sarp_arc,
    sade_sati_phase,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use graha_relationships::{
    MutualRelation, NaisargikaMaitri, mutual_relation, naisargika_maitri,
};
pub use kuta::{
    ALL_KUTAS, CompatibilityBand, Kuta, KutaScore, MAX_KUTA_POINTS, MoonSign, score_kutas,
};
pub use lagna::{OBLIQUITY_J2000_DEG, lagna_tropical_deg, mc_tropical_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, Gana, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use util::normalize_360;

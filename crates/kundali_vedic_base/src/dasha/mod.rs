//! Vimshottari dasha (planetary period) calculations.
//!
//! Mahadashas are anchored to the Moon's birth nakshatra; antardashas split
//! each mahadasha in proportion to the nine lords' full periods.

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use types::{
    DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSequence, TOTAL_YEARS, jd_to_utc,
};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, antardashas, full_years, sequence_position, vimshottari_sequence,
};

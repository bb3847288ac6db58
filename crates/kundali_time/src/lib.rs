//! Civil time to the astronomical time axis.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - Validated civil date/time and the zone→UT shift
//! - Greenwich and local sidereal time
//! - Ayanamsha for the supported sidereal systems

pub mod ayanamsha;
pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_at_centuries, ayanamsha_deg};
pub use civil::{CivilDate, CivilDateTime, CivilTime, JulianMoment, julian_day};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year,
    jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
pub use utc_time::UtcTime;

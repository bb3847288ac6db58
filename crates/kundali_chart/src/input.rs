//! Validated birth data.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use kundali_time::{CivilDate, CivilTime, JulianMoment, julian_day};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::geocoder::GeoLocation;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Everything a chart is computed from.
///
/// [`BirthInput::new`] validates; a deserialized value is re-validated by
/// the chart constructor before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub name: String,
    pub date: CivilDate,
    pub time: CivilTime,
    pub location: GeoLocation,
}

impl BirthInput {
    pub fn new(
        name: impl Into<String>,
        date: CivilDate,
        time: CivilTime,
        location: GeoLocation,
    ) -> Result<Self, ChartError> {
        let input = Self {
            name: name.into(),
            date,
            time,
            location,
        };
        input.validate()?;
        Ok(input)
    }

    /// Check the calendar day, the year range `[1900, current year]`, the
    /// clock time and the coordinates.
    pub fn validate(&self) -> Result<(), ChartError> {
        let CivilDate { year, month, day } = self.date;
        CivilDate::new(year, month, day)?;
        let current_year = Utc::now().year();
        if !(MIN_BIRTH_YEAR..=current_year).contains(&year) {
            return Err(ChartError::invalid(
                "date",
                format!("year {year} is outside [{MIN_BIRTH_YEAR}, {current_year}]"),
            ));
        }
        let CivilTime {
            hour,
            minute,
            second,
        } = self.time;
        CivilTime::new(hour, minute, second)?;
        self.location.validate()
    }

    /// Julian Day (UT) of the birth instant.
    pub fn julian_moment(&self) -> Result<JulianMoment, ChartError> {
        Ok(julian_day(
            self.date,
            self.time,
            self.location.utc_offset_hours,
        )?)
    }
}

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<CivilDate, ChartError> {
    let d = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| ChartError::invalid("date", format!("{s:?}: {e}")))?;
    Ok(CivilDate::new(d.year(), d.month(), d.day())?)
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_time(s: &str) -> Result<CivilTime, ChartError> {
    let s = s.trim();
    let t = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|e| ChartError::invalid("time", format!("{s:?}: {e}")))?;
    Ok(CivilTime::new(t.hour(), t.minute(), t.second())?)
}

//! Civil (zone) date and time, and their shift to Universal Time.

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{days_in_month, jd_to_calendar, jd_to_centuries};
use crate::utc_time::UtcTime;

/// Largest accepted distance from UTC, in hours.
pub const MAX_UTC_OFFSET_HOURS: f64 = 14.0;

/// A validated Gregorian calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let invalid = |reason| TimeError::InvalidDate {
            year,
            month,
            day,
            reason,
        };
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be 1-12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(invalid("day does not exist in that month"));
        }
        Ok(Self { year, month, day })
    }

    /// The following calendar day.
    pub fn succ(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                month: self.month + 1,
                day: 1,
                ..self
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }

    /// The preceding calendar day.
    pub fn pred(self) -> Self {
        if self.day > 1 {
            Self {
                day: self.day - 1,
                ..self
            }
        } else if self.month > 1 {
            let month = self.month - 1;
            Self {
                month,
                day: days_in_month(self.year, month),
                ..self
            }
        } else {
            Self {
                year: self.year - 1,
                month: 12,
                day: 31,
            }
        }
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A validated wall-clock time of day (whole seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CivilTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidTime("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidTime("minute must be 0-59"));
        }
        if second > 59 {
            return Err(TimeError::InvalidTime("second must be 0-59"));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        Self::new(hour, minute, 0)
    }

    pub const fn seconds_of_day(self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A civil date and time in some zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub date: CivilDate,
    pub time: CivilTime,
}

impl CivilDateTime {
    pub const fn new(date: CivilDate, time: CivilTime) -> Self {
        Self { date, time }
    }

    /// Shift to Universal Time by subtracting `utc_offset_hours`.
    ///
    /// The offset is rounded to whole seconds. Days borrowed or carried
    /// across midnight roll the month and year using real month lengths.
    pub fn to_ut(&self, utc_offset_hours: f64) -> Result<UtcTime, TimeError> {
        if !utc_offset_hours.is_finite() || utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
            return Err(TimeError::InvalidOffset(utc_offset_hours));
        }
        let offset_s = (utc_offset_hours * 3600.0).round() as i64;
        let mut secs = self.time.seconds_of_day() - offset_s;
        let mut date = self.date;
        while secs < 0 {
            secs += 86_400;
            date = date.pred();
        }
        while secs >= 86_400 {
            secs -= 86_400;
            date = date.succ();
        }
        Ok(UtcTime::new(
            date.year,
            date.month,
            date.day,
            (secs / 3600) as u32,
            ((secs % 3600) / 60) as u32,
            (secs % 60) as f64,
        ))
    }
}

/// A Julian Date on the UT axis.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianMoment(f64);

impl JulianMoment {
    pub const fn from_jd(jd: f64) -> Self {
        Self(jd)
    }

    pub const fn jd(self) -> f64 {
        self.0
    }

    /// Julian centuries since J2000.0.
    pub fn centuries(self) -> f64 {
        jd_to_centuries(self.0)
    }

    /// `(year, month, day_with_fraction)`.
    pub fn to_calendar(self) -> (i32, u32, f64) {
        jd_to_calendar(self.0)
    }

    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_jd(self.0)
    }

    /// Moment `days` later (negative for earlier).
    pub fn add_days(self, days: f64) -> Self {
        Self(self.0 + days)
    }
}

impl From<UtcTime> for JulianMoment {
    fn from(t: UtcTime) -> Self {
        Self(t.to_jd())
    }
}

/// Julian Day of a civil date/time observed at `utc_offset_hours` east of UTC.
pub fn julian_day(
    date: CivilDate,
    time: CivilTime,
    utc_offset_hours: f64,
) -> Result<JulianMoment, TimeError> {
    let ut = CivilDateTime::new(date, time).to_ut(utc_offset_hours)?;
    Ok(JulianMoment::from(ut))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn rejects_impossible_days() {
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2023, 4, 31).is_err());
        assert!(CivilDate::new(2023, 0, 1).is_err());
        assert!(CivilDate::new(2023, 1, 0).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn rejects_out_of_range_time() {
        assert!(CivilTime::new(24, 0, 0).is_err());
        assert!(CivilTime::new(0, 60, 0).is_err());
        assert!(CivilTime::new(0, 0, 60).is_err());
        assert!(CivilTime::new(23, 59, 59).is_ok());
    }

    #[test]
    fn succ_and_pred_roll_year() {
        assert_eq!(date(2023, 12, 31).succ(), date(2024, 1, 1));
        assert_eq!(date(2024, 1, 1).pred(), date(2023, 12, 31));
        assert_eq!(date(2024, 3, 1).pred(), date(2024, 2, 29));
        assert_eq!(date(2023, 3, 1).pred(), date(2023, 2, 28));
    }

    #[test]
    fn ist_shift_same_day() {
        let dt = CivilDateTime::new(date(1990, 5, 15), CivilTime::hm(14, 30).unwrap());
        let ut = dt.to_ut(5.5).unwrap();
        assert_eq!((ut.year, ut.month, ut.day, ut.hour, ut.minute), (1990, 5, 15, 9, 0));
    }

    #[test]
    fn positive_offset_borrows_across_new_year() {
        let dt = CivilDateTime::new(date(2024, 1, 1), CivilTime::hm(2, 0).unwrap());
        let ut = dt.to_ut(5.5).unwrap();
        assert_eq!((ut.year, ut.month, ut.day, ut.hour, ut.minute), (2023, 12, 31, 20, 30));
    }

    #[test]
    fn negative_offset_carries_into_leap_day() {
        let dt = CivilDateTime::new(date(2024, 2, 28), CivilTime::hm(22, 0).unwrap());
        let ut = dt.to_ut(-5.0).unwrap();
        assert_eq!((ut.year, ut.month, ut.day, ut.hour), (2024, 2, 29, 3));
    }

    #[test]
    fn negative_offset_carries_into_march_in_common_year() {
        let dt = CivilDateTime::new(date(2023, 2, 28), CivilTime::hm(22, 0).unwrap());
        let ut = dt.to_ut(-5.0).unwrap();
        assert_eq!((ut.year, ut.month, ut.day, ut.hour), (2023, 3, 1, 3));
    }

    #[test]
    fn offset_out_of_range() {
        let dt = CivilDateTime::new(date(2000, 1, 1), CivilTime::hm(0, 0).unwrap());
        assert!(matches!(dt.to_ut(14.5), Err(TimeError::InvalidOffset(_))));
        assert!(matches!(dt.to_ut(f64::NAN), Err(TimeError::InvalidOffset(_))));
    }

    #[test]
    fn julian_day_j2000() {
        let jd = julian_day(date(2000, 1, 1), CivilTime::hm(12, 0).unwrap(), 0.0).unwrap();
        assert!((jd.jd() - 2_451_545.0).abs() < 1e-9);
        assert!(jd.centuries().abs() < 1e-12);
    }

    #[test]
    fn julian_day_monotonic_across_midnight() {
        let before = julian_day(date(2023, 12, 31), CivilTime::new(23, 59, 59).unwrap(), 5.5)
            .unwrap();
        let after = julian_day(date(2024, 1, 1), CivilTime::new(0, 0, 0).unwrap(), 5.5).unwrap();
        let diff_s = (after.jd() - before.jd()) * 86_400.0;
        assert!((diff_s - 1.0).abs() < 1e-3, "diff = {diff_s} s");
    }
}

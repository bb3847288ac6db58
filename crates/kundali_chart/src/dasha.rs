//! Dasha orchestration: bridges a finished chart with the pure-math
//! Vimshottari sequencer in kundali_vedic_base.

use chrono::{DateTime, Utc};
use kundali_vedic_base::{DashaPeriod, DashaSequence, antardashas, vimshottari_sequence};

use crate::chart_types::Chart;
use crate::error::ChartError;

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Nine mahadashas from birth, anchored to the chart's Moon.
pub fn build_dasha_sequence(chart: &Chart) -> Result<DashaSequence, ChartError> {
    let moon = chart.moon()?;
    vimshottari_sequence(chart.julian_moment.jd(), moon.longitude)
        .map_err(|e| ChartError::invalid("moon", e.to_string()))
}

/// JD UT of a UTC timestamp.
pub fn utc_to_jd(t: DateTime<Utc>) -> f64 {
    UNIX_EPOCH_JD + t.timestamp_millis() as f64 / MILLIS_PER_DAY
}

/// Mahadasha and antardasha running at `at`, if `at` falls inside the
/// sequence.
pub fn running_dasha(
    sequence: &DashaSequence,
    at: DateTime<Utc>,
) -> Option<(DashaPeriod, Option<DashaPeriod>)> {
    let jd = utc_to_jd(at);
    let maha = *sequence.active_at(jd)?;
    let antar = antardashas(&maha).into_iter().find(|p| p.contains(jd));
    Some((maha, antar))
}

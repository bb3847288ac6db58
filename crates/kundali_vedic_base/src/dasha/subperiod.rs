//! Proportional sub-period generation.
//!
//! child duration = (child full years / cycle years) × parent duration

use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
use crate::graha::Graha;

/// Snap the last child's end_jd to the parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
        last.duration_years = last.duration_days() / DAYS_PER_YEAR;
    }
}

/// Split `parent` among `sequence` in proportion to each lord's full years.
///
/// `sequence`: ordered lords and their full-cycle periods in years.
/// `total_years`: sum of all sequence periods.
pub fn proportional_children(
    parent: &DashaPeriod,
    sequence: &[(Graha, f64)],
    total_years: f64,
    child_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let parent_days = parent.duration_days();
    let mut children = Vec::with_capacity(sequence.len());
    let mut cursor = parent.start_jd;

    for &(lord, full_years) in sequence {
        let days = (full_years / total_years) * parent_days;
        let end = cursor + days;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            duration_years: days / DAYS_PER_YEAR,
            full_years: parent.full_years * full_years / total_years,
            level: child_level,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

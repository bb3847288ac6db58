#![allow(dead_code)]

use kundali_chart::{BirthInput, BodyPosition, Chart, ChartConfig, GeoLocation, chart_from_input};
use kundali_time::{CivilDate, CivilTime};
use kundali_vedic_base::Graha;

pub fn chart_at(y: i32, m: u32, d: u32, h: u32, min: u32, place: GeoLocation) -> Chart {
    let input = BirthInput::new(
        "fixture",
        CivilDate::new(y, m, d).unwrap(),
        CivilTime::hm(h, min).unwrap(),
        place,
    )
    .unwrap();
    chart_from_input(&input, &ChartConfig::default()).unwrap()
}

pub fn delhi() -> GeoLocation {
    GeoLocation::new(28.6139, 77.2090, 5.5).unwrap()
}

pub fn delhi_1990() -> Chart {
    chart_at(1990, 5, 15, 14, 30, delhi())
}

/// Move `graha` to `longitude`, keeping every derived field consistent.
pub fn place(chart: &mut Chart, graha: Graha, longitude: f64) {
    let asc = chart.ascendant.rashi_index;
    let aya = chart.ayanamsha;
    let body = chart.bodies.iter_mut().find(|b| b.graha == graha).unwrap();
    *body = BodyPosition::from_sidereal(graha, longitude, aya, asc, body.is_retrograde);
}

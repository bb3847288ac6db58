//! Chart construction over the public API.

use kundali_chart::{
    BirthPlace, ChartConfig, GeoLocation, PlaceSource, StaticGeocoder, build_dasha_sequence,
    chart_from_input, compute_chart, parse_date, parse_time,
};
use kundali_chart::{BirthInput, ChartError};
use kundali_time::AyanamshaSystem;
use kundali_vedic_base::{Graha, Rashi};

fn delhi_1990() -> kundali_chart::Chart {
    compute_chart(
        "Delhi 1990",
        parse_date("1990-05-15").unwrap(),
        parse_time("14:30").unwrap(),
        &BirthPlace::Coordinates(GeoLocation::new(28.6139, 77.2090, 5.5).unwrap()),
        None,
        &StaticGeocoder::new(),
        &ChartConfig::default(),
    )
    .unwrap()
}

#[test]
fn delhi_1990_positions_are_normalized() {
    let chart = delhi_1990();
    assert!((chart.julian_moment.jd() - 2_448_026.875).abs() < 1e-8);
    assert_eq!(chart.bodies.len(), 9);
    for b in &chart.bodies {
        assert!((0.0..360.0).contains(&b.longitude), "{:?} = {}", b.graha, b.longitude);
        assert!(b.rashi_index <= 11);
        assert!(b.nakshatra_index <= 26);
        assert!((1..=4).contains(&b.pada));
        assert!((1..=12).contains(&b.house));
        assert!((0.0..30.0).contains(&b.degree_in_sign));
    }
    assert!((0.0..360.0).contains(&chart.ascendant.longitude));
    assert!(!chart.ascendant.fallback);
}

#[test]
fn delhi_1990_sun_and_ayanamsha() {
    let chart = delhi_1990();
    // Lahiri 1990 ≈ 23.72°, Sun tropical ≈ 54.28° → 30.56° sidereal.
    assert!((chart.ayanamsha - 23.718).abs() < 0.01, "aya = {}", chart.ayanamsha);
    let sun = chart.body(Graha::Surya).unwrap();
    assert_eq!(sun.rashi, Rashi::Vrishabha, "sun = {}", sun.longitude);
    assert!((sun.longitude - 30.56).abs() < 0.05, "sun = {}", sun.longitude);
}

#[test]
fn delhi_1990_dasha() {
    let chart = delhi_1990();
    let seq = build_dasha_sequence(&chart).unwrap();
    assert_eq!(seq.periods.len(), 9);
    let full: f64 = seq.periods.iter().map(|p| p.full_years).sum();
    assert_eq!(full, 120.0);
    let first = &seq.periods[0];
    assert_eq!(first.start_jd, chart.julian_moment.jd());
    if seq.elapsed_fraction > 0.0 {
        assert!(first.duration_years < first.full_years);
    }
    let moon = chart.body(Graha::Chandra).unwrap();
    assert_eq!(seq.starting_lord, moon.nakshatra.lord());
}

#[test]
fn ketu_exactly_opposite_rahu() {
    for (y, m, d) in [(1900, 1, 1), (1947, 8, 15), (1990, 5, 15), (2020, 2, 29)] {
        let input = BirthInput::new(
            "n",
            kundali_time::CivilDate::new(y, m, d).unwrap(),
            kundali_time::CivilTime::hm(6, 0).unwrap(),
            GeoLocation::new(19.076, 72.8777, 5.5).unwrap(),
        )
        .unwrap();
        let chart = chart_from_input(&input, &ChartConfig::default()).unwrap();
        let rahu = chart.body(Graha::Rahu).unwrap().longitude;
        let ketu = chart.body(Graha::Ketu).unwrap().longitude;
        assert_eq!(ketu, (rahu + 180.0).rem_euclid(360.0), "{y}-{m}-{d}");
    }
}

#[test]
fn equal_houses_partition_the_circle() {
    let chart = delhi_1990();
    assert_eq!(chart.houses[0].longitude, chart.ascendant.longitude);
    for h in 0..12 {
        let cusp = chart.houses[h];
        assert_eq!(cusp.house as usize, h + 1);
        let next = chart.houses[(h + 1) % 12].longitude;
        let step = (next - cusp.longitude).rem_euclid(360.0);
        assert!((step - 30.0).abs() < 1e-9, "house {} step {step}", h + 1);
    }
}

#[test]
fn polar_birth_uses_fallback_ascendant() {
    for lat in [90.0, -90.0] {
        let chart = compute_chart(
            "pole",
            parse_date("2000-06-21").unwrap(),
            parse_time("12:00").unwrap(),
            &BirthPlace::Coordinates(GeoLocation::new(lat, 0.0, 0.0).unwrap()),
            None,
            &StaticGeocoder::new(),
            &ChartConfig::default(),
        )
        .unwrap();
        assert!(chart.ascendant.fallback);
        assert_eq!(chart.ascendant.longitude, 0.0);
        assert_eq!(chart.ascendant.rashi, Rashi::Mesha);
        assert!(chart.bodies.iter().all(|b| b.longitude.is_finite()));
    }
}

#[test]
fn named_place_and_fallback_are_reported() {
    let geocoder = StaticGeocoder::with_indian_cities();
    let date = parse_date("1990-05-15").unwrap();
    let time = parse_time("14:30").unwrap();
    let cfg = ChartConfig::default();

    let known = compute_chart(
        "a",
        date,
        time,
        &BirthPlace::Named("Delhi".into()),
        None,
        &geocoder,
        &cfg,
    )
    .unwrap();
    assert_eq!(known.place_source, PlaceSource::Geocoded);
    assert_eq!(known.bodies, delhi_1990().bodies);

    let unknown = compute_chart(
        "b",
        date,
        time,
        &BirthPlace::Named("Nowhere-on-Earth".into()),
        None,
        &geocoder,
        &cfg,
    )
    .unwrap();
    assert_eq!(unknown.place_source, PlaceSource::DefaultFallback);
    assert_eq!(unknown.input.location, GeoLocation::INDIA_CENTROID);
}

#[test]
fn timezone_override_shifts_the_instant() {
    let geocoder = StaticGeocoder::with_indian_cities();
    let chart = compute_chart(
        "tz",
        parse_date("1990-05-15").unwrap(),
        parse_time("14:30").unwrap(),
        &BirthPlace::Named("Delhi".into()),
        Some(6.5),
        &geocoder,
        &ChartConfig::default(),
    )
    .unwrap();
    let expected = 2_448_026.875 - 1.0 / 24.0;
    assert!((chart.julian_moment.jd() - expected).abs() < 1e-8);
}

#[test]
fn invalid_input_is_rejected() {
    let err = compute_chart(
        "x",
        parse_date("1850-01-01").unwrap(),
        parse_time("00:00").unwrap(),
        &BirthPlace::Coordinates(GeoLocation::INDIA_CENTROID),
        None,
        &StaticGeocoder::new(),
        &ChartConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput { field: "date", .. }), "{err}");

    let err = compute_chart(
        "x",
        parse_date("1990-01-01").unwrap(),
        parse_time("00:00").unwrap(),
        &BirthPlace::Coordinates(GeoLocation::INDIA_CENTROID),
        Some(15.0),
        &StaticGeocoder::new(),
        &ChartConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ChartError::InvalidInput { field: "utc_offset_hours", .. }));
}

#[test]
fn ayanamsha_choice_shifts_every_body_equally() {
    let input = delhi_1990().input;
    let lahiri = chart_from_input(&input, &ChartConfig::default()).unwrap();
    let raman = chart_from_input(
        &input,
        &ChartConfig {
            ayanamsha: AyanamshaSystem::Raman,
            ..ChartConfig::default()
        },
    )
    .unwrap();
    let shift = lahiri.ayanamsha - raman.ayanamsha;
    assert!((shift - (23.853 - 22.370)).abs() < 1e-9);
    for (a, b) in lahiri.bodies.iter().zip(&raman.bodies) {
        let d = (b.longitude - a.longitude).rem_euclid(360.0);
        assert!((d - shift).abs() < 1e-6, "{:?}: {d}", a.graha);
    }
}

#[test]
fn chart_serializes_to_json_and_back() {
    let chart = delhi_1990();
    let json = serde_json::to_string(&chart).unwrap();
    assert!(json.contains("\"Chandra\""));
    let back: kundali_chart::Chart = serde_json::from_str(&json).unwrap();
    assert_eq!(back.input, chart.input);
    assert_eq!(back.ascendant.rashi, chart.ascendant.rashi);
    for (a, b) in back.bodies.iter().zip(&chart.bodies) {
        assert_eq!(a.graha, b.graha);
        assert_eq!(a.nakshatra, b.nakshatra);
        assert!((a.longitude - b.longitude).abs() < 1e-12);
    }
}

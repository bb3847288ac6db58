mod common;

use common::{chart_at, delhi, delhi_1990, place};
use kundali_chart::{ChartError, GeoLocation, build_dasha_sequence, moon_sign, score_compatibility};
use kundali_vedic_base::{CompatibilityBand, Graha, Kuta};

fn mumbai() -> GeoLocation {
    GeoLocation::new(19.0760, 72.8777, 5.5).unwrap()
}

#[test]
fn kuta_points_stay_within_bounds() {
    let a = delhi_1990();
    let b = chart_at(1992, 11, 3, 7, 45, mumbai());
    let r = score_compatibility(&a, &b).unwrap();
    let mut total = 0.0;
    for (i, k) in r.kutas.iter().enumerate() {
        assert_eq!(k.max_points, (i + 1) as f64);
        assert!((0.0..=k.max_points).contains(&k.points), "{:?}", k.kuta);
        assert!(!k.detail.is_empty());
        total += k.points;
    }
    assert_eq!(r.total_points, total);
    assert_eq!(r.max_points, 36.0);
    assert!((0.0..=100.0).contains(&r.percentage));
    assert_eq!(r.band, CompatibilityBand::from_percentage(r.percentage));
}

#[test]
fn symmetric_kutas_do_not_depend_on_order() {
    let a = delhi_1990();
    for (y, m, d) in [(1985, 1, 20), (1992, 11, 3), (1999, 7, 9), (2003, 3, 30)] {
        let b = chart_at(y, m, d, 12, 0, delhi());
        let ab = score_compatibility(&a, &b).unwrap();
        let ba = score_compatibility(&b, &a).unwrap();
        for (x, y) in ab.kutas.iter().zip(&ba.kutas) {
            if !x.kuta.is_directional() {
                assert_eq!(x.points, y.points, "{:?}", x.kuta);
            }
        }
    }
}

#[test]
fn same_moon_nadi_and_bhakoot() {
    let a = delhi_1990();
    let mut b = chart_at(1995, 2, 1, 6, 0, mumbai());
    let moon = a.moon().unwrap().longitude;
    place(&mut b, Graha::Chandra, moon);
    let r = score_compatibility(&a, &b).unwrap();
    let by = |k: Kuta| r.kutas[k as usize].points;
    assert_eq!(by(Kuta::Nadi), 0.0);
    assert_eq!(by(Kuta::Bhakoot), 0.0);
    assert_eq!(by(Kuta::Yoni), 4.0);
    assert_eq!(by(Kuta::Gana), 6.0);
}

#[test]
fn missing_moon_on_either_side() {
    let a = delhi_1990();
    let mut b = a.clone();
    b.bodies.retain(|p| p.graha != Graha::Chandra);
    assert!(matches!(
        score_compatibility(&a, &b),
        Err(ChartError::MissingBody(Graha::Chandra))
    ));
    assert!(matches!(
        score_compatibility(&b, &a),
        Err(ChartError::MissingBody(Graha::Chandra))
    ));
}

#[test]
fn moon_is_read_from_its_longitude() {
    let a = delhi_1990();
    let b = chart_at(1992, 11, 3, 7, 45, mumbai());

    let mut stale = a.clone();
    let moon = stale.bodies.iter_mut().find(|p| p.graha == Graha::Chandra).unwrap();
    moon.longitude = (moon.longitude + 100.0).rem_euclid(360.0);
    let shifted = moon.longitude;

    let mut rebuilt = a.clone();
    place(&mut rebuilt, Graha::Chandra, shifted);

    let sign = moon_sign(&stale).unwrap();
    assert_eq!(sign, moon_sign(&rebuilt).unwrap());
    assert_ne!(sign.nakshatra, a.moon().unwrap().nakshatra);
    assert_eq!(
        build_dasha_sequence(&stale).unwrap().starting_lord,
        sign.nakshatra.lord()
    );
    assert_eq!(
        score_compatibility(&stale, &b).unwrap(),
        score_compatibility(&rebuilt, &b).unwrap()
    );
}

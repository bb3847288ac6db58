//! Integration tests for Vimshottari sequencing.

use kundali_vedic_base::{
    DAYS_PER_YEAR, DashaLevel, Graha, NAKSHATRA_SPAN_27, TOTAL_YEARS, antardashas,
    vimshottari_sequence,
};

const BIRTH_JD: f64 = 2_448_026.875;

#[test]
fn nine_periods_summing_to_120_full_years() {
    for k in 0..360 {
        let lon = k as f64 + 0.25;
        let seq = vimshottari_sequence(BIRTH_JD, lon).unwrap();
        assert_eq!(seq.periods.len(), 9);
        let full: f64 = seq.periods.iter().map(|p| p.full_years).sum();
        assert!((full - TOTAL_YEARS).abs() < 1e-9, "lon {lon}: {full}");
        let first = &seq.periods[0];
        assert!(first.duration_years > 0.0 && first.duration_years <= first.full_years);
    }
}

#[test]
fn every_lord_appears_once() {
    let seq = vimshottari_sequence(BIRTH_JD, 251.7).unwrap();
    let mut lords: Vec<Graha> = seq.periods.iter().map(|p| p.lord).collect();
    lords.sort_by_key(|g| g.index());
    lords.dedup();
    assert_eq!(lords.len(), 9);
}

#[test]
fn sequence_span_equals_balance_plus_remaining_cycle() {
    let lon = 3.0 * NAKSHATRA_SPAN_27 + 0.25 * NAKSHATRA_SPAN_27;
    let seq = vimshottari_sequence(BIRTH_JD, lon).unwrap();
    assert_eq!(seq.starting_lord, Graha::Chandra);
    assert!((seq.balance_years - 7.5).abs() < 1e-9);
    let span_years = (seq.end_jd().unwrap() - BIRTH_JD) / DAYS_PER_YEAR;
    assert!((span_years - (120.0 - 2.5)).abs() < 1e-6, "span {span_years}");
}

#[test]
fn utc_boundaries_are_available() {
    let seq = vimshottari_sequence(BIRTH_JD, 251.7).unwrap();
    let start = seq.periods[0].start_utc().unwrap();
    assert_eq!(start.to_rfc3339(), "1990-05-15T09:00:00+00:00");
    assert!(seq.periods[8].end_utc().is_some());
}

#[test]
fn antardasha_tree_covers_each_mahadasha() {
    let seq = vimshottari_sequence(BIRTH_JD, 251.7).unwrap();
    for maha in &seq.periods {
        let antar = antardashas(maha);
        assert_eq!(antar.len(), 9);
        assert_eq!(antar[0].lord, maha.lord);
        assert_eq!(antar[0].start_jd, maha.start_jd);
        assert_eq!(antar[8].end_jd, maha.end_jd);
        assert!(antar.iter().all(|a| a.level == DashaLevel::Antardasha));
        let days: f64 = antar.iter().map(|a| a.duration_days()).sum();
        assert!((days - maha.duration_days()).abs() < 1e-6);
    }
}

//! Geocentric longitude of the Moon.
//!
//! Principal periodic terms of the ELP-2000/82 based series in Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 47, Table 47.A, plus the
//! Venus, Jupiter and flattening additive terms. The truncated table keeps
//! the error near 0.01°, ample for nakshatra placement.

/// Moon's geometric ecliptic longitude in degrees [0, 360), mean equinox of date.
///
/// `t` = Julian centuries since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    // Multipliers of D, M, M', F and the coefficient of sin, in 1e-6 degrees.
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 28] = [
        // D     M     M'    F     Σl
        [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0],
        [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0],
        [ 2.0,  0.0,  0.0,  0.0,    658_314.0],
        [ 0.0,  0.0,  2.0,  0.0,    213_618.0],
        [ 0.0,  1.0,  0.0,  0.0,   -185_116.0],
        [ 0.0,  0.0,  0.0,  2.0,   -114_332.0],
        [ 2.0,  0.0, -2.0,  0.0,     58_793.0],
        [ 2.0, -1.0, -1.0,  0.0,     57_066.0],
        [ 2.0,  0.0,  1.0,  0.0,     53_322.0],
        [ 2.0, -1.0,  0.0,  0.0,     45_758.0],
        [ 0.0,  1.0, -1.0,  0.0,    -40_923.0],
        [ 1.0,  0.0,  0.0,  0.0,    -34_720.0],
        [ 0.0,  1.0,  1.0,  0.0,    -30_383.0],
        [ 2.0,  0.0,  0.0, -2.0,     15_327.0],
        [ 0.0,  0.0,  1.0,  2.0,    -12_528.0],
        [ 0.0,  0.0,  1.0, -2.0,     10_980.0],
        [ 4.0,  0.0, -1.0,  0.0,     10_675.0],
        [ 0.0,  0.0,  3.0,  0.0,     10_034.0],
        [ 4.0,  0.0, -2.0,  0.0,      8_548.0],
        [ 2.0,  1.0, -1.0,  0.0,     -7_888.0],
        [ 2.0,  1.0,  0.0,  0.0,     -6_766.0],
        [ 1.0,  0.0, -1.0,  0.0,     -5_163.0],
        [ 1.0,  1.0,  0.0,  0.0,      4_987.0],
        [ 2.0, -1.0,  1.0,  0.0,      4_036.0],
        [ 2.0,  0.0,  2.0,  0.0,      3_994.0],
        [ 4.0,  0.0,  0.0,  0.0,      3_861.0],
        [ 2.0,  0.0, -3.0,  0.0,      3_665.0],
        [ 0.0,  1.0, -2.0,  0.0,     -2_689.0],
    ];

    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    // Decreasing eccentricity of the Earth's orbit.
    let ecc = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sigma_l = 0.0_f64;
    for term in &TERMS {
        let arg = term[0] * d_r + term[1] * m_r + term[2] * mp_r + term[3] * f_r;
        let e_factor = match term[1].abs() as u8 {
            1 => ecc,
            2 => ecc * ecc,
            _ => 1.0,
        };
        sigma_l += term[4] * e_factor * arg.sin();
    }
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).to_radians().sin() + 318.0 * a2.sin();

    (lp + sigma_l / 1_000_000.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_time::jd_to_centuries;

    #[test]
    fn meeus_example_47a() {
        // 1992 Apr 12.0 TD: λ = 133°.162655 (full series)
        let t = jd_to_centuries(2_448_724.5);
        let lon = moon_longitude_deg(t);
        assert!((lon - 133.162_655).abs() < 0.05, "λ☾ = {lon}");
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        for &jd in &[2_448_000.5, 2_451_545.0, 2_460_000.5] {
            let a = moon_longitude_deg(jd_to_centuries(jd));
            let b = moon_longitude_deg(jd_to_centuries(jd + 1.0));
            let d = (b - a).rem_euclid(360.0);
            assert!((11.5..15.5).contains(&d), "daily motion at {jd} = {d}");
        }
    }

    #[test]
    fn range() {
        for k in 0..50 {
            let lon = moon_longitude_deg(-1.0 + k as f64 * 0.037);
            assert!((0.0..360.0).contains(&lon), "λ☾ = {lon}");
        }
    }
}

//! Chart construction: birth data to sidereal positions, ascendant and houses.

use kundali_ephem::{
    Body, is_retrograde, ketu_from_rahu_deg, rahu_tropical_deg, tropical_longitude_deg,
};
use kundali_time::{CivilDate, CivilTime, ayanamsha_deg, gmst_deg, local_sidereal_time_deg};
use kundali_vedic_base::{
    ALL_GRAHAS, Graha, equal_cusps, lagna_tropical_deg, mc_tropical_deg, normalize_360,
    sripati_cusps,
};

use crate::chart_types::{Ascendant, BodyPosition, Chart, HouseCusp};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::geocoder::{BirthPlace, Geocoder, PlaceSource};
use crate::input::BirthInput;

/// Physical body behind a graha; `None` for the nodes.
pub const fn body_for(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal ascendant at a local sidereal time and latitude.
///
/// Degenerate geometry (at or near the poles) yields 0° Mesha with
/// `fallback` set.
pub fn ascendant(lst_deg: f64, latitude_deg: f64, ayanamsha: f64) -> Ascendant {
    match lagna_tropical_deg(lst_deg, latitude_deg) {
        Some(tropical) => Ascendant::from_sidereal(tropical - ayanamsha, ayanamsha),
        None => {
            log::warn!(
                "ascendant undefined at latitude {latitude_deg}; substituting 0 deg Mesha"
            );
            Ascendant::fallback(ayanamsha)
        }
    }
}

/// Build a chart from birth data that already carries coordinates.
pub fn chart_from_input(input: &BirthInput, config: &ChartConfig) -> Result<Chart, ChartError> {
    build_chart(input, config, PlaceSource::Coordinates)
}

/// Resolve the place, apply any timezone override, validate, and build.
///
/// `tz_override` replaces the offset that came with the place (useful when
/// the gazetteer's standard offset does not apply to the birth date).
pub fn compute_chart(
    name: &str,
    date: CivilDate,
    time: CivilTime,
    place: &BirthPlace,
    tz_override: Option<f64>,
    geocoder: &dyn Geocoder,
    config: &ChartConfig,
) -> Result<Chart, ChartError> {
    config.validate()?;
    let resolved = place.resolve(geocoder, config.default_location);
    let location = match tz_override {
        Some(offset) => resolved.location.with_offset(offset),
        None => resolved.location,
    };
    let input = BirthInput::new(name, date, time, location)?;
    build_chart(&input, config, resolved.source)
}

fn build_chart(
    input: &BirthInput,
    config: &ChartConfig,
    place_source: PlaceSource,
) -> Result<Chart, ChartError> {
    input.validate()?;
    config.validate()?;

    let moment = input.julian_moment()?;
    let jd = moment.jd();
    let aya = ayanamsha_deg(config.ayanamsha, jd);
    let lst = local_sidereal_time_deg(gmst_deg(jd), input.location.longitude);

    let asc = ascendant(lst, input.location.latitude, aya);
    let midheaven = normalize_360(mc_tropical_deg(lst) - aya);

    let rahu_tropical = rahu_tropical_deg(moment.centuries());
    let rahu = normalize_360(rahu_tropical - aya);
    let mut bodies = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let (sidereal, retro) = match (graha, body_for(graha)) {
            (_, Some(body)) => {
                let tropical = tropical_longitude_deg(body, jd, &config.kepler);
                (
                    normalize_360(tropical - aya),
                    is_retrograde(body, jd, &config.kepler),
                )
            }
            (Graha::Ketu, None) => (ketu_from_rahu_deg(rahu), true),
            (_, None) => (rahu, true),
        };
        bodies.push(BodyPosition::from_sidereal(
            graha,
            sidereal,
            aya,
            asc.rashi_index,
            retro,
        ));
    }

    let houses = cusps_from(equal_cusps(asc.longitude));
    let sripati = config
        .include_sripati_cusps
        .then(|| cusps_from(sripati_cusps(asc.longitude, midheaven)));

    log::debug!(
        "chart {:?}: jd={jd:.6} ayanamsha={aya:.6} lst={lst:.4} asc={:.4}{}",
        input.name,
        asc.longitude,
        if asc.fallback { " (fallback)" } else { "" }
    );

    Ok(Chart {
        input: input.clone(),
        place_source,
        julian_moment: moment,
        ayanamsha_system: config.ayanamsha,
        ayanamsha: aya,
        local_sidereal_time: lst,
        ascendant: asc,
        midheaven,
        bodies,
        houses,
        sripati_cusps: sripati,
    })
}

fn cusps_from(longitudes: [f64; 12]) -> [HouseCusp; 12] {
    std::array::from_fn(|i| HouseCusp::new(i as u8 + 1, longitudes[i]))
}

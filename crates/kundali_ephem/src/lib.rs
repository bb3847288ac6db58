//! Approximate geocentric ephemeris for chart construction.
//!
//! Not ephemeris-grade: the Sun and Moon come from truncated analytic
//! series and the planets from mean Keplerian elements, good to a few
//! tenths of a degree over 1800–2050. Every output longitude is tropical
//! (equinox of date) and normalized to [0, 360).

pub mod body;
pub mod elements;
pub mod kepler;
pub mod longitude;
pub mod lunar;
pub mod lunar_nodes;
pub mod planets;
pub mod solar;

pub use body::{ALL_BODIES, Body};
pub use elements::{Orbit, OrbitalElements, elements_at};
pub use kepler::{
    KeplerConfig, MAX_KEPLER_TOLERANCE_RAD, MIN_KEPLER_ITERATIONS, solve_kepler, true_anomaly,
};
pub use longitude::{is_retrograde, longitude_speed_deg_per_day, tropical_longitude_deg};
pub use lunar::moon_longitude_deg;
pub use lunar_nodes::{ketu_from_rahu_deg, mean_node_deg, rahu_tropical_deg};
pub use planets::{geocentric_longitude_deg, heliocentric_longitude_deg, heliocentric_position};
pub use solar::sun_longitude_deg;

//! Birth chart engine.
//!
//! This crate provides the public entry points:
//! - [`compute_chart`] / [`chart_from_input`]: birth data to a [`Chart`]
//! - [`classify_doshas`]: Manglik, Kaal Sarp and Sade Sati
//! - [`build_dasha_sequence`]: Vimshottari mahadashas from birth
//! - [`score_compatibility`]: 8-kuta matching of two charts
//!
//! Every function is a pure computation over its arguments. Place names are
//! resolved through an injected [`Geocoder`]; nothing here touches the
//! network, and only [`ChartConfig::load`] reads a file.

pub mod chart;
pub mod chart_types;
pub mod compatibility;
pub mod config;
pub mod dasha;
pub mod dosha;
pub mod error;
pub mod geocoder;
pub mod input;

pub use chart::{ascendant, body_for, chart_from_input, compute_chart};
pub use chart_types::{Ascendant, BodyPosition, Chart, HouseCusp};
pub use compatibility::{CompatibilityResult, moon_sign, score_compatibility, score_moons};
pub use config::ChartConfig;
pub use dasha::{build_dasha_sequence, running_dasha, utc_to_jd};
pub use dosha::{
    DoshaReport, DoshaResult, KaalSarpReport, ManglikReport, SadeSatiReport, classify_doshas,
};
pub use error::ChartError;
pub use geocoder::{
    BirthPlace, GeoLocation, Geocoder, PlaceSource, ResolvedPlace, StaticGeocoder, resolve_place,
};
pub use input::{BirthInput, MIN_BIRTH_YEAR, parse_date, parse_time};

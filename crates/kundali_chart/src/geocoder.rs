//! Place-name resolution.
//!
//! The chart engine never performs I/O. A [`Geocoder`] is injected by the
//! caller; the built-in [`StaticGeocoder`] is an in-memory gazetteer. A place
//! no geocoder knows resolves to the configured default location, and the
//! substitution is recorded in [`ResolvedPlace::source`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Geographic coordinates plus the civil offset from UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Degrees north, [-90, 90].
    pub latitude: f64,
    /// Degrees east, [-180, 180].
    pub longitude: f64,
    /// Hours east of UTC, [-14, 14].
    pub utc_offset_hours: f64,
}

impl GeoLocation {
    /// Geographic centroid of India at IST.
    pub const INDIA_CENTROID: Self = Self {
        latitude: 20.5937,
        longitude: 78.9629,
        utc_offset_hours: 5.5,
    };

    /// Validated constructor.
    pub fn new(latitude: f64, longitude: f64, utc_offset_hours: f64) -> Result<Self, ChartError> {
        let loc = Self {
            latitude,
            longitude,
            utc_offset_hours,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::invalid(
                "latitude",
                format!("{} is outside [-90, 90]", self.latitude),
            ));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::invalid(
                "longitude",
                format!("{} is outside [-180, 180]", self.longitude),
            ));
        }
        if !self.utc_offset_hours.is_finite()
            || self.utc_offset_hours.abs() > kundali_time::civil::MAX_UTC_OFFSET_HOURS
        {
            return Err(ChartError::invalid(
                "utc_offset_hours",
                format!("{} is outside [-14, 14]", self.utc_offset_hours),
            ));
        }
        Ok(())
    }

    /// Same coordinates with a different UTC offset.
    pub const fn with_offset(self, utc_offset_hours: f64) -> Self {
        Self {
            utc_offset_hours,
            ..self
        }
    }
}

impl Default for GeoLocation {
    fn default() -> Self {
        Self::INDIA_CENTROID
    }
}

/// Place-name lookup.
pub trait Geocoder {
    /// Coordinates for `place`, or `None` when the name is unknown.
    fn lookup(&self, place: &str) -> Option<GeoLocation>;
}

/// Major Indian cities: (name, latitude, longitude). All at IST.
#[rustfmt::skip]
const INDIAN_CITIES: &[(&str, f64, f64)] = &[
    ("delhi",              28.6139, 77.2090),
    ("new delhi",          28.6139, 77.2090),
    ("mumbai",             19.0760, 72.8777),
    ("kolkata",            22.5726, 88.3639),
    ("chennai",            13.0827, 80.2707),
    ("bengaluru",          12.9716, 77.5946),
    ("bangalore",          12.9716, 77.5946),
    ("hyderabad",          17.3850, 78.4867),
    ("pune",               18.5204, 73.8567),
    ("ahmedabad",          23.0225, 72.5714),
    ("jaipur",             26.9124, 75.7873),
    ("lucknow",            26.8467, 80.9462),
    ("varanasi",           25.3176, 82.9739),
    ("chandigarh",         30.7333, 76.7794),
    ("bhopal",             23.2599, 77.4126),
    ("patna",              25.5941, 85.1376),
    ("ujjain",             23.1765, 75.7885),
    ("nagpur",             21.1458, 79.0882),
    ("kochi",               9.9312, 76.2673),
    ("guwahati",           26.1445, 91.7362),
    ("bhubaneswar",        20.2961, 85.8245),
    ("thiruvananthapuram",  8.5241, 76.9366),
];

const IST_OFFSET_HOURS: f64 = 5.5;

/// In-memory, case-insensitive gazetteer.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: BTreeMap<String, GeoLocation>,
}

fn normalize_key(place: &str) -> String {
    place.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

impl StaticGeocoder {
    /// An empty gazetteer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gazetteer preloaded with major Indian cities.
    pub fn with_indian_cities() -> Self {
        let mut g = Self::new();
        for &(name, latitude, longitude) in INDIAN_CITIES {
            g.insert(
                name,
                GeoLocation {
                    latitude,
                    longitude,
                    utc_offset_hours: IST_OFFSET_HOURS,
                },
            );
        }
        g
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, place: &str, location: GeoLocation) {
        self.entries.insert(normalize_key(place), location);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for StaticGeocoder {
    fn lookup(&self, place: &str) -> Option<GeoLocation> {
        self.entries.get(&normalize_key(place)).copied()
    }
}

/// Birth place as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BirthPlace {
    Coordinates(GeoLocation),
    Named(String),
}

/// How a place's coordinates were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceSource {
    /// Supplied directly by the caller.
    Coordinates,
    /// Found by the geocoder.
    Geocoded,
    /// Unknown place; the configured default was substituted.
    DefaultFallback,
}

/// A place reduced to coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    pub location: GeoLocation,
    pub source: PlaceSource,
}

/// Look `place` up, substituting `default` when the geocoder has no entry.
pub fn resolve_place(geocoder: &dyn Geocoder, place: &str, default: GeoLocation) -> ResolvedPlace {
    match geocoder.lookup(place) {
        Some(location) => ResolvedPlace {
            location,
            source: PlaceSource::Geocoded,
        },
        None => {
            log::warn!(
                "unknown place {place:?}; using default location ({}, {})",
                default.latitude,
                default.longitude
            );
            ResolvedPlace {
                location: default,
                source: PlaceSource::DefaultFallback,
            }
        }
    }
}

impl BirthPlace {
    /// Reduce to coordinates. Explicit coordinates pass through unchanged.
    pub fn resolve(&self, geocoder: &dyn Geocoder, default: GeoLocation) -> ResolvedPlace {
        match self {
            Self::Coordinates(location) => ResolvedPlace {
                location: *location,
                source: PlaceSource::Coordinates,
            },
            Self::Named(name) => resolve_place(geocoder, name, default),
        }
    }
}

//! Chart engine configuration.
//!
//! Every field has a default, so an empty TOML document is a valid config:
//!
//! ```toml
//! ayanamsha = "Lahiri"
//! include_sripati_cusps = false
//!
//! [kepler]
//! max_iterations = 50
//! tolerance_rad = 1e-10
//!
//! [default_location]
//! latitude = 20.5937
//! longitude = 78.9629
//! utc_offset_hours = 5.5
//! ```

use std::path::Path;

use kundali_ephem::{KeplerConfig, MAX_KEPLER_TOLERANCE_RAD, MIN_KEPLER_ITERATIONS};
use kundali_time::AyanamshaSystem;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;
use crate::geocoder::GeoLocation;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub ayanamsha: AyanamshaSystem,
    /// Also emit Sripati quadrant cusps.
    pub include_sripati_cusps: bool,
    pub kepler: KeplerConfig,
    /// Substituted when a place name cannot be geocoded.
    pub default_location: GeoLocation,
}

impl ChartConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ChartError> {
        let cfg: Self = toml::from_str(s).map_err(|e| ChartError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Io(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String, ChartError> {
        toml::to_string(self).map_err(|e| ChartError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.kepler.max_iterations < MIN_KEPLER_ITERATIONS {
            return Err(ChartError::Config(format!(
                "kepler.max_iterations must be at least {MIN_KEPLER_ITERATIONS}, got {}",
                self.kepler.max_iterations
            )));
        }
        if !self.kepler.is_valid() {
            return Err(ChartError::Config(format!(
                "kepler.tolerance_rad must be positive and below {MAX_KEPLER_TOLERANCE_RAD:e}, got {}",
                self.kepler.tolerance_rad
            )));
        }
        self.default_location
            .validate()
            .map_err(|e| ChartError::Config(format!("default_location: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = ChartConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ChartConfig::default());
        assert_eq!(cfg.ayanamsha, AyanamshaSystem::Lahiri);
        assert_eq!(cfg.default_location, GeoLocation::INDIA_CENTROID);
    }

    #[test]
    fn partial_document() {
        let cfg = ChartConfig::from_toml_str(
            r#"
            ayanamsha = "Raman"
            include_sripati_cusps = true
            [kepler]
            max_iterations = 20
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ayanamsha, AyanamshaSystem::Raman);
        assert!(cfg.include_sripati_cusps);
        assert_eq!(cfg.kepler.max_iterations, 20);
        assert_eq!(cfg.kepler.tolerance_rad, KeplerConfig::default().tolerance_rad);
    }

    #[test]
    fn rejects_weak_kepler_settings() {
        let err = ChartConfig::from_toml_str("[kepler]\nmax_iterations = 3\n").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)), "{err}");
        let err = ChartConfig::from_toml_str("[kepler]\ntolerance_rad = 1e-3\n").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)), "{err}");
    }

    #[test]
    fn rejects_bad_default_location() {
        let err = ChartConfig::from_toml_str(
            "[default_location]\nlatitude = 120.0\nlongitude = 0.0\nutc_offset_hours = 0.0\n",
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn rejects_unknown_ayanamsha() {
        assert!(ChartConfig::from_toml_str("ayanamsha = \"Nonesuch\"").is_err());
    }

    #[test]
    fn toml_round_trip() {
        let cfg = ChartConfig {
            ayanamsha: AyanamshaSystem::Krishnamurti,
            include_sripati_cusps: true,
            ..ChartConfig::default()
        };
        let text = cfg.to_toml_string().unwrap();
        assert_eq!(ChartConfig::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ChartConfig::load("/nonexistent/kundali.toml").unwrap_err();
        assert!(matches!(err, ChartError::Io(_)));
    }
}

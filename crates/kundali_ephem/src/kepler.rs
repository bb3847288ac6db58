//! Kepler's equation and the true anomaly.

use serde::{Deserialize, Serialize};

/// Iteration controls for [`solve_kepler`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeplerConfig {
    /// Hard cap on fixed-point iterations.
    pub max_iterations: u32,
    /// Stop once successive iterates differ by less than this (radians).
    pub tolerance_rad: f64,
}

/// Fewest iterations a valid config may request.
pub const MIN_KEPLER_ITERATIONS: u32 = 10;

/// Loosest tolerance a valid config may request.
pub const MAX_KEPLER_TOLERANCE_RAD: f64 = 1e-8;

impl Default for KeplerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance_rad: 1e-10,
        }
    }
}

impl KeplerConfig {
    /// Whether both knobs lie inside the accepted range.
    pub fn is_valid(&self) -> bool {
        self.max_iterations >= MIN_KEPLER_ITERATIONS
            && self.tolerance_rad > 0.0
            && self.tolerance_rad < MAX_KEPLER_TOLERANCE_RAD
    }
}

/// Solve `E = M + e·sin E` for the eccentric anomaly `E` (radians).
///
/// Plain fixed-point iteration starting from `E₀ = M`. It converges for
/// every e < 1; for the planetary eccentricities used here (e < 0.21) a
/// dozen iterations reach machine precision.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64, cfg: &KeplerConfig) -> f64 {
    let mut ecc = mean_anomaly_rad;
    for _ in 0..cfg.max_iterations {
        let next = mean_anomaly_rad + e * ecc.sin();
        if (next - ecc).abs() < cfg.tolerance_rad {
            return next;
        }
        ecc = next;
    }
    log::trace!(
        "kepler: iteration cap {} hit (M = {mean_anomaly_rad}, e = {e})",
        cfg.max_iterations
    );
    ecc
}

/// True anomaly `v` (radians) from the eccentric anomaly.
///
/// v = 2·atan(√((1+e)/(1−e))·tan(E/2))
pub fn true_anomaly(ecc_anomaly_rad: f64, e: f64) -> f64 {
    2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (ecc_anomaly_rad / 2.0).tan()).atan()
}

//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Forward (counter-clockwise) arc from `from` to `to`, in [0, 360).
pub fn forward_arc(from: f64, to: f64) -> f64 {
    normalize_360(to - from)
}

/// Whether `lon` lies strictly inside the forward arc `from → to`.
pub fn strictly_within_arc(lon: f64, from: f64, to: f64) -> bool {
    let d = forward_arc(from, lon);
    d > 0.0 && d < forward_arc(from, to)
}

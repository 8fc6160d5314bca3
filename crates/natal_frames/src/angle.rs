//! Angle normalization and unit conversion.
//!
//! All chart longitudes are carried in degrees in [0, 360); right
//! ascension crosses the module boundary in hours in [0, 24). These
//! helpers are total over finite input; NaN and infinity propagate
//! (callers validate coordinates before any angle math runs).

/// Normalize an angle in degrees to [0, 360).
///
/// `%` keeps the sign of the dividend, so a single negative-branch
/// correction suffices.
pub fn normalize_deg(deg: f64) -> f64 {
    let m = deg % 360.0;
    if m < 0.0 { m + 360.0 } else { m }
}

/// Normalize an hour angle to [0, 24).
pub fn normalize_hours(hours: f64) -> f64 {
    let m = hours % 24.0;
    if m < 0.0 { m + 24.0 } else { m }
}

/// Degrees to hour angle (15° per hour).
pub fn deg_to_hours(deg: f64) -> f64 {
    deg / 15.0
}

/// Hour angle to degrees.
pub fn hours_to_deg(hours: f64) -> f64 {
    hours * 15.0
}

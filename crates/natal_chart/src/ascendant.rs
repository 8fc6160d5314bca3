//! Ascendant and Midheaven derivation.
//!
//! The Ascendant is the ecliptic longitude rising on the eastern
//! horizon. From local sidereal time θ, latitude φ, and the fixed J2000
//! mean obliquity ε:
//!
//! `λ_raw = atan2(-cos θ, sin θ·cos ε + tan φ·sin ε)`
//!
//! The two-argument arctangent leaves a ±180° ambiguity that lands the
//! raw value on the setting (descendant) half of the horizon; the
//! unconditional 180° shift below selects the eastern intersection.
//! Exactly 180.0° takes the subtract branch.
//!
//! The formula diverges at the poles (tan φ); callers reject |φ| = 90°
//! before reaching this module. For every |φ| < 90° the atan2 arguments
//! stay finite and the result is well defined.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! standard spherical astronomy (Montenbruck & Pfleger).

use natal_frames::{COS_OBL, SIN_OBL, hours_to_deg, normalize_deg, normalize_hours};

/// Local sidereal time in hours from Greenwich sidereal time and east
/// longitude in degrees (15° of longitude per hour).
pub fn local_sidereal_hours(gst_hours: f64, longitude_deg: f64) -> f64 {
    normalize_hours(gst_hours + longitude_deg / 15.0)
}

/// Ecliptic longitude of the Ascendant in degrees, [0, 360).
pub fn ascendant_longitude_deg(lst_hours: f64, latitude_deg: f64) -> f64 {
    hemisphere_correct(ascendant_longitude_raw_deg(lst_hours, latitude_deg))
}

/// Eastern-horizon correction; without it the raw atan2 output is the
/// Descendant for half of all latitude/time combinations. Exactly
/// 180.0 takes the subtract branch.
pub(crate) fn hemisphere_correct(raw_deg: f64) -> f64 {
    if raw_deg < 180.0 {
        raw_deg + 180.0
    } else {
        raw_deg - 180.0
    }
}

/// The uncorrected atan2 output; crate-visible so the correction
/// invariant can be tested against it.
pub(crate) fn ascendant_longitude_raw_deg(lst_hours: f64, latitude_deg: f64) -> f64 {
    let theta = hours_to_deg(normalize_hours(lst_hours)).to_radians();
    let phi = latitude_deg.to_radians();

    let y = -theta.cos();
    let x = theta.sin() * COS_OBL + phi.tan() * SIN_OBL;
    normalize_deg(f64::atan2(y, x).to_degrees())
}

/// Ecliptic longitude of the Midheaven in degrees, [0, 360).
///
/// `MC = atan2(sin θ, cos θ·cos ε)`; no hemisphere ambiguity here, the
/// meridian pierces the ecliptic once going south.
pub fn midheaven_longitude_deg(lst_hours: f64) -> f64 {
    let theta = hours_to_deg(normalize_hours(lst_hours)).to_radians();
    normalize_deg(f64::atan2(theta.sin(), theta.cos() * COS_OBL).to_degrees())
}

/// Equatorial coordinates of a point on the ecliptic plane (β = 0),
/// using the fixed J2000 mean obliquity. Returns (right ascension in
/// hours, declination in degrees).
pub fn ecliptic_point_equatorial(lon_deg: f64) -> (f64, f64) {
    let lon = lon_deg.to_radians();
    let ra = f64::atan2(lon.sin() * COS_OBL, lon.cos());
    let dec = (SIN_OBL * lon.sin()).asin();
    (
        normalize_hours(ra.to_degrees() / 15.0),
        dec.to_degrees(),
    )
}

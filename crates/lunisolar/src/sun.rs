//! Geocentric solar position.
//!
//! Mean elements plus the equation of center, per Meeus,
//! "Astronomical Algorithms" (2nd ed), Chapter 25. The Sun's ecliptic
//! latitude never exceeds 1.2" and is carried as zero.

use crate::AU_KM;

/// Geometric geocentric solar position, mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees (always 0 in this series).
    pub lat_deg: f64,
    /// Earth-Sun distance in km.
    pub distance_km: f64,
}

/// Geometric mean longitude of the Sun in degrees, [0, 360).
pub fn mean_longitude_deg(t: f64) -> f64 {
    (280.46646 + 36_000.76983 * t + 0.000_3032 * t * t).rem_euclid(360.0)
}

/// Mean anomaly of the Sun in degrees, [0, 360).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    (357.52911 + 35_999.05029 * t - 0.000_1537 * t * t).rem_euclid(360.0)
}

/// Equation of center in degrees.
fn equation_of_center_deg(t: f64, m_rad: f64) -> f64 {
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m_rad.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m_rad).sin()
        + 0.000_289 * (3.0 * m_rad).sin()
}

/// Evaluate the solar series at `t` Julian centuries since J2000.0.
pub fn sun_position(t: f64) -> SunPosition {
    let l0 = mean_longitude_deg(t);
    let m_deg = mean_anomaly_deg(t);
    let m_rad = m_deg.to_radians();

    let c = equation_of_center_deg(t, m_rad);
    let true_lon = (l0 + c).rem_euclid(360.0);
    let true_anomaly_rad = (m_deg + c).to_radians();

    // Eccentricity of Earth's orbit.
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;
    let r_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * true_anomaly_rad.cos());

    SunPosition {
        lon_deg: true_lon,
        lat_deg: 0.0,
        distance_km: r_au * AU_KM,
    }
}

//! Ecliptic ↔ equatorial spherical rotations.
//!
//! Both directions are the standard single-axis rotation about the
//! vernal-equinox direction by the obliquity `ε`. Angles are radians
//! throughout this module; degree/hour conventions live at the crate
//! boundaries that consume it.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 13.3/13.4.

/// Ecliptic (λ, β) to equatorial (α, δ), all radians, for obliquity
/// `eps` radians. Right ascension is returned in [0, 2π).
pub fn ecliptic_to_equatorial(lon: f64, lat: f64, eps: f64) -> (f64, f64) {
    let (sin_lon, cos_lon) = lon.sin_cos();
    let (sin_eps, cos_eps) = eps.sin_cos();
    let ra = f64::atan2(sin_lon * cos_eps - lat.tan() * sin_eps, cos_lon);
    let dec = (lat.sin() * cos_eps + lat.cos() * sin_eps * sin_lon).asin();
    (ra.rem_euclid(std::f64::consts::TAU), dec)
}

/// Equatorial (α, δ) to ecliptic (λ, β), all radians, for obliquity
/// `eps` radians. Longitude is returned in [0, 2π).
pub fn equatorial_to_ecliptic(ra: f64, dec: f64, eps: f64) -> (f64, f64) {
    let (sin_ra, cos_ra) = ra.sin_cos();
    let (sin_eps, cos_eps) = eps.sin_cos();
    let lon = f64::atan2(sin_ra * cos_eps + dec.tan() * sin_eps, cos_ra);
    let lat = (dec.sin() * cos_eps - dec.cos() * sin_eps * sin_ra).asin();
    (lon.rem_euclid(std::f64::consts::TAU), lat)
}

/// Rotate a Cartesian vector from the ecliptic frame to the equatorial
/// frame sharing its equinox, for obliquity `eps` radians.
pub fn ecliptic_to_equatorial_vec(v: &[f64; 3], eps: f64) -> [f64; 3] {
    let (sin_eps, cos_eps) = eps.sin_cos();
    [
        v[0],
        v[1] * cos_eps - v[2] * sin_eps,
        v[1] * sin_eps + v[2] * cos_eps,
    ]
}

/// Rotate a Cartesian vector from the equatorial frame back to the
/// ecliptic frame sharing its equinox.
pub fn equatorial_to_ecliptic_vec(v: &[f64; 3], eps: f64) -> [f64; 3] {
    let (sin_eps, cos_eps) = eps.sin_cos();
    [
        v[0],
        v[1] * cos_eps + v[2] * sin_eps,
        -v[1] * sin_eps + v[2] * cos_eps,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obliquity::OBLIQUITY_J2000_RAD;

    const EPS_TOL: f64 = 1e-9;

    #[test]
    fn equinox_points_fixed() {
        // λ = 0 and λ = 180 on the ecliptic lie on the equator.
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, OBLIQUITY_J2000_RAD);
        assert!(ra.abs() < EPS_TOL);
        assert!(dec.abs() < EPS_TOL);
        let (ra, dec) = ecliptic_to_equatorial(std::f64::consts::PI, 0.0, OBLIQUITY_J2000_RAD);
        assert!((ra - std::f64::consts::PI).abs() < EPS_TOL);
        assert!(dec.abs() < EPS_TOL);
    }

    #[test]
    fn solstice_declination_is_obliquity() {
        // λ = 90: the summer solstice point sits δ = +ε.
        let (ra, dec) =
            ecliptic_to_equatorial(std::f64::consts::FRAC_PI_2, 0.0, OBLIQUITY_J2000_RAD);
        assert!((ra - std::f64::consts::FRAC_PI_2).abs() < EPS_TOL);
        assert!((dec - OBLIQUITY_J2000_RAD).abs() < EPS_TOL);
    }

    #[test]
    fn meeus_example_13a() {
        // Pollux: α = 116.328942°, δ = 28.026183° → λ = 113.215630°,
        // β = 6.684170° (Meeus uses ε = 23.4392911°).
        let (lon, lat) = equatorial_to_ecliptic(
            116.328942_f64.to_radians(),
            28.026183_f64.to_radians(),
            OBLIQUITY_J2000_RAD,
        );
        assert!((lon.to_degrees() - 113.215630).abs() < 1e-5, "λ = {}", lon.to_degrees());
        assert!((lat.to_degrees() - 6.684170).abs() < 1e-5, "β = {}", lat.to_degrees());
    }

    #[test]
    fn roundtrip_on_ecliptic() {
        // β = 0 round trip must hold to 1e-6 degrees over the full circle.
        for i in 0..360 {
            let lon = (i as f64).to_radians();
            let (ra, dec) = ecliptic_to_equatorial(lon, 0.0, OBLIQUITY_J2000_RAD);
            let (back, lat) = equatorial_to_ecliptic(ra, dec, OBLIQUITY_J2000_RAD);
            let diff = (back.to_degrees() - i as f64).abs();
            let diff = diff.min(360.0 - diff);
            assert!(diff < 1e-6, "λ = {i}: back = {}", back.to_degrees());
            assert!(lat.to_degrees().abs() < 1e-6, "λ = {i}: β = {}", lat.to_degrees());
        }
    }

    #[test]
    fn vector_rotation_matches_spherical_form() {
        // The solstice direction on the ecliptic maps to δ = ε.
        let v = ecliptic_to_equatorial_vec(&[0.0, 1.0, 0.0], OBLIQUITY_J2000_RAD);
        assert!((v[0]).abs() < EPS_TOL);
        assert!((v[1] - OBLIQUITY_J2000_RAD.cos()).abs() < EPS_TOL);
        assert!((v[2] - OBLIQUITY_J2000_RAD.sin()).abs() < EPS_TOL);
    }

    #[test]
    fn vector_roundtrip() {
        let v = [0.3, -0.7, 0.648];
        let eq = ecliptic_to_equatorial_vec(&v, OBLIQUITY_J2000_RAD);
        let back = equatorial_to_ecliptic_vec(&eq, OBLIQUITY_J2000_RAD);
        for i in 0..3 {
            assert!((v[i] - back[i]).abs() < EPS_TOL, "axis {i}");
        }
    }

    #[test]
    fn roundtrip_off_ecliptic() {
        for &(lon_deg, lat_deg) in &[(10.0, 5.0), (200.0, -5.2), (359.0, 1.0), (123.4, -4.9)] {
            let (ra, dec) = ecliptic_to_equatorial(
                (lon_deg as f64).to_radians(),
                (lat_deg as f64).to_radians(),
                OBLIQUITY_J2000_RAD,
            );
            let (lon, lat) = equatorial_to_ecliptic(ra, dec, OBLIQUITY_J2000_RAD);
            assert!((lon.to_degrees() - lon_deg).abs() < 1e-8);
            assert!((lat.to_degrees() - lat_deg).abs() < 1e-8);
        }
    }
}

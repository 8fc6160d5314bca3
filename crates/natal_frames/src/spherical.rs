//! Cartesian ↔ spherical coordinate conversion.

use std::f64::consts::TAU;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360), measured in the x-y plane
    /// from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90], elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from origin in km.
    pub distance_km: f64,
}

/// Convert Cartesian `[x, y, z]` (km) to spherical coordinates.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance_km: 0.0,
        };
    }

    let lon = y.atan2(x).rem_euclid(TAU);
    let lat = (z / r).asin();

    SphericalCoords {
        lon_deg: lon.to_degrees(),
        lat_deg: lat.to_degrees(),
        distance_km: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]` (km).
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon_rad = s.lon_deg.to_radians();
    let lat_rad = s.lat_deg.to_radians();
    let cos_lat = lat_rad.cos();
    [
        s.distance_km * cos_lat * lon_rad.cos(),
        s.distance_km * cos_lat * lon_rad.sin(),
        s.distance_km * lat_rad.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn along_axes() {
        let s = cartesian_to_spherical(&[1.0e8, 0.0, 0.0]);
        assert!(s.lon_deg.abs() < EPS && s.lat_deg.abs() < EPS);

        let s = cartesian_to_spherical(&[0.0, 1.0e8, 0.0]);
        assert!((s.lon_deg - 90.0).abs() < EPS);

        let s = cartesian_to_spherical(&[0.0, 0.0, 1.0e8]);
        assert!((s.lat_deg - 90.0).abs() < EPS);
    }

    #[test]
    fn longitude_always_in_range() {
        let s = cartesian_to_spherical(&[-1.0, -1.0, 0.0]);
        assert!((0.0..360.0).contains(&s.lon_deg));
        assert!((s.lon_deg - 225.0).abs() < EPS);
    }

    #[test]
    fn roundtrip() {
        let xyz = [1.234e8, -5.678e7, 3.456e7];
        let s = cartesian_to_spherical(&xyz);
        let back = spherical_to_cartesian(&s);
        for i in 0..3 {
            assert!(
                (xyz[i] - back[i]).abs() < EPS * xyz[i].abs().max(1.0),
                "axis {i}: {:.10e} != {:.10e}",
                xyz[i],
                back[i]
            );
        }
    }

    #[test]
    fn zero_vector() {
        let s = cartesian_to_spherical(&[0.0, 0.0, 0.0]);
        assert_eq!(s.distance_km, 0.0);
        assert_eq!(s.lon_deg, 0.0);
    }
}
